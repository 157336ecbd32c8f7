use bq_core::Image;
use bq_patch::{PatchConfig, find_brightest_patches, score_patches};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn build_textured_u8(width: usize, height: usize) -> Image<u8> {
    let mut data = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        data.push((i % 251) as u8);
    }
    Image::from_vec(width, height, data).expect("valid image")
}

fn bench_score_patches(c: &mut Criterion) {
    let img = build_textured_u8(1280, 1024);
    let view = img.as_view();

    c.bench_function("score_patches_5x5_1280x1024", |b| {
        b.iter(|| {
            let scores = score_patches(black_box(&view), 5).expect("patch fits");
            black_box(scores.len());
        });
    });
}

fn bench_find_brightest(c: &mut Criterion) {
    let img = build_textured_u8(640, 480);
    let view = img.as_view();
    let cfg = PatchConfig::default();

    c.bench_function("find_brightest_patches_4x5x5_640x480", |b| {
        b.iter(|| {
            let centers = find_brightest_patches(black_box(&view), black_box(&cfg))
                .expect("four patches fit");
            black_box(centers);
        });
    });
}

criterion_group!(benches, bench_score_patches, bench_find_brightest);
criterion_main!(benches);
