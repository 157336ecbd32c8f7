use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    OutOfBounds,
    InvalidStride,
    /// Patch size is zero or exceeds one of the grid dimensions.
    InvalidConfiguration {
        patch_size: usize,
        width: usize,
        height: usize,
    },
    /// The greedy scan ran out of candidates before enough patches were found.
    InsufficientPatches {
        patch_size: usize,
        num_patches: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::InvalidConfiguration {
                patch_size,
                width,
                height,
            } => write!(
                f,
                "invalid configuration: a {patch_size}x{patch_size} patch does not fit \
                 a {width}x{height} image"
            ),
            Self::InsufficientPatches {
                patch_size,
                num_patches,
            } => write!(
                f,
                "can't find {num_patches} non-overlapping {patch_size}x{patch_size} patches, \
                 decrease the patch_size or num_patches"
            ),
        }
    }
}

impl std::error::Error for Error {}
