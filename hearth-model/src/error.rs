use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidListingId(String),
    SlideOutOfRange { target: usize, len: usize },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidListingId(raw) => {
                write!(f, "invalid listing id: {raw:?}")
            }
            ModelError::SlideOutOfRange { target, len } => {
                write!(f, "slide {target} out of range for {len} slides")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
