use std::fmt;
use validator::{ValidationError, ValidationErrors};

use crate::constants::{CATEGORY_IN_PROGRESS_ERROR, CONCURRENT_SPIN_ERROR, EMPTY_CATEGORY_ERROR};

#[derive(Debug)]
pub enum RouletteError {
    InvalidCategory { name: String },
    ConcurrentSpinRejected,
    SpinInProgress,
    UnknownCategory(usize),
    InvalidConfig(ValidationErrors),
    InvalidCatalog(ValidationError),
}

impl RouletteError {
    /// Rejections the UI drops silently rather than surfacing to the user.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::ConcurrentSpinRejected | Self::SpinInProgress)
    }
}

impl fmt::Display for RouletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategory { name } => write!(f, "{}: {}", EMPTY_CATEGORY_ERROR, name),
            Self::ConcurrentSpinRejected => write!(f, "{}", CONCURRENT_SPIN_ERROR),
            Self::SpinInProgress => write!(f, "{}", CATEGORY_IN_PROGRESS_ERROR),
            Self::UnknownCategory(index) => write!(f, "No category at index {}", index),
            Self::InvalidConfig(e) => write!(f, "Invalid roulette config: {}", e),
            Self::InvalidCatalog(e) => write!(f, "Invalid menu catalog: {}", e),
        }
    }
}

impl std::error::Error for RouletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::InvalidCatalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for RouletteError {
    fn from(err: ValidationErrors) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<ValidationError> for RouletteError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidCatalog(err)
    }
}
