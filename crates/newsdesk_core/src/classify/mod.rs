//! Classification façade over the external model collaborator.
//!
//! # Responsibility
//! - Define the one-call/one-inference contract used by the presentation
//!   layer.
//! - Normalize backend output into a category id understood by the taxonomy
//!   registry.
//!
//! # Invariants
//! - Backends are constructed once at startup and hold no per-request state;
//!   there is no caching and no batching.
//! - Backend failure is reported as a value, never as a panic.
//! - Empty-input rejection happens upstream of the façade via
//!   [`non_empty_input`]; the façade itself imposes no length limits.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod command;
mod keyword;

pub use command::CommandClassifier;
pub use keyword::KeywordClassifier;

/// Integer index into the fixed topic taxonomy.
pub type CategoryId = i64;

/// Failure of the model collaborator.
#[derive(Debug)]
pub enum ClassifyError {
    /// The collaborator could not be reached or failed outright.
    Unavailable(String),
    /// The collaborator answered, but its output is not a class id.
    InvalidOutput(String),
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "classification unavailable: {reason}"),
            Self::InvalidOutput(reason) => write!(f, "unusable model output: {reason}"),
        }
    }
}

impl Error for ClassifyError {}

/// Single-example inference seam over the pre-trained model artifact.
pub trait Classifier {
    fn classify(&self, text: &str) -> Result<CategoryId, ClassifyError>;
}

/// Rejection of empty or whitespace-only input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError;

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "input text must not be empty or whitespace-only")
    }
}

impl Error for ValidationError {}

/// Gate applied by callers before invoking a [`Classifier`].
///
/// Returns the input verbatim (untrimmed) on success so the stored text
/// matches what the user submitted.
pub fn non_empty_input(text: &str) -> Result<&str, ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError)
    } else {
        Ok(text)
    }
}
