use std::{fmt, path::PathBuf};

/// Failures a caller may want to tell apart.
///
/// These travel inside `anyhow::Error`; use `downcast_ref::<JournalError>()`
/// to branch on them.
#[derive(Debug)]
pub enum JournalError {
    /// Both `news` and `journal` were empty. Nothing reached the store.
    EmptySubmission,
    /// The collection could not be written, so the entry does not exist.
    NotSaved {
        path: PathBuf,
        error: anyhow::Error,
    },
    InvalidInput {
        input: String,
        error: String,
    },
}

impl fmt::Display for JournalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalError::EmptySubmission => {
                write!(f, "nothing to save: news and journal are both empty")
            }
            JournalError::NotSaved { path, error } => {
                write!(f, "entry not saved to {}: {error:#}", path.display())
            }
            JournalError::InvalidInput { input, error } => {
                write!(f, "could not process '{input}': {error}")
            }
        }
    }
}

impl std::error::Error for JournalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JournalError::NotSaved { error, .. } => {
                let inner: &(dyn std::error::Error + 'static) = error.as_ref();
                Some(inner)
            }
            _ => None,
        }
    }
}
