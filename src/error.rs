//! Error types for list operations.

/// Errors raised by [`ItemList`](crate::list::ItemList) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    #[error("Index {index} out of range for list of {len} items")]
    OutOfRange { index: usize, len: usize },
}

impl ListError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub(crate) fn type_mismatch(found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: "Item",
            found: found.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
