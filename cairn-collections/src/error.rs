//! Error types for queue operations.

use std::fmt;

/// Error returned by fallible queue operations.
///
/// All variants are recoverable: the queue is left unchanged and remains
/// fully usable after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue has no entries to peek at or extract.
    Empty,
    /// The operation names a key that is not in the queue. Keys enter the
    /// queue only through `add`.
    KeyNotFound,
    /// A structural primitive was asked to act on a position it does not
    /// have. Carries a static description of the misuse.
    InvalidOperation(&'static str),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::KeyNotFound => write!(f, "key is not in the queue"),
            QueueError::InvalidOperation(what) => write!(f, "invalid operation: {what}"),
        }
    }
}

impl std::error::Error for QueueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(QueueError::Empty.to_string(), "queue is empty");
        assert_eq!(QueueError::KeyNotFound.to_string(), "key is not in the queue");
        assert_eq!(
            QueueError::InvalidOperation("heap position out of range").to_string(),
            "invalid operation: heap position out of range"
        );
    }
}
