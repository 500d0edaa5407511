//! Error types for storage key lookups.

use thiserror::Error;

/// Error type for resolving strings against the key registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageKeyError {
    /// The string is not one of the registered storage key literals
    #[error("Unknown storage key: {0}")]
    UnknownKey(String),

    /// The string is not one of the registered logical names
    #[error("Unknown logical name: {0}")]
    UnknownName(String),
}

/// Result type for storage key lookups.
pub type StorageKeyResult<T> = Result<T, StorageKeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageKeyError::UnknownKey("userMail".to_string());
        assert_eq!(err.to_string(), "Unknown storage key: userMail");

        let err = StorageKeyError::UnknownName("USER_MAIL".to_string());
        assert_eq!(err.to_string(), "Unknown logical name: USER_MAIL");
    }
}
