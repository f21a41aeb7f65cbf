//! Error types for argsplit.
//!
//! Every error is local to a single call: either the constructor rejected a
//! token (only in strict mode) or an accessor was asked for something that
//! is not there (only with [`Lookup::Required`](crate::Lookup::Required),
//! except for negative indices which are always rejected).

use thiserror::Error;

/// Stable numeric code for an [`ArgError`].
///
/// Callers that map errors onto exit statuses can rely on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// Option name is not in the allow-list
    NotAllowedOption = 1,
    /// Token starts with `--` but the rest is not a valid option
    InvalidArgument = 2,
    /// Required option lookup found nothing
    NonexistentOption = 3,
    /// Required param lookup found nothing
    NonexistentParam = 4,
    /// Param lookup with a negative index
    InvalidIndex = 5,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotAllowedOption => write!(f, "not-allowed-option"),
            ErrorCode::InvalidArgument => write!(f, "invalid-argument"),
            ErrorCode::NonexistentOption => write!(f, "nonexistent-option"),
            ErrorCode::NonexistentParam => write!(f, "nonexistent-param"),
            ErrorCode::InvalidIndex => write!(f, "invalid-index"),
        }
    }
}

/// Error raised while classifying arguments or looking them up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    // Construction errors (strict mode only)
    /// Token in the options region is malformed
    #[error("Invalid argument: {arg}")]
    InvalidArgument { arg: String },

    /// Parsed option name is not in the allow-list
    #[error("Not allowed option '{name}'")]
    DisallowedOption { name: String },

    // Lookup errors
    /// Required option is not set
    #[error("Option '{name}' does not exist")]
    NonexistentOption { name: String },

    /// Required param is not present
    #[error("Param '{index}' does not exist")]
    NonexistentParam { index: usize },

    /// Param index is negative
    #[error("Index cannot be lower than 0")]
    InvalidIndex { index: isize },
}

impl ArgError {
    /// Numeric code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ArgError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            ArgError::DisallowedOption { .. } => ErrorCode::NotAllowedOption,
            ArgError::NonexistentOption { .. } => ErrorCode::NonexistentOption,
            ArgError::NonexistentParam { .. } => ErrorCode::NonexistentParam,
            ArgError::InvalidIndex { .. } => ErrorCode::InvalidIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ArgError::InvalidArgument {
            arg: "--invalid()argument".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid argument: --invalid()argument");

        let e = ArgError::DisallowedOption {
            name: "option2".to_string(),
        };
        assert_eq!(e.to_string(), "Not allowed option 'option2'");

        let e = ArgError::NonexistentOption {
            name: "somebody".to_string(),
        };
        assert_eq!(e.to_string(), "Option 'somebody' does not exist");

        let e = ArgError::NonexistentParam { index: 23 };
        assert_eq!(e.to_string(), "Param '23' does not exist");

        let e = ArgError::InvalidIndex { index: -1 };
        assert_eq!(e.to_string(), "Index cannot be lower than 0");
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            ArgError::DisallowedOption { name: "x".into() }.code() as u8,
            1
        );
        assert_eq!(ArgError::InvalidArgument { arg: "--!".into() }.code() as u8, 2);
        assert_eq!(
            ArgError::NonexistentOption { name: "x".into() }.code() as u8,
            3
        );
        assert_eq!(ArgError::NonexistentParam { index: 0 }.code() as u8, 4);
        assert_eq!(ArgError::InvalidIndex { index: -3 }.code() as u8, 5);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::InvalidIndex.to_string(), "invalid-index");
        assert_eq!(ErrorCode::NotAllowedOption.to_string(), "not-allowed-option");
    }
}
