// Either Error Handling
// Central location for error types and traits shared by the workspace

use std::error::Error as StdError;
use std::fmt;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use thiserror;

mod codec;

pub use codec::{codes, CodecError, CodecResult};

/// Error domains representing different components of the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorDomain {
    Codec,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDomain::Codec => write!(f, "codec"),
        }
    }
}

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Standard error message format for serialization
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub domain: ErrorDomain,
    pub message: String,
}

/// Base trait for all errors raised by the workspace.
pub trait EitherError: StdError + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Returns a unique static string code for this error type.
    fn error_code(&self) -> &'static str;

    /// Numeric code within the error's domain.
    fn code(&self) -> ErrorCode;

    /// The component this error originates from.
    fn domain(&self) -> ErrorDomain;

    /// Renders the error as a serializable message.
    fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.code(),
            domain: self.domain(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display_is_zero_padded() {
        assert_eq!(ErrorCode(7).to_string(), "0007");
        assert_eq!(ErrorCode(1003).to_string(), "1003");
    }

    #[test]
    fn test_error_message_carries_code_and_text() {
        let message = CodecError::UnknownTag("X".to_string()).to_message();
        assert_eq!(message.code, codes::UNKNOWN_TAG);
        assert_eq!(message.domain, ErrorDomain::Codec);
        assert_eq!(message.message, "Unknown tag: \"X\"");
    }

    #[test]
    fn test_error_message_serializes() {
        let message = CodecError::MissingTag.to_message();
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["domain"], "Codec");
        assert_eq!(json["code"], 1002);
    }
}
