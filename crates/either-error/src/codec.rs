// Codec error types
// Raised when an Either cannot be written to or recovered from its tagged record form

use thiserror::Error;

use crate::{EitherError, ErrorCode, ErrorDomain};

/// Codec error codes
pub mod codes {
    use crate::ErrorCode;

    // Codec error codes start with 1000
    pub const NOT_AN_OBJECT: ErrorCode = ErrorCode(1001);
    pub const MISSING_TAG: ErrorCode = ErrorCode(1002);
    pub const INVALID_TAG: ErrorCode = ErrorCode(1003);
    pub const UNKNOWN_TAG: ErrorCode = ErrorCode(1004);
    pub const PAYLOAD: ErrorCode = ErrorCode(1005);
    pub const JSON: ErrorCode = ErrorCode(1006);
    pub const BINARY: ErrorCode = ErrorCode(1007);
}

/// Errors produced while encoding or decoding the tagged representation
#[derive(Error, Debug)]
pub enum CodecError {
    /// The encoded value is not a record
    #[error("Cannot parse {0} into Either")]
    NotAnObject(String),

    /// The discriminant field is absent
    #[error("Missing tag field")]
    MissingTag,

    /// The discriminant field is present but not a string
    #[error("Cannot parse tag {0}")]
    InvalidTag(String),

    /// The discriminant names neither variant
    #[error("Unknown tag: {0:?}")]
    UnknownTag(String),

    /// The held value could not be converted
    #[error("Payload error: {0}")]
    Payload(#[source] serde_json::Error),

    /// Malformed JSON text
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding failure
    #[error("Binary codec error: {0}")]
    Binary(String),
}

/// Result alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

impl EitherError for CodecError {
    fn error_code(&self) -> &'static str {
        match self {
            CodecError::NotAnObject(_) => "CODEC_NOT_AN_OBJECT",
            CodecError::MissingTag => "CODEC_MISSING_TAG",
            CodecError::InvalidTag(_) => "CODEC_INVALID_TAG",
            CodecError::UnknownTag(_) => "CODEC_UNKNOWN_TAG",
            CodecError::Payload(_) => "CODEC_PAYLOAD",
            CodecError::Json(_) => "CODEC_JSON",
            CodecError::Binary(_) => "CODEC_BINARY",
        }
    }

    fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            CodecError::NotAnObject(_) => NOT_AN_OBJECT,
            CodecError::MissingTag => MISSING_TAG,
            CodecError::InvalidTag(_) => INVALID_TAG,
            CodecError::UnknownTag(_) => UNKNOWN_TAG,
            CodecError::Payload(_) => PAYLOAD,
            CodecError::Json(_) => JSON,
            CodecError::Binary(_) => BINARY,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Codec
    }
}

impl CodecError {
    /// True when the input was not a well-formed Either record (including
    /// malformed JSON text), as opposed to a payload that failed to convert
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            CodecError::NotAnObject(_)
                | CodecError::MissingTag
                | CodecError::InvalidTag(_)
                | CodecError::UnknownTag(_)
                | CodecError::Json(_)
        )
    }
}
