//! Decoding tagged records produced by the `encode` command.

use either_core::codec;
use either_core::Either;
use either_error::{EitherError, ErrorMessage};

/// Decodes a `{"T","O"}` record holding a string error or an integer.
///
/// A rejected record is reported as a serializable [`ErrorMessage`].
pub fn decode_result_record(json: &str) -> Result<Either<String, u32>, ErrorMessage> {
    codec::from_json_str(json).map_err(|err| {
        tracing::warn!(code = err.error_code(), error = %err, "rejected record");
        err.to_message()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use either_core::{left, right};
    use either_error::{codes, ErrorDomain};

    #[test]
    fn test_decodes_both_alternatives() {
        assert_eq!(decode_result_record(r#"{"T":"R","O":42}"#).unwrap(), right(42));
        assert_eq!(
            decode_result_record(r#"{"T":"L","O":"Cannot parse an empty string"}"#).unwrap(),
            left("Cannot parse an empty string".to_string())
        );
    }

    #[test]
    fn test_rejection_becomes_error_message() {
        let message = decode_result_record(r#"{"T":"X","O":1}"#).unwrap_err();
        assert_eq!(message.code, codes::UNKNOWN_TAG);
        assert_eq!(message.domain, ErrorDomain::Codec);

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["code"], 1004);
        assert_eq!(json["domain"], "Codec");
    }

    #[test]
    fn test_integer_payload_without_value_is_rejected() {
        let message = decode_result_record(r#"{"T":"R"}"#).unwrap_err();
        assert_eq!(message.code, codes::PAYLOAD);
    }
}
