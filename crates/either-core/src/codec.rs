// Tagged Record Codec
//
// Structural encoding of `Either` as a two-field record: a discriminant
// under "T" ("L" or "R") and the payload under "O". The adapter observes the
// value only through `match_with` and rebuilds it only through
// `Either::left`/`Either::right`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use either_error::{CodecError, CodecResult};

use crate::either::Either;

/// Record key holding the discriminant
pub const TAG_KEY: &str = "T";
/// Record key holding the payload
pub const OBJECT_KEY: &str = "O";
/// Discriminant of the left alternative
pub const LEFT_TAG: &str = "L";
/// Discriminant of the right alternative
pub const RIGHT_TAG: &str = "R";

//-----------------------------------------------------------------------------
// JSON Tree
//-----------------------------------------------------------------------------

/// Encodes an `Either` into a JSON record.
pub fn to_value<A, B>(e: &Either<A, B>) -> CodecResult<Value>
where
    A: Serialize,
    B: Serialize,
{
    let tag = e.as_ref().match_with(|_| LEFT_TAG, |_| RIGHT_TAG);
    let payload = e
        .as_ref()
        .match_with(|a| serde_json::to_value(a), |b| serde_json::to_value(b))
        .map_err(CodecError::Payload)?;

    let mut record = Map::new();
    record.insert(TAG_KEY.to_string(), Value::String(tag.to_string()));
    record.insert(OBJECT_KEY.to_string(), payload);
    Ok(Value::Object(record))
}

/// Decodes a JSON record produced by [`to_value`]. Any discriminant other
/// than `"L"` or `"R"` is rejected. A record without `"O"` decodes as a
/// null payload, so it only succeeds for payload types such as `Option<T>`.
pub fn from_value<A, B>(value: Value) -> CodecResult<Either<A, B>>
where
    A: DeserializeOwned,
    B: DeserializeOwned,
{
    decode_record(value).map_err(|err| {
        tracing::debug!(error = %err, "failed to decode either record");
        err
    })
}

fn decode_record<A, B>(value: Value) -> CodecResult<Either<A, B>>
where
    A: DeserializeOwned,
    B: DeserializeOwned,
{
    let mut record = match value {
        Value::Object(record) => record,
        other => return Err(CodecError::NotAnObject(other.to_string())),
    };

    let tag = match record.remove(TAG_KEY) {
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(CodecError::InvalidTag(other.to_string())),
        None => return Err(CodecError::MissingTag),
    };
    // An absent payload reads as null, the same as the derived impl.
    let payload = record.remove(OBJECT_KEY).unwrap_or(Value::Null);

    match tag.as_str() {
        LEFT_TAG => serde_json::from_value(payload)
            .map(Either::left)
            .map_err(CodecError::Payload),
        RIGHT_TAG => serde_json::from_value(payload)
            .map(Either::right)
            .map_err(CodecError::Payload),
        _ => Err(CodecError::UnknownTag(tag)),
    }
}

/// Encodes an `Either` as JSON text.
pub fn to_json_string<A, B>(e: &Either<A, B>) -> CodecResult<String>
where
    A: Serialize,
    B: Serialize,
{
    let value = to_value(e)?;
    Ok(serde_json::to_string(&value)?)
}

/// Parses JSON text into an `Either`.
pub fn from_json_str<A, B>(json: &str) -> CodecResult<Either<A, B>>
where
    A: DeserializeOwned,
    B: DeserializeOwned,
{
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

//-----------------------------------------------------------------------------
// Binary
//-----------------------------------------------------------------------------

// Externally tagged mirrors of `Either`: the binary format stores the
// discriminant as a variant index ahead of the payload.
#[derive(Serialize)]
enum WireRef<'a, A, B> {
    L(&'a A),
    R(&'a B),
}

#[derive(Deserialize)]
enum Wire<A, B> {
    L(A),
    R(B),
}

/// Encodes an `Either` with `bincode`.
pub fn to_bytes<A, B>(e: &Either<A, B>) -> CodecResult<Vec<u8>>
where
    A: Serialize,
    B: Serialize,
{
    let wire = e.as_ref().match_with(WireRef::L, WireRef::R);
    bincode::serialize(&wire)
        .map_err(|err| CodecError::Binary(format!("Failed to serialize: {}", err)))
}

/// Decodes bytes produced by [`to_bytes`].
pub fn from_bytes<A, B>(bytes: &[u8]) -> CodecResult<Either<A, B>>
where
    A: DeserializeOwned,
    B: DeserializeOwned,
{
    let wire: Wire<A, B> = bincode::deserialize(bytes).map_err(|err| {
        tracing::debug!(error = %err, "failed to decode either bytes");
        CodecError::Binary(format!("Failed to deserialize: {}", err))
    })?;
    Ok(match wire {
        Wire::L(a) => Either::left(a),
        Wire::R(b) => Either::right(b),
    })
}
