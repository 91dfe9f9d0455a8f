//! JSON serialize/deserialize helpers.
//!
//! `deserialize` is generic over the target type: the type parameter decides
//! which methods are available on the reconstructed value, e.g.
//! `deserialize::<Rectangle>(text)?.area()`.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors from encoding or decoding a value.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The value could not be encoded.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text is not valid JSON for the requested type.
    #[error("failed to deserialize value: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Encode a value as a JSON string.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if the value's `Serialize` impl fails
/// (e.g. a map with non-string keys).
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::Serialize)
}

/// Reconstruct a value of type `T` from its JSON encoding.
///
/// # Errors
///
/// Returns [`CodecError::Deserialize`] if the text is not valid JSON or does
/// not describe a `T`. Types with validating `Deserialize` impls surface their
/// validation errors here as well.
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Deserialize)
}
