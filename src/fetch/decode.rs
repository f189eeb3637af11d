//! Decode seam - the JSON collaborator.
//!
//! Adapter operations take a decode function `Fn(&[u8]) -> Result<T,
//! DecodeError>` rather than a deserializer bound, so callers can decode
//! however they like. For the common case of a serde type, [`json`] is the
//! decode function.

use serde::de::DeserializeOwned;

use super::error::DecodeError;

/// Decodes a JSON payload into any [`DeserializeOwned`] type.
///
/// # Errors
///
/// Returns [`DecodeError`] if the payload is not valid JSON for `T`.
///
/// # Examples
///
/// ```rust
/// use optfetch::fetch::json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Item {
///     name: String,
///     price: f64,
/// }
///
/// let item: Item = json(br#"{"name":"X","price":1.5}"#)?;
/// assert_eq!(item.name, "X");
/// # Ok::<(), optfetch::fetch::DecodeError>(())
/// ```
pub fn json<T: DeserializeOwned>(payload: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(payload).map_err(|error| DecodeError::new(error.to_string()))
}
