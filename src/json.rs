//! JSON encode and typed decode.
//!
//! ```
//! use kata_rs::json::{from_json, to_json};
//! use kata_rs::shape::Rectangle;
//!
//! let r: Rectangle = from_json(r#"{"width":10, "height":20}"#).unwrap();
//! assert_eq!(r.area(), 200);
//! assert_eq!(to_json(&r).unwrap(), r#"{"width":10,"height":20}"#);
//! assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum JsonError {
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Compact JSON; struct fields keep their declaration order.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Decode `json` into the target type `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Decode)
}
