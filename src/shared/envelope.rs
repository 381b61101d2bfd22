//! The `{type, result}` wrapper every XTS response is delivered in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// Universal response wrapper. `kind` is informational; `result` carries the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub result: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Decode a response body into an envelope whose `result` has the shape `T`.
///
/// A body that is not JSON, lacks `result`, or whose `result` does not match `T`
/// is a [`HttpError::Decode`].
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ResponseEnvelope<T>, HttpError> {
    serde_json::from_str::<ResponseEnvelope<T>>(body)
        .map_err(|e| HttpError::Decode(format!("Failed to decode response envelope: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Token {
        token: String,
    }

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"type":"success","code":"s-user-0001","description":"ok",
            "result":{"token":"abc"}}"#;
        let env: ResponseEnvelope<Token> = decode_envelope(body).unwrap();
        assert_eq!(env.kind, "success");
        assert_eq!(env.code.as_deref(), Some("s-user-0001"));
        assert_eq!(env.into_result(), Token { token: "abc".into() });
    }

    #[test]
    fn test_decode_envelope_without_optional_fields() {
        let env: ResponseEnvelope<Token> =
            decode_envelope(r#"{"type":"success","result":{"token":"t"}}"#).unwrap();
        assert!(env.code.is_none());
        assert!(env.description.is_none());
    }

    #[test]
    fn test_decode_envelope_shape_mismatch() {
        let err = decode_envelope::<Token>(r#"{"type":"success","result":{"other":1}}"#)
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }

    #[test]
    fn test_decode_envelope_missing_result() {
        let err = decode_envelope::<Token>(r#"{"type":"error"}"#).unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }

    #[test]
    fn test_decode_envelope_not_json() {
        assert!(decode_envelope::<Token>("<html>").is_err());
    }
}
