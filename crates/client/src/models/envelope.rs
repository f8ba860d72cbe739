//! The `{ok, response}` / `{ok: false, error}` envelope every ISM route returns.

use serde::{Deserialize, Deserializer};

use crate::error::{ClientError, Result};

/// Decoded result envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerResponse<T> {
    Ok(T),
    Err(String),
}

impl<T> ServerResponse<T> {
    /// Convert the envelope into a client result.
    ///
    /// `ok: false` becomes [`ClientError::Server`] carrying the server text.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(message) => Err(ClientError::Server(message)),
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    ok: bool,
    response: Option<T>,
    error: Option<String>,
}

impl<'de, T> Deserialize<'de> for ServerResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        if raw.ok {
            raw.response
                .map(ServerResponse::Ok)
                .ok_or_else(|| serde::de::Error::missing_field("response"))
        } else {
            Ok(ServerResponse::Err(
                raw.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope() {
        let envelope: ServerResponse<u32> =
            serde_json::from_value(json!({"ok": true, "response": 7})).unwrap();
        assert_eq!(envelope.into_result().unwrap(), 7);
    }

    #[test]
    fn test_error_envelope_keeps_server_text() {
        let envelope: ServerResponse<u32> =
            serde_json::from_value(json!({"ok": false, "error": "no permissions"})).unwrap();
        match envelope.into_result() {
            Err(ClientError::Server(message)) => assert_eq!(message, "no permissions"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_ok_without_response_is_rejected() {
        let result: std::result::Result<ServerResponse<u32>, _> =
            serde_json::from_value(json!({"ok": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_decodes_payloads_without_default() {
        let envelope: ServerResponse<crate::models::FailedIndex> = serde_json::from_value(json!({
            "ok": true,
            "response": {"indexName": "idx1", "reason": "locked"}
        }))
        .unwrap();
        let failed = envelope.into_result().unwrap();
        assert_eq!(failed.index_name, "idx1");
    }

    #[test]
    fn test_error_envelope_without_text() {
        let envelope: ServerResponse<u32> = serde_json::from_value(json!({"ok": false})).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(ClientError::Server(message)) if message == "Unknown error"
        ));
    }
}
