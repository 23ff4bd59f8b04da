//! Response Envelope
//!
//! `{"basarili": true, "<field>": ..., "mesaj": "..."}` on success,
//! `{"basarili": false, "hata": "..."}` on failure.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "basarili", default)]
    success: bool,
    #[serde(rename = "hata", default)]
    error: Option<String>,
    #[serde(rename = "mesaj", default)]
    message: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

fn open(body: &str) -> ApiResult<Envelope> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ApiError::Rejected(envelope.error.unwrap_or_default()))
    }
}

/// Payload stored under `field` of a successful response
pub fn decode_payload<T: DeserializeOwned>(body: &str, field: &str) -> ApiResult<T> {
    let mut envelope = open(body)?;
    let value = envelope
        .payload
        .remove(field)
        .ok_or_else(|| ApiError::Decode(format!("missing `{}` in response", field)))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{}: {}", field, e)))
}

/// `mesaj` of a successful response, empty when the server sent none
pub fn decode_message(body: &str) -> ApiResult<String> {
    Ok(open(body)?.message.unwrap_or_default())
}
