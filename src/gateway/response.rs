//! Response-shape classification for gateway replies.
//!
//! The gateway answers in three shapes: a JSON body, a plain-text body, or
//! an HTTP 202 Accepted whose `Location` header carries the transaction id.
//! [`classify`] reduces a raw response to one tagged [`Reply`] variant so
//! operations dispatch on the variant instead of scattering content-type
//! conditionals through the call.

use http::StatusCode;

use super::GatewayError;
use crate::transport::HttpResponse;

/// Fallback message when a non-2xx reply has no parseable error body.
const GENERIC_HTTP_MESSAGE: &str = "gateway request rejected";

/// A successful gateway reply, reduced to the shapes the client handles.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// 2xx reply with a JSON object body.
    Json(serde_json::Value),
    /// 2xx reply with a plain-text body.
    Text(String),
    /// 202 Accepted; the transaction id extracted from the `Location` header.
    Accepted {
        /// Transaction id from the final `Location` path segment
        transaction_id: String,
    },
}

/// Classifies a raw HTTP response into a [`Reply`].
///
/// # Errors
///
/// Returns [`GatewayError::Http`] for non-2xx replies, with the message
/// taken from a JSON error body (`message` or `error` field) when one is
/// present. Returns [`GatewayError::InvalidResponse`] for a 202 without a
/// usable `Location` header, or a body that is not valid UTF-8.
pub fn classify(response: &HttpResponse) -> Result<Reply, GatewayError> {
    if !response.is_success() {
        return Err(error_from_response(response));
    }

    if response.status == StatusCode::ACCEPTED {
        let transaction_id = location_transaction_id(response)?;
        return Ok(Reply::Accepted { transaction_id });
    }

    let Some(text) = response.body_text() else {
        return Err(GatewayError::InvalidResponse(
            "body is not valid UTF-8".to_string(),
        ));
    };

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) if value.is_object() => Ok(Reply::Json(value)),
        _ => Ok(Reply::Text(text.to_string())),
    }
}

/// Builds the error for a non-2xx reply.
fn error_from_response(response: &HttpResponse) -> GatewayError {
    let message = response
        .body_text()
        .and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| GENERIC_HTTP_MESSAGE.to_string());

    GatewayError::Http {
        status: response.status,
        message,
    }
}

/// Extracts the transaction id from the final `Location` path segment.
fn location_transaction_id(response: &HttpResponse) -> Result<String, GatewayError> {
    let Some(location) = response.header(&http::header::LOCATION) else {
        return Err(GatewayError::InvalidResponse(
            "202 Accepted without a Location header".to_string(),
        ));
    };

    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| {
            GatewayError::InvalidResponse(format!(
                "Location header has no transaction id: {location}"
            ))
        })
}
