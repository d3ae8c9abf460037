use serde_json::Value;

use crate::domain::Envelope;

const UNAUTHORIZED: u16 = 401;
const BAD_REQUEST: u16 = 400;
const VALIDATION_MARKER: &str = "validation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Authentication,
    Validation,
    Api,
}

/// An unsuccessful HTTP exchange, classified.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: String,
    pub status: u16,
    /// Parsed body, or `{"raw_content": ..}` when it was not JSON.
    pub details: Value,
}

/// Turn a completed exchange into an [`Envelope`] or an [`ApiFailure`].
///
/// Precedence on failure: 401 is always an authentication failure, then 400 or a
/// `"type": "validation"` body is a validation failure, everything else is an API failure.
pub fn classify_response(
    status: u16,
    body: &str,
    default_message: &str,
) -> Result<Envelope, ApiFailure> {
    let envelope = match serde_json::from_str::<Value>(body) {
        Ok(value) => Envelope::new(value),
        Err(_) => Envelope::raw(body),
    };

    if (200..=299).contains(&status) {
        return Ok(envelope);
    }

    let details = envelope.into_value();
    let error_type = details
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .unwrap_or_default();
    let message = match details.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => default_message.to_owned(),
        Some(other) => other.to_string(),
    };

    let kind = if status == UNAUTHORIZED {
        FailureKind::Authentication
    } else if status == BAD_REQUEST || error_type == VALIDATION_MARKER {
        FailureKind::Validation
    } else {
        FailureKind::Api
    };

    Err(ApiFailure {
        kind,
        message,
        status,
        details,
    })
}
