// Rust guideline compliant 2026-08-24

//! Wire envelope translation.
//!
//! Maps a response to and from an HTTP-shaped JSON envelope. The envelope
//! is transport-agnostic: it carries the numeric code, the derived success
//! flag, and the response metadata, leaving the actual transport to the
//! caller. Building a response from the wire never fails; undefined codes
//! go through the core validation gate and parse failures degrade to an
//! exception-shaped response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use verdict_core::{Payload, Response, ResponseStatus};

/// JSON envelope a response travels in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Numeric status code.
    pub code: u16,
    /// Derived success flag, carried for consumers that do not know the
    /// taxonomy.
    pub success: bool,
    /// Whether the originating operation was cancelled.
    #[serde(default)]
    pub cancelled: bool,
    /// Free-form label.
    #[serde(default)]
    pub title: String,
    /// Diagnostic messages.
    #[serde(default)]
    pub messages: Vec<String>,
    /// Payload, omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    /// RFC3339 timestamp of envelope creation.
    pub date: String,
}

/// Builds an envelope from a response.
///
/// The captured fault, if any, stays on the producing side; only its
/// messages travel (they are already part of the message list when the
/// factory put them there).
#[must_use]
pub fn to_envelope<T: Clone>(response: &Response<T>) -> Envelope<T> {
    Envelope {
        code: response.status().code(),
        success: response.success(),
        cancelled: response.cancelled(),
        title: response.title().to_string(),
        messages: response.messages().to_vec(),
        value: response.value().cloned(),
        date: chrono::Utc::now().to_rfc3339(),
    }
}

/// Serializes a response into its wire form.
///
/// # Returns
///
/// The numeric status code and the JSON envelope body.
///
/// # Errors
///
/// Returns an error when the payload cannot be serialized.
pub fn to_wire<T: Clone + Serialize>(response: &Response<T>) -> anyhow::Result<(u16, String)> {
    let envelope = to_envelope(response);
    let body = serde_json::to_string(&envelope)?;
    Ok((envelope.code, body))
}

/// Rebuilds a response from a received envelope.
///
/// The numeric code passes through the core validation gate: an undefined
/// code abandons the envelope's content and yields the gate's BadRequest
/// diagnostic instead.
#[must_use]
pub fn from_envelope<T: Payload>(envelope: Envelope<T>) -> Response<T> {
    let Some(status) = ResponseStatus::from_code(envelope.code) else {
        tracing::warn!(
            code = envelope.code,
            "received wire status outside the known taxonomy"
        );
        return Response::custom(envelope.code);
    };
    let mut builder = Response::builder(status)
        .title(envelope.title)
        .cancelled(envelope.cancelled)
        .messages(envelope.messages);
    if let Some(value) = envelope.value {
        builder = builder.value(value);
    }
    builder.build()
}

/// Rebuilds a response from a raw wire body.
///
/// # Arguments
///
/// * `code` - The transport-level status code
/// * `body` - The JSON envelope body
///
/// # Returns
///
/// The reconstructed response. A body that does not parse as an envelope
/// degrades to an exception-shaped response capturing the parse fault;
/// the transport code is ignored in that case since it cannot be trusted
/// over a broken body.
#[must_use]
pub fn from_wire<T>(code: u16, body: &str) -> Response<T>
where
    T: Payload + DeserializeOwned,
{
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => {
            tracing::debug!(code, envelope_code = envelope.code, "decoded wire envelope");
            from_envelope(envelope)
        }
        Err(parse_error) => {
            tracing::debug!(code, error = %parse_error, "wire body failed to parse");
            let fault = anyhow::Error::new(parse_error);
            Response::exception(Some(&fault))
        }
    }
}
