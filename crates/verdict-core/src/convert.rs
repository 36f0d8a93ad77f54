// Rust guideline compliant 2026-08-24

//! Cross-response conversion.
//!
//! Produces a response of a possibly different payload shape from an
//! existing one, copying status, cancelled flag, title, fault, execution
//! time, and messages. Message copies drop whitespace-only entries; an
//! absent source degrades to a NotFound response rather than an error.

use crate::payload::Payload;
use crate::response::Response;
use crate::status::ResponseStatus;
use std::any::Any;

/// Diagnostic for a conversion attempted against an absent source.
pub const NULL_RESPONSE_MESSAGE: &str =
    "A NULL response reference found while converting the response.";

/// Variant of [`NULL_RESPONSE_MESSAGE`] without the trailing period, used
/// by the value-accepting overload. Both literal forms are part of the
/// public contract and are preserved per call site.
pub const NULL_RESPONSE_MESSAGE_BARE: &str =
    "A NULL response reference found while converting the response";

impl<T: Payload + Clone + 'static> Response<T> {
    /// Creates a response of this payload shape from an existing response
    /// of any shape.
    ///
    /// # Arguments
    ///
    /// * `source` - The response to convert, or None
    ///
    /// # Returns
    ///
    /// A response copying the source's status, cancelled flag, title,
    /// fault, execution time, and non-blank messages. When the source
    /// payload is of this exact shape it is carried over; otherwise the
    /// payload is left absent and passed through the container-defaulting
    /// rule. A None source yields a NotFound response carrying
    /// [`NULL_RESPONSE_MESSAGE`].
    #[must_use]
    pub fn converted_from<U: 'static>(source: Option<&Response<U>>) -> Self {
        let Some(source) = source else {
            return Self::builder(ResponseStatus::NotFound)
                .message(NULL_RESPONSE_MESSAGE)
                .build();
        };
        let value = source
            .value
            .as_ref()
            .and_then(|value| (value as &dyn Any).downcast_ref::<T>())
            .cloned();
        Self::converted_parts(source, value)
    }

    /// Creates a response of this payload shape from an existing response,
    /// using the given replacement payload.
    ///
    /// The replacement is always used; no carry-over from the source is
    /// attempted. A None source yields a NotFound response carrying
    /// [`NULL_RESPONSE_MESSAGE_BARE`].
    #[must_use]
    pub fn converted_with<U>(source: Option<&Response<U>>, value: T) -> Self {
        let Some(source) = source else {
            return Self::builder(ResponseStatus::NotFound)
                .message(NULL_RESPONSE_MESSAGE_BARE)
                .build();
        };
        Self::converted_parts(source, Some(value))
    }

    /// Copies the metadata of `source` around the given payload.
    fn converted_parts<U>(source: &Response<U>, value: Option<T>) -> Self {
        Response {
            status: source.status,
            cancelled: source.cancelled,
            title: source.title.clone(),
            messages: source
                .messages
                .iter()
                .filter(|message| !message.trim().is_empty())
                .cloned()
                .collect(),
            fault: source.fault.clone(),
            execution_time: source.execution_time,
            value: value.or_else(T::empty),
        }
    }
}
