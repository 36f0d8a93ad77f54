// Rust guideline compliant 2026-08-24

//! The response entity.
//!
//! A response is built once, through exactly one factory call, and is
//! immutable thereafter except for two narrow post-hoc annotations: the
//! title and the execution time. It holds no references to collaborators;
//! it is a pure data holder.

use crate::fault::Fault;
use crate::status::ResponseStatus;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result value carrying outcome status, messages, an optional captured
/// fault, and an optional payload.
///
/// The non-generic form is `Response<()>`, the default type parameter.
/// Success is derived from the status code range, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T = ()> {
    pub(crate) status: ResponseStatus,
    pub(crate) cancelled: bool,
    pub(crate) title: String,
    pub(crate) messages: Vec<String>,
    pub(crate) fault: Option<Fault>,
    pub(crate) execution_time: Option<Duration>,
    pub(crate) value: Option<T>,
}

impl<T> Response<T> {
    /// Returns the outcome status.
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Returns true when the status denotes success (code in 200..=299).
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true when the captured fault was classified as a
    /// cancellation.
    #[must_use]
    pub fn cancelled(&self) -> bool {
        self.cancelled
    }

    /// Returns the free-form title, empty by default.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the diagnostic messages, in the order they were recorded.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the captured fault, if any.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Returns the externally-assigned execution time, if any.
    #[must_use]
    pub fn execution_time(&self) -> Option<Duration> {
        self.execution_time
    }

    /// Returns a reference to the payload, if present.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the response and returns the payload, if present.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns all messages joined by a line separator, or an empty
    /// string when there are none.
    #[must_use]
    pub fn single_message(&self) -> String {
        self.messages.join("\n")
    }

    /// Returns the detailed error rendering.
    ///
    /// # Returns
    ///
    /// `"Error Detail:\n{single_message}"`, additionally followed by
    /// `"StackTrace:\n{trace}"` when a fault was captured.
    #[must_use]
    pub fn detailed_error(&self) -> String {
        match &self.fault {
            None => format!("Error Detail:\n{}", self.single_message()),
            Some(fault) => format!(
                "Error Detail:\n{}StackTrace:\n{}",
                self.single_message(),
                fault.trace()
            ),
        }
    }

    /// Sets the title, normalizing a whitespace-only title to empty.
    ///
    /// This is one of the two intentional exceptions to immutability,
    /// meant for post-hoc annotation; callers must not race on it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            String::new()
        } else {
            title
        };
    }

    /// Returns the response with the title set, normalizing a
    /// whitespace-only title to empty.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Records the execution time observed by the caller.
    ///
    /// Timing is an external concern; the response only carries the value
    /// through conversions.
    pub fn set_execution_time(&mut self, elapsed: Duration) {
        self.execution_time = Some(elapsed);
    }
}
