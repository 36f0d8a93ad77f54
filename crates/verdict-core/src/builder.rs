// Rust guideline compliant 2026-08-24

//! Response factory.
//!
//! The core is a single options builder; the named constructors on
//! [`Response`] are thin wrappers over it, one per outcome family and
//! message shape. Every path yields a well-formed response: bad input
//! (an absent fault, an undefined status code, an empty message list) is
//! degraded to an error-shaped response, never an Err or a panic.

use crate::fault::{self, Fault, NULL_FAULT_DETAIL};
use crate::payload::Payload;
use crate::response::Response;
use crate::status::{ErrorStatus, ResponseStatus};

/// Default message for error responses constructed without one.
///
/// The historical misspelling is part of the public contract and is
/// preserved verbatim.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error has occured";

/// Fallback message used when the fault message is suppressed.
pub const SYSTEM_ERROR_MESSAGE: &str = "A system error occurred";

/// Message for a failure reported without any captured fault.
pub const UNSPECIFIED_SYSTEM_ERROR_MESSAGE: &str = "A system error occurred.";

/// Default message for not-implemented responses.
pub const NOT_IMPLEMENTED_MESSAGE: &str =
    "The method or operation is not implemented";

/// Renders the validation-gate diagnostic for an undefined status code.
fn invalid_code_message(code: u16) -> String {
    format!(
        "Invalid Data: Status code: {} could not be converted to a valid ResponseStatus",
        code
    )
}

/// Options builder behind every factory constructor.
///
/// Collects the outcome state and assembles the response in one step;
/// the container-defaulting rule is applied to an absent payload at
/// [`build`](ResponseBuilder::build) time.
#[derive(Debug)]
pub struct ResponseBuilder<T> {
    status: ResponseStatus,
    cancelled: bool,
    title: String,
    messages: Vec<String>,
    fault: Option<Fault>,
    value: Option<T>,
}

impl<T: Payload> ResponseBuilder<T> {
    /// Creates a builder for the given status.
    #[must_use]
    pub fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            cancelled: false,
            title: String::new(),
            messages: Vec::new(),
            fault: None,
            value: None,
        }
    }

    /// Appends a single diagnostic message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Appends a list of diagnostic messages.
    #[must_use]
    pub fn messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages.extend(messages.into_iter().map(Into::into));
        self
    }

    /// Sets the title, normalizing a whitespace-only title to empty.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            String::new()
        } else {
            title
        };
        self
    }

    /// Sets the cancelled flag.
    #[must_use]
    pub fn cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Attaches a captured fault.
    #[must_use]
    pub fn fault(mut self, fault: Fault) -> Self {
        self.fault = Some(fault);
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Assembles the response.
    ///
    /// An absent payload is passed through the container-defaulting rule:
    /// constructible container types receive an empty instance, everything
    /// else stays absent.
    #[must_use]
    pub fn build(self) -> Response<T> {
        Response {
            status: self.status,
            cancelled: self.cancelled,
            title: self.title,
            messages: self.messages,
            fault: self.fault,
            execution_time: None,
            value: self.value.or_else(T::empty),
        }
    }
}

impl<T: Payload> Response<T> {
    /// Returns a builder for the given status.
    ///
    /// The named constructors below cover the common shapes; the builder
    /// is the escape hatch for combinations they do not.
    #[must_use]
    pub fn builder(status: ResponseStatus) -> ResponseBuilder<T> {
        ResponseBuilder::new(status)
    }

    /// Creates a success response with no messages.
    #[must_use]
    pub fn ok() -> Self {
        Self::builder(ResponseStatus::Ok).build()
    }

    /// Creates a success response with a single message.
    #[must_use]
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self::builder(ResponseStatus::Ok).message(message).build()
    }

    /// Creates a success response with a list of messages.
    #[must_use]
    pub fn ok_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(ResponseStatus::Ok).messages(messages).build()
    }

    /// Creates a success response carrying a payload.
    #[must_use]
    pub fn ok_with(value: T) -> Self {
        Self::builder(ResponseStatus::Ok).value(value).build()
    }

    /// Creates a success response carrying a payload and a single message.
    #[must_use]
    pub fn ok_with_message(value: T, message: impl Into<String>) -> Self {
        Self::builder(ResponseStatus::Ok)
            .value(value)
            .message(message)
            .build()
    }

    /// Creates a success response carrying a payload and a message list.
    #[must_use]
    pub fn ok_with_messages<I, S>(value: T, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(ResponseStatus::Ok)
            .value(value)
            .messages(messages)
            .build()
    }

    /// Creates an error response with the default status and message.
    ///
    /// Errors carrying a fault go through the exception constructors
    /// instead; this family never captures one.
    #[must_use]
    pub fn error() -> Self {
        Self::error_with(ErrorStatus::InternalError)
    }

    /// Creates an error response with the default status and one message.
    #[must_use]
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::error_with_message(ErrorStatus::InternalError, message)
    }

    /// Creates an error response with the default status and message list.
    ///
    /// An empty list falls back to the default error message.
    #[must_use]
    pub fn error_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::error_with_messages(ErrorStatus::InternalError, messages)
    }

    /// Creates an error response with the given status and the default
    /// message.
    #[must_use]
    pub fn error_with(status: ErrorStatus) -> Self {
        Self::builder(status.into())
            .message(DEFAULT_ERROR_MESSAGE)
            .build()
    }

    /// Creates an error response with the given status and one message.
    #[must_use]
    pub fn error_with_message(status: ErrorStatus, message: impl Into<String>) -> Self {
        Self::builder(status.into()).message(message).build()
    }

    /// Creates an error response with the given status and message list.
    ///
    /// An empty list falls back to the default error message.
    #[must_use]
    pub fn error_with_messages<I, S>(status: ErrorStatus, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let builder = Self::builder(status.into()).messages(messages);
        if builder.messages.is_empty() {
            builder.message(DEFAULT_ERROR_MESSAGE).build()
        } else {
            builder.build()
        }
    }

    /// Creates a response from a captured fault.
    ///
    /// The fault message and its full cause chain populate the message
    /// list. A cancellation-shaped fault downgrades the status to
    /// BadRequest and sets the cancelled flag; anything else reports
    /// InternalError. A None fault short-circuits to an InternalError
    /// response carrying [`NULL_FAULT_DETAIL`] without attempting to
    /// flatten anything.
    #[must_use]
    pub fn exception(fault: Option<&anyhow::Error>) -> Self {
        Self::exception_opts(fault, true, true)
    }

    /// Creates a response from a captured fault with explicit control over
    /// message population.
    ///
    /// # Arguments
    ///
    /// * `fault` - The fault to capture, or None
    /// * `include_fault_message` - When false, the message list holds only
    ///   [`SYSTEM_ERROR_MESSAGE`] and the fault text is suppressed
    /// * `include_cause_messages` - When true, the full flattened cause
    ///   chain is used; when false, only the outermost fault message
    #[must_use]
    pub fn exception_opts(
        fault: Option<&anyhow::Error>,
        include_fault_message: bool,
        include_cause_messages: bool,
    ) -> Self {
        let Some(error) = fault else {
            return Self::builder(ResponseStatus::InternalError)
                .message(NULL_FAULT_DETAIL)
                .build();
        };

        let messages = if !include_fault_message {
            vec![SYSTEM_ERROR_MESSAGE.to_string()]
        } else if include_cause_messages {
            fault::flatten_messages(Some(error))
        } else {
            vec![error.to_string()]
        };

        Self::exception_shaped(error).messages(messages).build()
    }

    /// Creates a response from a captured fault with an explicit message.
    ///
    /// The fault is still captured but its text does not populate the
    /// message list.
    #[must_use]
    pub fn exception_message(
        fault: Option<&anyhow::Error>,
        message: impl Into<String>,
    ) -> Self {
        Self::exception_messages(fault, [message.into()])
    }

    /// Creates a response from a captured fault with explicit messages.
    ///
    /// The fault is still captured but its text does not populate the
    /// message list. A None fault short-circuits exactly as
    /// [`exception`](Response::exception) does.
    #[must_use]
    pub fn exception_messages<I, S>(fault: Option<&anyhow::Error>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(error) = fault else {
            return Self::builder(ResponseStatus::InternalError)
                .message(NULL_FAULT_DETAIL)
                .build();
        };
        Self::exception_shaped(error).messages(messages).build()
    }

    /// Creates a failure response for a fault that was never captured.
    #[must_use]
    pub fn exception_unspecified() -> Self {
        Self::builder(ResponseStatus::InternalError)
            .message(UNSPECIFIED_SYSTEM_ERROR_MESSAGE)
            .build()
    }

    /// Creates a not-implemented response with the default message.
    #[must_use]
    pub fn not_implemented() -> Self {
        Self::builder(ResponseStatus::NotImplemented)
            .message(NOT_IMPLEMENTED_MESSAGE)
            .build()
    }

    /// Creates a not-implemented response with a single message.
    #[must_use]
    pub fn not_implemented_message(message: impl Into<String>) -> Self {
        Self::builder(ResponseStatus::NotImplemented)
            .message(message)
            .build()
    }

    /// Creates a response for an arbitrary numeric status code, subject to
    /// the validation gate.
    ///
    /// An undefined code abandons the requested construction and returns a
    /// BadRequest response whose single message names the rejected code.
    /// This is the only mechanism keeping out-of-domain codes from ever
    /// reaching a caller.
    #[must_use]
    pub fn custom(code: u16) -> Self {
        match ResponseStatus::from_code(code) {
            Some(status) => Self::builder(status).build(),
            None => Self::builder(ResponseStatus::BadRequest)
                .message(invalid_code_message(code))
                .build(),
        }
    }

    /// Creates a response for an arbitrary numeric status code with a
    /// message, subject to the validation gate.
    ///
    /// When the gate rejects the code, the diagnostic replaces the
    /// supplied message so the response carries exactly one message.
    #[must_use]
    pub fn custom_message(code: u16, message: impl Into<String>) -> Self {
        match ResponseStatus::from_code(code) {
            Some(status) => Self::builder(status).message(message).build(),
            None => Self::builder(ResponseStatus::BadRequest)
                .message(invalid_code_message(code))
                .build(),
        }
    }

    /// Creates a response for a status already known to be in the
    /// taxonomy.
    #[must_use]
    pub fn custom_status(status: ResponseStatus) -> Self {
        Self::builder(status).build()
    }

    /// Builder pre-shaped for a captured fault: classification decides
    /// the status and the cancelled flag.
    fn exception_shaped(error: &anyhow::Error) -> ResponseBuilder<T> {
        let captured = Fault::capture(error);
        let status = if captured.is_cancelled() {
            ResponseStatus::BadRequest
        } else {
            ResponseStatus::InternalError
        };
        let cancelled = captured.is_cancelled();
        Self::builder(status).fault(captured).cancelled(cancelled)
    }
}
