// Rust guideline compliant 2026-08-24

//! Verdict Core Library
//!
//! This crate provides the response construction and conversion engine:
//! - Status taxonomy (closed outcome-code set with an error-only subset)
//! - Response entity (status, messages, optional fault and payload)
//! - Fault capture, cause-chain flattening, cancellation classification
//! - Factory (named constructors over one options builder, with the
//!   status validation gate)
//! - Cross-response conversion with payload carry-over and the
//!   container-defaulting rule
//!
//! Every factory and conversion path yields a well-formed response; bad
//! input degrades to an error-shaped response rather than an Err or a
//! panic. Responses are immutable after construction except for the title
//! and execution-time annotations.

pub mod builder;
pub mod convert;
pub mod fault;
pub mod payload;
pub mod response;
pub mod status;

pub use builder::{
    ResponseBuilder, DEFAULT_ERROR_MESSAGE, NOT_IMPLEMENTED_MESSAGE,
    SYSTEM_ERROR_MESSAGE, UNSPECIFIED_SYSTEM_ERROR_MESSAGE,
};
pub use convert::{NULL_RESPONSE_MESSAGE, NULL_RESPONSE_MESSAGE_BARE};
pub use fault::{
    flatten_messages, is_cancellation_shaped, Cancelled, Fault, FaultKind,
    NULL_FAULT_DETAIL,
};
pub use payload::Payload;
pub use response::Response;
pub use status::{ErrorStatus, ResponseStatus};
