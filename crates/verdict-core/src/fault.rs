// Rust guideline compliant 2026-08-24

//! Fault capture, flattening, and cancellation classification.
//!
//! Faults arrive as `anyhow::Error` values and are captured into an owned
//! `Fault` snapshot at construction time so responses stay cloneable and
//! comparable. Cancellation is never observed through a token; it is only
//! ever recognized after the fact by classifying a captured fault.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel message used wherever a fault was expected but none was given.
pub const NULL_FAULT_DETAIL: &str =
    "Exception is NULL, could not extract any exception detail";

/// Marker error representing a cancelled operation.
///
/// A fault whose cause chain contains this type anywhere is classified as
/// cancellation-shaped, and the factory downgrades it to a BadRequest
/// response with the cancelled flag set.
#[derive(Debug, Error)]
#[error("operation was cancelled: {reason}")]
pub struct Cancelled {
    /// Human-readable reason for the cancellation.
    pub reason: String,
}

impl Cancelled {
    /// Creates a new cancellation marker with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Classification of a captured fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// A plain runtime failure.
    Ordinary,
    /// A fault recognized as representing a cancelled operation.
    Cancelled,
}

/// Owned snapshot of a captured fault.
///
/// Holds the flattened cause chain (root cause first), the classification,
/// and the full debug rendering of the original error for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    kind: FaultKind,
    messages: Vec<String>,
    trace: String,
}

impl Fault {
    /// Captures a fault snapshot from a dynamic error.
    ///
    /// # Arguments
    ///
    /// * `error` - The error to capture
    ///
    /// # Returns
    ///
    /// A snapshot holding the classification, the flattened cause chain
    /// (root cause first), and the debug trace of the error.
    #[must_use]
    pub fn capture(error: &anyhow::Error) -> Self {
        let kind = if is_cancellation_shaped(Some(error)) {
            FaultKind::Cancelled
        } else {
            FaultKind::Ordinary
        };
        Self {
            kind,
            messages: flatten_messages(Some(error)),
            trace: format!("{:?}", error),
        }
    }

    /// Returns the classification of the fault.
    #[must_use]
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns true when the fault was classified as a cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.kind == FaultKind::Cancelled
    }

    /// Returns the flattened cause-chain messages, root cause first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the root-cause message, if any.
    #[must_use]
    pub fn root_cause(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    /// Returns the outermost message, if any.
    #[must_use]
    pub fn outer_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Returns the debug rendering of the original error.
    #[must_use]
    pub fn trace(&self) -> &str {
        &self.trace
    }
}

/// Flattens a fault's cause chain into human-readable messages.
///
/// The chain is walked outer-to-inner and the collected messages are then
/// reversed, so the root cause comes first.
///
/// # Arguments
///
/// * `fault` - The fault to flatten, or None
///
/// # Returns
///
/// One message per cause in the chain, root cause first. A None fault
/// yields a single-element list containing [`NULL_FAULT_DETAIL`] so that
/// callers never need a presence check of their own.
#[must_use]
pub fn flatten_messages(fault: Option<&anyhow::Error>) -> Vec<String> {
    match fault {
        None => vec![NULL_FAULT_DETAIL.to_string()],
        Some(error) => {
            let mut messages: Vec<String> =
                error.chain().map(|cause| cause.to_string()).collect();
            messages.reverse();
            messages
        }
    }
}

/// Returns true when the fault, or any cause in its chain, is recognized
/// as a cancellation-signaling error.
///
/// # Arguments
///
/// * `fault` - The fault to inspect, or None
///
/// # Returns
///
/// True when any cause downcasts to [`Cancelled`]; false for a None fault.
#[must_use]
pub fn is_cancellation_shaped(fault: Option<&anyhow::Error>) -> bool {
    fault.is_some_and(|error| {
        error
            .chain()
            .any(|cause| cause.downcast_ref::<Cancelled>().is_some())
    })
}
