// Rust guideline compliant 2026-08-24

//! Status taxonomy for response outcomes.
//!
//! `ResponseStatus` is the closed set of outcome codes a response can carry,
//! modeled on HTTP status semantics. `ErrorStatus` is the strict error-only
//! subset used as a default-status selector for error-constructing factory
//! calls; it has no runtime identity of its own once converted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome codes a response can carry.
///
/// This is the canonical and only form a response ever stores. The factory
/// validation gate guarantees that no undefined numeric code survives
/// construction, so a stored status is always one of these members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum ResponseStatus {
    /// The operation completed successfully.
    Ok = 200,
    /// The request was malformed or the operation was cancelled.
    BadRequest = 400,
    /// The caller is not authorized to perform the operation.
    Unauthorized = 401,
    /// The requested entity was not found.
    NotFound = 404,
    /// An internal error occurred while performing the operation.
    InternalError = 500,
    /// The operation is not implemented.
    NotImplemented = 501,
}

impl ResponseStatus {
    /// All members of the taxonomy, in ascending code order.
    pub const ALL: [ResponseStatus; 6] = [
        ResponseStatus::Ok,
        ResponseStatus::BadRequest,
        ResponseStatus::Unauthorized,
        ResponseStatus::NotFound,
        ResponseStatus::InternalError,
        ResponseStatus::NotImplemented,
    ];

    /// Returns the numeric code for this status.
    #[must_use]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Maps a numeric code to a member of the taxonomy.
    ///
    /// # Arguments
    ///
    /// * `code` - The numeric status code
    ///
    /// # Returns
    ///
    /// The matching member, or None when the code is not part of the
    /// closed set. Callers constructing responses from arbitrary codes
    /// must go through the factory gate rather than this function.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            200 => Some(ResponseStatus::Ok),
            400 => Some(ResponseStatus::BadRequest),
            401 => Some(ResponseStatus::Unauthorized),
            404 => Some(ResponseStatus::NotFound),
            500 => Some(ResponseStatus::InternalError),
            501 => Some(ResponseStatus::NotImplemented),
            _ => None,
        }
    }

    /// Returns true when the status denotes success (code in 200..=299).
    #[must_use]
    pub fn is_success(self) -> bool {
        (200..=299).contains(&self.code())
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseStatus::Ok => "Ok",
            ResponseStatus::BadRequest => "BadRequest",
            ResponseStatus::Unauthorized => "Unauthorized",
            ResponseStatus::NotFound => "NotFound",
            ResponseStatus::InternalError => "InternalError",
            ResponseStatus::NotImplemented => "NotImplemented",
        };
        write!(f, "{} ({})", name, self.code())
    }
}

/// Error-only subset of the taxonomy.
///
/// Used solely to restrict the default-status parameter of error
/// constructors to non-success outcomes; any member is numerically
/// identical to its `ResponseStatus` counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    /// The request was malformed.
    BadRequest,
    /// The caller is not authorized.
    Unauthorized,
    /// The requested entity was not found.
    NotFound,
    /// An internal error occurred.
    InternalError,
    /// The operation is not implemented.
    NotImplemented,
}

impl From<ErrorStatus> for ResponseStatus {
    fn from(status: ErrorStatus) -> Self {
        match status {
            ErrorStatus::BadRequest => ResponseStatus::BadRequest,
            ErrorStatus::Unauthorized => ResponseStatus::Unauthorized,
            ErrorStatus::NotFound => ResponseStatus::NotFound,
            ErrorStatus::InternalError => ResponseStatus::InternalError,
            ErrorStatus::NotImplemented => ResponseStatus::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in ResponseStatus::ALL {
            assert_eq!(ResponseStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_from_code_rejects_undefined() {
        for code in [0u16, 199, 201, 299, 402, 403, 418, 502, u16::MAX] {
            assert_eq!(ResponseStatus::from_code(code), None);
        }
    }

    #[test]
    fn test_only_ok_is_success() {
        for status in ResponseStatus::ALL {
            assert_eq!(status.is_success(), status == ResponseStatus::Ok);
        }
    }

    #[test]
    fn test_error_status_conversion_preserves_code() {
        let pairs = [
            (ErrorStatus::BadRequest, 400),
            (ErrorStatus::Unauthorized, 401),
            (ErrorStatus::NotFound, 404),
            (ErrorStatus::InternalError, 500),
            (ErrorStatus::NotImplemented, 501),
        ];
        for (error_status, code) in pairs {
            assert_eq!(ResponseStatus::from(error_status).code(), code);
        }
    }
}
