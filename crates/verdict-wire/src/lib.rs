// Rust guideline compliant 2026-08-24

//! Verdict Wire Adapter
//!
//! This crate translates responses to and from an HTTP-shaped JSON
//! envelope:
//! - Envelope construction from a response
//! - Response reconstruction from an envelope or raw body, with the core
//!   validation gate applied to incoming codes
//!
//! Transport mechanics (sockets, headers, routing) are out of scope; the
//! adapter's only contract is that it accepts and returns responses.

pub mod envelope;

pub use envelope::{from_envelope, from_wire, to_envelope, to_wire, Envelope};
