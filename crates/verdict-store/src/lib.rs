// Rust guideline compliant 2026-08-24

//! Verdict Store Adapter
//!
//! This crate wraps repository save operations into responses:
//! - Entity and unit-of-work traits at the persistence seam
//! - Commit outcomes reported as responses, never as errors
//! - The adapter-local readonly-entity validation path
//!
//! Query translation and store mechanics are out of scope; the adapter's
//! only contract is that a save operation yields a response.

pub mod unit_of_work;

pub use unit_of_work::{save_changes, Entity, UnitOfWork};
