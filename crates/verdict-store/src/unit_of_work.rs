// Rust guideline compliant 2026-08-24

//! Unit-of-work wrapping for persistence outcomes.
//!
//! Turns a save operation into a response: the affected row count on
//! success, an exception-shaped response on commit failure, and a
//! validation rejection when a readonly entity was modified. The readonly
//! guard is adapter-local; the core knows nothing about entities.

use verdict_core::{Response, ResponseStatus};

/// A tracked entity, as far as the adapter needs to know it.
pub trait Entity {
    /// Name used in diagnostics.
    fn entity_name(&self) -> &str;

    /// Whether the entity is readonly and must never be written back.
    fn is_readonly(&self) -> bool {
        false
    }

    /// Whether the entity has pending modifications.
    fn is_dirty(&self) -> bool {
        true
    }
}

/// A pending set of changes that can be committed in one step.
pub trait UnitOfWork {
    /// Entities tracked for the pending commit.
    fn tracked(&self) -> Vec<&dyn Entity>;

    /// Commits the pending changes.
    ///
    /// # Returns
    ///
    /// The number of affected entities.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store rejects the commit.
    fn commit(&mut self) -> anyhow::Result<usize>;
}

/// Commits a unit of work and reports the outcome as a response.
///
/// A modified readonly entity rejects the commit up front with a
/// BadRequest validation response; commit faults are captured through the
/// core exception factory. The observed commit duration is recorded on
/// the response.
///
/// # Arguments
///
/// * `uow` - The unit of work to commit
///
/// # Returns
///
/// An Ok response carrying the affected count, or an error-shaped
/// response; this function never returns Err.
pub fn save_changes<U: UnitOfWork>(uow: &mut U) -> Response<usize> {
    for entity in uow.tracked() {
        if entity.is_readonly() && entity.is_dirty() {
            tracing::warn!(
                entity = entity.entity_name(),
                "rejected commit of modified readonly entity"
            );
            return Response::builder(ResponseStatus::BadRequest)
                .message(format!(
                    "Validation Error: readonly entity '{}' has been modified",
                    entity.entity_name()
                ))
                .build();
        }
    }

    let started = std::time::Instant::now();
    let mut response = match uow.commit() {
        Ok(affected) => Response::ok_with(affected),
        Err(fault) => {
            tracing::debug!(error = %fault, "commit failed");
            Response::exception(Some(&fault))
        }
    };
    response.set_execution_time(started.elapsed());
    response
}
