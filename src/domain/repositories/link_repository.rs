//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of an insert attempt against the uniqueness-enforcing store.
///
/// A duplicate key is an expected, observable result rather than an error:
/// the allocation service reacts to it differently depending on whether the
/// code was caller-chosen (reject) or generated (retry).
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Inserted(Link),
    DuplicateKey,
}

/// Storage interface consumed by the allocation and resolution services.
///
/// The store is the single source of atomicity: `insert` enforces code
/// uniqueness under concurrent writers, and `increment_and_touch` bumps the
/// counter and timestamp in one operation so callers never perform a
/// read-modify-write on the click count.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link if the code is not already taken.
    ///
    /// Must be atomic: if two concurrent inserts race on the same code,
    /// exactly one observes [`InsertOutcome::Inserted`] and the other
    /// [`InsertOutcome::DuplicateKey`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `clicks` by 1 and sets `last_clicked = now`.
    ///
    /// Returns `Ok(true)` if a link was updated, `Ok(false)` if the code no
    /// longer exists (e.g. a delete raced in).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn increment_and_touch(&self, code: &str, now: DateTime<Utc>) -> Result<bool, AppError>;

    /// Deletes a link by its short code.
    ///
    /// Returns `Ok(true)` if the link was found and removed, `Ok(false)` if
    /// no link matched the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
