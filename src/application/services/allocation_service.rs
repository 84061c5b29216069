//! Code allocation and link lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::target_url::validate_target_url;
use serde_json::json;

/// Attempts at generating a collision-free random code before giving up.
/// Bounded so a saturated keyspace fails loudly instead of looping forever.
const MAX_ATTEMPTS: usize = 10;

/// Service that assigns short codes to target URLs.
///
/// Also owns the management side of the link lifecycle: lookup of a stored
/// record and explicit deletion.
pub struct AllocationService {
    repository: Arc<dyn LinkRepository>,
}

impl AllocationService {
    /// Creates a new allocation service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Allocates a code for a target URL.
    ///
    /// With a `requested_code`, the code is validated and inserted as-is; a
    /// collision is reported as [`AppError::CodeTaken`], never silently
    /// replaced with a generated one. Without a requested code, random
    /// candidates are drawn until the store accepts one, capped at
    /// `MAX_ATTEMPTS`.
    ///
    /// The returned link has `clicks = 0` and no last-click timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the target is not an absolute
    /// http(s) URL, [`AppError::InvalidCodeFormat`] if the requested code
    /// violates the format contract, [`AppError::CodeTaken`] on a custom-code
    /// collision, and [`AppError::AllocationExhausted`] when every generated
    /// candidate collided.
    pub async fn allocate(
        &self,
        target_url: String,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        let target_url = validate_target_url(&target_url).map_err(|e| {
            AppError::invalid_url("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(code) = requested_code {
            validate_custom_code(&code)?;

            let new_link = NewLink {
                code: code.clone(),
                target_url,
            };

            return match self.repository.insert(new_link).await? {
                InsertOutcome::Inserted(link) => Ok(link),
                InsertOutcome::DuplicateKey => Err(AppError::code_taken(
                    "Short code already in use",
                    json!({ "code": code }),
                )),
            };
        }

        self.allocate_generated(target_url).await
    }

    /// Retrieves a stored link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist, including
    /// when it was already deleted.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(code).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Generates random candidates until the store accepts one.
    async fn allocate_generated(&self, target_url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = generate_code();

            let new_link = NewLink {
                code: code.clone(),
                target_url: target_url.clone(),
            };

            match self.repository.insert(new_link).await? {
                InsertOutcome::Inserted(link) => return Ok(link),
                InsertOutcome::DuplicateKey => {
                    tracing::debug!(code, attempt, "generated code collided, retrying");
                }
            }
        }

        Err(AppError::allocation_exhausted(
            "Failed to allocate a unique code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
