//! Redirect resolution and click accounting service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use chrono::Utc;
use serde_json::json;
use tracing::{debug, warn};

/// Service that resolves a short code to its redirect target.
///
/// The redirect decision and the stats update are two separate store calls
/// with no transactional linkage. The update is best-effort: once the lookup
/// has produced a target, nothing that happens to the counter can take the
/// redirect away from the visitor.
pub struct ResolutionService {
    repository: Arc<dyn LinkRepository>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a code to the link captured at lookup time.
    ///
    /// On success the click counter is incremented and `last_clicked` is set
    /// in a single atomic store operation. If the link is deleted between the
    /// lookup and the increment, the increment is a no-op and the redirect
    /// still uses the originally-read target URL. Increment failures are
    /// logged and swallowed for the same reason; they are never retried.
    ///
    /// The returned link reflects the state read at lookup time, before the
    /// increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown at lookup time.
    /// Returns [`AppError::StoreUnavailable`] if the lookup itself fails.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        match self.repository.increment_and_touch(code, Utc::now()).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(code, "link deleted before click was recorded");
            }
            Err(e) => {
                warn!(code, error = %e, "failed to record click");
            }
        }

        Ok(link)
    }
}
