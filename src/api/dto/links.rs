//! DTOs for the link management endpoints.
//!
//! The wire format is camelCase to stay compatible with existing clients of
//! the service (`targetUrl`, `lastClicked`, `createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The destination URL (must be an absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, max = 2048))]
    pub target_url: String,

    /// Optional caller-chosen short code. Validated against
    /// `^[A-Za-z0-9]{6,8}$` by the allocation service.
    pub code: Option<String>,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub clicks: i64,
    /// Absent until the first redirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response record, deriving the public short URL from the
    /// configured base URL.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.code);

        Self {
            code: link.code,
            target_url: link.target_url,
            short_url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}
