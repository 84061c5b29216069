//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};

/// A short link with its usage counters.
///
/// The short code is the primary key and is immutable after creation, as is
/// the target URL. `clicks` and `last_clicked` are only ever advanced by the
/// resolution path, exactly once per successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link as it exists immediately after allocation:
    /// zero clicks and no last-click timestamp.
    pub fn newly_created(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            clicks: 0,
            last_clicked: None,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
