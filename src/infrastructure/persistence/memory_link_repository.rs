//! In-process implementation of the link repository.
//!
//! Used when no `DATABASE_URL` is configured, and as a deterministic
//! substrate for tests. A single mutex around the map gives the same
//! atomicity the PostgreSQL backend gets from its primary key and
//! single-statement update: insert-if-absent and increment-and-touch each
//! happen entirely inside one critical section.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Mutex-guarded map of code to link. Links do not survive a restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// The lock is only ever held across plain map operations, never across an
// await point, so a std Mutex is sufficient in async context.
#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut links = self.links.lock().expect("link map poisoned");

        if links.contains_key(&new_link.code) {
            return Ok(InsertOutcome::DuplicateKey);
        }

        let link = Link::newly_created(new_link.code.clone(), new_link.target_url, Utc::now());
        links.insert(new_link.code, link.clone());

        Ok(InsertOutcome::Inserted(link))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().expect("link map poisoned");
        Ok(links.get(code).cloned())
    }

    async fn increment_and_touch(&self, code: &str, now: DateTime<Utc>) -> Result<bool, AppError> {
        let mut links = self.links.lock().expect("link map poisoned");

        match links.get_mut(code) {
            Some(link) => {
                link.clicks += 1;
                link.last_clicked = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.lock().expect("link map poisoned");
        Ok(links.remove(code).is_some())
    }
}
