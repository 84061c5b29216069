//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uniqueness is enforced by the primary key on `code`; the insert uses
/// `ON CONFLICT DO NOTHING` so a duplicate key is observed as a missing
/// returned row rather than a constraint error. Click accounting is a single
/// `UPDATE .. SET clicks = clicks + 1` statement, atomic under concurrent
/// redirects of the same code.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    target_url: String,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            code: row.code,
            target_url: row.target_url,
            clicks: row.clicks,
            last_clicked: row.last_clicked,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, target_url, clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Inserted(row.into()),
            None => InsertOutcome::DuplicateKey,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT code, target_url, clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_and_touch(&self, code: &str, now: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = $2
            WHERE code = $1
            "#,
        )
        .bind(code)
        .bind(now)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
