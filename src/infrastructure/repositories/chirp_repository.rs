//! Chirp Repository Implementation
//!
//! PostgreSQL implementation of chirp storage. Referential integrity of
//! `user_id` is enforced by the `chirps_user_id_fkey` constraint, not here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpRepository};
use crate::shared::error::AppError;

/// PostgreSQL chirp repository implementation.
#[derive(Clone)]
pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    /// Creates a new PgChirpRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for chirp queries.
#[derive(Debug, sqlx::FromRow)]
struct ChirpRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    body: String,
    user_id: Uuid,
}

impl ChirpRow {
    fn into_chirp(self) -> Chirp {
        Chirp {
            id: self.id,
            body: self.body,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES (gen_random_uuid(), NOW(), NOW(), $1, $2)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_chirp())
    }

    async fn list(&self) -> Result<Vec<Chirp>, AppError> {
        let rows = sqlx::query_as::<_, ChirpRow>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ChirpRow::into_chirp).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, AppError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ChirpRow::into_chirp))
    }
}
