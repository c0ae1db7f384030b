//! In-memory Repository
//!
//! Process-local store implementing both repository traits. Used when no
//! database URL is configured and as the backend for integration tests.
//! It keeps the same guarantees as the PostgreSQL schema: unique emails,
//! chirps must reference an existing user, and deleting users cascades to
//! their chirps.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpRepository, User, UserRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    chirps: Vec<Chirp>,
}

/// Memory-backed users and chirps.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
    write_calls: AtomicU64,
    unavailable: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write operations attempted against the store.
    pub fn write_calls(&self) -> u64 {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent operation fail as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().users.len()
    }

    pub fn chirp_count(&self) -> usize {
        self.tables.lock().chirps.len()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Internal("memory store is unavailable".into()));
        }
        Ok(())
    }

    fn begin_write(&self) -> Result<(), AppError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn create(&self, email: &str) -> Result<User, AppError> {
        self.begin_write()?;

        let mut tables = self.tables.lock();
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::Internal(
                "duplicate key value violates unique constraint users_email_key".into(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        self.begin_write()?;

        let mut tables = self.tables.lock();
        let removed = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ChirpRepository for MemoryRepository {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError> {
        self.begin_write()?;

        let mut tables = self.tables.lock();
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(AppError::Internal(format!(
                "insert on chirps violates foreign key constraint chirps_user_id_fkey: {}",
                user_id
            )));
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            body: body.to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>, AppError> {
        self.check_available()?;
        Ok(self.tables.lock().chirps.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, AppError> {
        self.check_available()?;
        Ok(self.tables.lock().chirps.iter().find(|c| c.id == id).cloned())
    }
}
