//! Admin Service
//!
//! Visit metrics and the development-only data reset.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::UserRepository;
use crate::shared::hit_counter::HitCounter;

/// Admin service trait
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Current visit count
    fn hits(&self) -> i32;

    /// Delete all users (and their chirps) and zero the visit counter.
    async fn reset(&self) -> Result<(), AdminError>;
}

/// Admin service errors
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Reset is only allowed in dev environment")]
    NotDevPlatform,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// AdminService implementation
pub struct AdminServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    hits: Arc<HitCounter>,
    dev_platform: bool,
}

impl AdminServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, hits: Arc<HitCounter>, dev_platform: bool) -> Self {
        Self {
            user_repo,
            hits,
            dev_platform,
        }
    }
}

#[async_trait]
impl AdminService for AdminServiceImpl {
    fn hits(&self) -> i32 {
        self.hits.get()
    }

    async fn reset(&self) -> Result<(), AdminError> {
        if !self.dev_platform {
            tracing::warn!("Reset refused outside dev platform");
            return Err(AdminError::NotDevPlatform);
        }

        // The counter is only cleared once the store has been wiped
        let removed = self
            .user_repo
            .delete_all()
            .await
            .map_err(|e| AdminError::Internal(e.to_string()))?;
        self.hits.reset();

        tracing::info!(users_removed = removed, "Service state reset");
        Ok(())
    }
}
