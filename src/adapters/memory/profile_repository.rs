//! In-memory profile repository, one profile per user.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::health::{Profile, ProfileUpdate};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn get(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn update(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;
        let current = profiles.get(user_id).ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, format!("Profile not found: {}", user_id))
        })?;

        let now = Timestamp::now();
        let mut updated = current.clone();
        updated.apply(update, now);
        updated
            .validate(&now)
            .map_err(|e| DomainError::validation(e.field(), e.to_string()))?;

        profiles.insert(user_id.clone(), updated.clone());
        Ok(updated)
    }
}
