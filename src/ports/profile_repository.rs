//! ProfileRepository port for health profile persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::health::{Profile, ProfileUpdate};

/// Repository for the single health profile of each user.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores a profile, replacing any existing one for the same user.
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Finds the profile of a user.
    async fn get(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Applies a partial update and returns the new profile.
    ///
    /// Fails with `ProfileNotFound` if the user has no profile, or
    /// `ValidationFailed` if the result would be invalid.
    async fn update(&self, user_id: &UserId, update: ProfileUpdate) -> Result<Profile, DomainError>;
}
