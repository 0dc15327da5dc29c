use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::domain::{ProfilePatch, User, UserProfile};
use crate::error::{Result, ServiceError};
use crate::repository::UserStore;
use crate::security::SecretHasher;
use crate::storage::{object_key_from_url, AssetStore};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Validates and applies partial profile mutations, including password
/// rotation and profile/cover image replacement.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn UserStore>,
    assets: Arc<dyn AssetStore>,
    hasher: Arc<dyn SecretHasher>,
}

impl ProfileService {
    pub fn new(
        store: Arc<dyn UserStore>,
        assets: Arc<dyn AssetStore>,
        hasher: Arc<dyn SecretHasher>,
    ) -> Self {
        Self {
            store,
            assets,
            hasher,
        }
    }

    /// Look up a user by handle.
    pub async fn get_profile(&self, username: &str) -> Result<UserProfile> {
        self.store
            .find_by_username(username)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| ServiceError::NotFound(format!("user {username}")))
    }

    /// Apply a partial profile mutation and return the updated profile.
    ///
    /// Nothing is persisted unless every supplied field validates and every
    /// external asset call succeeds.
    pub async fn update_profile(&self, actor_id: Uuid, patch: ProfilePatch) -> Result<UserProfile> {
        let mut user = self
            .store
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {actor_id}")))?;

        self.apply_password_change(&mut user, &patch)?;

        if let Some(raw) = patch.avatar.as_deref() {
            user.avatar_url = Some(self.replace_asset(user.avatar_url.as_deref(), raw).await?);
        }
        if let Some(raw) = patch.cover.as_deref() {
            user.cover_url = Some(self.replace_asset(user.cover_url.as_deref(), raw).await?);
        }

        if let Some(username) = patch.username {
            self.apply_username(&mut user, username).await?;
        }
        if let Some(email) = patch.email {
            self.apply_email(&mut user, email).await?;
        }
        if let Some(display_name) = patch.display_name {
            if display_name.is_empty() {
                return Err(ServiceError::InvalidArgument(
                    "display name must not be empty".to_string(),
                ));
            }
            user.display_name = Some(display_name);
        }
        // Free-text fields: an explicit empty string clears the value.
        if let Some(bio) = patch.bio {
            user.bio = if bio.is_empty() { None } else { Some(bio) };
        }
        if let Some(link) = patch.link {
            user.link = if link.is_empty() { None } else { Some(link) };
        }

        user.updated_at = Utc::now();
        self.store.save(&user).await?;

        debug!(user = %actor_id, "profile updated");
        Ok(UserProfile::from(user))
    }

    /// Rotate the stored secret when the patch carries a password change.
    ///
    /// Both halves of the change request are required together; the current
    /// password must verify against the stored hash before the new one is
    /// accepted.
    fn apply_password_change(&self, user: &mut User, patch: &ProfilePatch) -> Result<()> {
        let (current, new) = match (
            patch.current_password.as_deref(),
            patch.new_password.as_deref(),
        ) {
            (None, None) => return Ok(()),
            (Some(current), Some(new)) => (current, new),
            _ => {
                return Err(ServiceError::InvalidArgument(
                    "both the current and the new password are required".to_string(),
                ))
            }
        };

        if !self.hasher.verify(current, &user.password_hash)? {
            return Err(ServiceError::Unauthorized(
                "current password is incorrect".to_string(),
            ));
        }
        if new.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::InvalidArgument(format!(
                "new password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }

        user.password_hash = self.hasher.hash(new)?;
        Ok(())
    }

    /// Destroy the previously stored asset (if any), upload the replacement,
    /// and return its canonical URL.
    async fn replace_asset(&self, existing_url: Option<&str>, raw: &str) -> Result<String> {
        if let Some(key) = existing_url.and_then(object_key_from_url) {
            self.assets.destroy(key).await?;
        }
        let uploaded = self.assets.upload(raw).await?;
        Ok(uploaded.url)
    }

    async fn apply_username(&self, user: &mut User, username: String) -> Result<()> {
        if username.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "username must not be empty".to_string(),
            ));
        }
        if let Some(existing) = self.store.find_by_username(&username).await? {
            if existing.id != user.id {
                return Err(ServiceError::InvalidArgument(format!(
                    "username {username} is already taken"
                )));
            }
        }
        user.username = username;
        Ok(())
    }

    async fn apply_email(&self, user: &mut User, email: String) -> Result<()> {
        if !email.validate_email() {
            return Err(ServiceError::InvalidArgument(format!(
                "invalid email address: {email}"
            )));
        }
        if let Some(existing) = self.store.find_by_email(&email).await? {
            if existing.id != user.id {
                return Err(ServiceError::InvalidArgument(format!(
                    "email {email} is already in use"
                )));
            }
        }
        user.email = email;
        Ok(())
    }
}
