//! User profile operations
//!
//! Registration-on-login, public profile assembly and profile updates,
//! shared by the HTTP handlers.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{LinkVaultError, Result};
use crate::storages::{DEFAULT_AVATAR, Link, Registry, User};
use crate::utils::normalize_username;

/// Patch for `update_profile`.
///
/// `full_name` and `avatar` only apply when present and non-empty; `bio`
/// applies whenever present, the empty string included.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// A user together with their publicly visible links.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub links: Vec<Link>,
    pub link_count: usize,
}

pub struct UserService {
    registry: Arc<dyn Registry>,
}

impl UserService {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Log in, creating the account on first use.
    ///
    /// The stored key is the trimmed lowercase form; the display name keeps
    /// the raw input as typed. Existing users come back untouched, so
    /// logging in repeatedly never resets a profile.
    pub async fn login_or_register(&self, raw_username: &str) -> Result<User> {
        let username = normalize_username(raw_username);
        if username.is_empty() {
            return Err(LinkVaultError::validation("Username is required"));
        }

        if let Some(user) = self.registry.get_user(&username).await {
            debug!("Login for existing user: {}", username);
            return Ok(user);
        }

        let user = User {
            username: username.clone(),
            full_name: raw_username.to_string(),
            bio: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            total_views: 0,
            created: Utc::now(),
        };
        self.registry.upsert_user(user.clone()).await?;
        info!("Registered new user: {}", username);
        Ok(user)
    }

    /// Public profile: the user plus their public links and the count of
    /// that filtered list. Private links never leave this method.
    pub async fn get_profile(&self, username: &str) -> Result<Profile> {
        let username = normalize_username(username);
        let user = self
            .registry
            .get_user(&username)
            .await
            .ok_or_else(|| LinkVaultError::not_found(format!("User {} not found", username)))?;

        let links: Vec<Link> = self
            .registry
            .links_by_user(&username)
            .await
            .into_iter()
            .filter(|link| link.is_public)
            .collect();
        let link_count = links.len();

        Ok(Profile {
            user,
            links,
            link_count,
        })
    }

    pub async fn update_profile(&self, username: &str, patch: ProfilePatch) -> Result<User> {
        let username = normalize_username(username);
        let mut user = self
            .registry
            .get_user(&username)
            .await
            .ok_or_else(|| LinkVaultError::not_found(format!("User {} not found", username)))?;

        if let Some(full_name) = patch.full_name.filter(|v| !v.is_empty()) {
            user.full_name = full_name;
        }
        if let Some(bio) = patch.bio {
            user.bio = bio;
        }
        if let Some(avatar) = patch.avatar.filter(|v| !v.is_empty()) {
            user.avatar = avatar;
        }

        self.registry.upsert_user(user.clone()).await?;
        info!("Updated profile: {}", username);
        Ok(user)
    }
}
