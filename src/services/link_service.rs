//! Link operations
//!
//! CRUD plus the two counters: `views` (bumped on fetch-by-id) and
//! `clicks` (bumped on click-through, rippling into the owner's total).

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{LinkVaultError, Result};
use crate::storages::{Link, Registry};
use crate::utils::{generate_link_id, normalize_username};

/// Everything needed to create a link. Only `username`, `title` and `url`
/// are mandatory; the rest falls back to defaults.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub username: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// Patch for `update_link`.
///
/// Same asymmetry as profile updates: `title` and `url` only apply when
/// present and non-empty, while `description` and `is_public` apply
/// whenever present, so an empty description and `false` are honored.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

pub struct LinkService {
    registry: Arc<dyn Registry>,
}

impl LinkService {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Create a link with a fresh random id.
    ///
    /// Presence checks only: the owner does not have to exist as a user,
    /// and the URL is stored as given.
    pub async fn create_link(&self, new: NewLink) -> Result<Link> {
        let username = normalize_username(&new.username);
        if username.is_empty() || new.title.is_empty() || new.url.is_empty() {
            return Err(LinkVaultError::validation(
                "username, title and url are required",
            ));
        }

        let link = Link {
            id: generate_link_id(),
            user: username,
            title: new.title,
            url: new.url,
            description: new.description.unwrap_or_default(),
            is_public: new.is_public.unwrap_or(true),
            created: Utc::now(),
            views: 0,
            clicks: 0,
        };

        self.registry.upsert_link(link.clone()).await?;
        info!("Created link {} for user: {}", link.id, link.user);
        Ok(link)
    }

    /// All links owned by a user, private ones included, oldest first.
    /// An unknown user simply yields an empty list.
    pub async fn links_by_user(&self, username: &str) -> Vec<Link> {
        self.registry
            .links_by_user(&normalize_username(username))
            .await
    }

    /// Fetch by id for display. Bumps the view counter as a side effect,
    /// so retrieval is not read-only.
    pub async fn fetch_link(&self, id: &str) -> Result<Link> {
        let link = self.registry.increment_views(id).await?;
        debug!("Link {} viewed ({} views)", id, link.views);
        Ok(link)
    }

    /// Fetch by id without touching any counter. Used by the preview page,
    /// which counts clicks instead of views.
    pub async fn peek_link(&self, id: &str) -> Result<Link> {
        self.registry
            .get_link(id)
            .await
            .ok_or_else(|| LinkVaultError::not_found(format!("Link {} not found", id)))
    }

    pub async fn update_link(&self, id: &str, patch: LinkPatch) -> Result<Link> {
        let mut link = self
            .registry
            .get_link(id)
            .await
            .ok_or_else(|| LinkVaultError::not_found(format!("Link {} not found", id)))?;

        if let Some(title) = patch.title.filter(|v| !v.is_empty()) {
            link.title = title;
        }
        if let Some(url) = patch.url.filter(|v| !v.is_empty()) {
            link.url = url;
        }
        if let Some(description) = patch.description {
            link.description = description;
        }
        if let Some(is_public) = patch.is_public {
            link.is_public = is_public;
        }

        self.registry.upsert_link(link.clone()).await?;
        info!("Updated link: {}", id);
        Ok(link)
    }

    pub async fn delete_link(&self, id: &str) -> Result<()> {
        self.registry.remove_link(id).await
    }

    /// Record a click-through and return the new click count. The owner's
    /// `total_views` follows along when that user still exists.
    pub async fn register_click(&self, id: &str) -> Result<u64> {
        let clicks = self.registry.register_click(id).await?;
        info!("Click registered for link {} ({} total)", id, clicks);
        Ok(clicks)
    }
}
