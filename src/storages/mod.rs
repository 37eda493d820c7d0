use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::errors::{LinkVaultError, Result};

pub mod file;
pub mod models;

pub use models::{DEFAULT_AVATAR, Link, RegistrySnapshot, User};

/// Typed access to the two record mappings.
///
/// Callers are expected to normalize usernames (trim + lowercase) before
/// reaching the registry; keys are matched exactly. Every mutating call
/// persists the full snapshot before returning, so a successful `Ok`
/// means the change is on disk.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn get_user(&self, username: &str) -> Option<User>;
    async fn upsert_user(&self, user: User) -> Result<()>;

    async fn get_link(&self, id: &str) -> Option<Link>;
    async fn upsert_link(&self, link: Link) -> Result<()>;
    async fn remove_link(&self, id: &str) -> Result<()>;

    /// All links owned by the given username, public and private, oldest
    /// first. No user existence check: unknown owners yield an empty list.
    async fn links_by_user(&self, username: &str) -> Vec<Link>;

    /// Bump the view counter of one link and return the updated record.
    async fn increment_views(&self, id: &str) -> Result<Link>;

    /// Bump the click counter of one link and, when the owning user still
    /// exists, that user's total view counter. Returns the new click count.
    /// A missing owner is skipped silently; orphaned links keep working.
    async fn register_click(&self, id: &str) -> Result<u64>;

    /// (users, links) totals, for health reporting.
    async fn counts(&self) -> (usize, usize);

    async fn reload(&self) -> Result<()>;
    async fn backend_name(&self) -> String;
}

pub struct RegistryFactory;

impl RegistryFactory {
    pub fn create() -> Result<Arc<dyn Registry>> {
        Self::create_from(&crate::config::get_config().storage)
    }

    /// Build a registry for an explicit storage section
    pub fn create_from(storage: &StorageConfig) -> Result<Arc<dyn Registry>> {
        match storage.backend.as_str() {
            "file" => {
                let store = file::JsonFileStore::new(&storage.file_path)?;
                Ok(Arc::new(store) as Arc<dyn Registry>)
            }
            other => Err(LinkVaultError::config(format!(
                "Unknown storage backend: {}. Supported: file",
                other
            ))),
        }
    }
}
