use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::{error, info};

use super::{Link, Registry, RegistrySnapshot, User};
use crate::errors::{LinkVaultError, Result};

/// File-backed registry: the full state lives in memory and is rewritten
/// to a single JSON document after every mutation.
///
/// Writes go to a sibling temp file first and are renamed over the live
/// file, so a crash mid-write never leaves a truncated snapshot behind.
pub struct JsonFileStore {
    file_path: PathBuf,
    state: RwLock<RegistrySnapshot>,
    // Serializes mutate-then-persist sequences; without it two mutations
    // could write their snapshots in the wrong order.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let snapshot = Self::load_snapshot(&file_path)?;

        info!(
            "JsonFileStore ready: {} users, {} links ({})",
            snapshot.users.len(),
            snapshot.links.len(),
            file_path.display()
        );

        Ok(JsonFileStore {
            file_path,
            state: RwLock::new(snapshot),
            write_lock: Mutex::new(()),
        })
    }

    fn load_snapshot(path: &Path) -> Result<RegistrySnapshot> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                error!("Failed to parse registry file {}: {}", path.display(), e);
                LinkVaultError::serialization(format!("Failed to parse registry file: {}", e))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "Registry file not found, creating empty store: {}",
                    path.display()
                );
                let empty = RegistrySnapshot::default();
                Self::write_snapshot(path, &empty)?;
                Ok(empty)
            }
            Err(e) => Err(LinkVaultError::file_operation(format!(
                "Failed to read registry file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write_snapshot(path: &Path, snapshot: &RegistrySnapshot) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Apply a mutation to a copy of the state, persist it, then commit it
    /// to memory. Domain errors from `op` reject the mutation before any
    /// visible change; a failed disk write also leaves memory untouched.
    fn mutate<T>(&self, op: impl FnOnce(&mut RegistrySnapshot) -> Result<T>) -> Result<T> {
        let _guard = self.write_lock.lock();

        let mut next = self.state.read().clone();
        let out = op(&mut next)?;
        Self::write_snapshot(&self.file_path, &next)?;
        *self.state.write() = next;
        Ok(out)
    }
}

#[async_trait]
impl Registry for JsonFileStore {
    async fn get_user(&self, username: &str) -> Option<User> {
        self.state.read().users.get(username).cloned()
    }

    async fn upsert_user(&self, user: User) -> Result<()> {
        let key = user.username.clone();
        self.mutate(|state| {
            state.users.insert(key, user);
            Ok(())
        })
    }

    async fn get_link(&self, id: &str) -> Option<Link> {
        self.state.read().links.get(id).cloned()
    }

    async fn upsert_link(&self, link: Link) -> Result<()> {
        let key = link.id.clone();
        self.mutate(|state| {
            state.links.insert(key, link);
            Ok(())
        })
    }

    async fn remove_link(&self, id: &str) -> Result<()> {
        self.mutate(|state| {
            if state.links.remove(id).is_none() {
                return Err(LinkVaultError::not_found(format!("Link {} not found", id)));
            }
            Ok(())
        })?;
        info!("Removed link: {}", id);
        Ok(())
    }

    async fn links_by_user(&self, username: &str) -> Vec<Link> {
        let state = self.state.read();
        let mut links: Vec<Link> = state
            .links
            .values()
            .filter(|link| link.user == username)
            .cloned()
            .collect();
        // Oldest first, matching the order links were added in.
        links.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        links
    }

    async fn increment_views(&self, id: &str) -> Result<Link> {
        self.mutate(|state| {
            let link = state
                .links
                .get_mut(id)
                .ok_or_else(|| LinkVaultError::not_found(format!("Link {} not found", id)))?;
            link.views += 1;
            Ok(link.clone())
        })
    }

    async fn register_click(&self, id: &str) -> Result<u64> {
        self.mutate(|state| {
            let link = state
                .links
                .get_mut(id)
                .ok_or_else(|| LinkVaultError::not_found(format!("Link {} not found", id)))?;
            link.clicks += 1;
            let clicks = link.clicks;
            let owner = link.user.clone();

            if let Some(user) = state.users.get_mut(&owner) {
                user.total_views += 1;
            }

            Ok(clicks)
        })
    }

    async fn counts(&self) -> (usize, usize) {
        let state = self.state.read();
        (state.users.len(), state.links.len())
    }

    async fn reload(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        let snapshot = Self::load_snapshot(&self.file_path)?;
        info!(
            "Reloaded registry: {} users, {} links",
            snapshot.users.len(),
            snapshot.links.len()
        );
        *self.state.write() = snapshot;
        Ok(())
    }

    async fn backend_name(&self) -> String {
        "file".to_string()
    }
}
