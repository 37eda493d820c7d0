use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Avatar assigned to newly registered users until they pick their own.
pub const DEFAULT_AVATAR: &str = "👤";

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

fn default_true() -> bool {
    true
}

/// A registered profile, keyed by its lowercased username.
///
/// `username` and `created` are immutable after registration. `total_views`
/// is only ever bumped as a side effect of click registration on one of the
/// user's links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default)]
    pub total_views: u64,
    pub created: chrono::DateTime<chrono::Utc>,
}

/// One shareable URL entry owned by a user.
///
/// `user` is a plain foreign key into the users mapping and is never
/// enforced: links whose owner record has disappeared stay readable, and
/// consumers must treat the missing owner as unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub user: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub created: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
}

/// The entire database: both mappings, serialized wholesale to a single
/// JSON document and rewritten on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub users: HashMap<String, User>,
    #[serde(default)]
    pub links: HashMap<String, Link>,
}
