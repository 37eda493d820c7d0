//! Request and response types for the JSON API
//!
//! Field names go over the wire in camelCase. Optional request fields
//! stay `Option` so the handlers can tell "absent" apart from "present
//! but empty", which the update endpoints care about.

use serde::{Deserialize, Serialize};

use crate::storages::{Link, User};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// The public projection of a user record. Login and profile responses
/// expose exactly these fields; `created` stays internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub username: String,
    pub full_name: String,
    pub bio: String,
    pub avatar: String,
    pub total_views: u64,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            full_name: user.full_name,
            bio: user.bio,
            avatar: user.avatar,
            total_views: user.total_views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: PublicUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: PublicUser,
    pub links: Vec<Link>,
    pub link_count: usize,
}

/// Profile updates echo the full stored record back, `created` included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    pub success: bool,
    pub link: Link,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkListResponse {
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickResponse {
    pub success: bool,
    pub clicks: u64,
}
