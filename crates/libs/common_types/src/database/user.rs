use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Represents a user in the application.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    pub avatar_color: Option<UserAvatarColor>,
    pub profile_image_path: String,
    pub profile_changed_at: DateTime<Utc>,
}

/// Maps to the `user_avatar_color` Postgres enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash, ToSchema)]
#[sqlx(type_name = "user_avatar_color", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserAvatarColor {
    Primary,
    Pink,
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    Gray,
    Amber,
}

impl UserAvatarColor {
    /// All colors, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::Pink,
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Gray,
        Self::Amber,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Gray => "gray",
            Self::Amber => "amber",
        }
    }
}

impl fmt::Display for UserAvatarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps to the `user_metadata_key` Postgres enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "user_metadata_key", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserMetadataKey {
    Preferences,
    License,
    Onboarding,
}

/// Corresponds to the '`user_metadata`' table. `value` holds a JSON document whose shape depends on `key`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct UserMetadataItem {
    pub user_id: String,
    pub key: UserMetadataKey,
    pub value: Value,
}
