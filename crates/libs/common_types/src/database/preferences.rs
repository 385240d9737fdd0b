use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default download archive size: 4 GiB.
pub const DEFAULT_ARCHIVE_SIZE: i64 = 4 * 1024 * 1024 * 1024;

/// Date until which the buy button stays hidden for users who never dismissed it.
pub const DEFAULT_HIDE_BUY_BUTTON_UNTIL: &str = "2022-02-12T00:00:00.000Z";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetOrder {
    Asc,
    #[default]
    Desc,
}

/// The preferences of a single user, with every field resolved.
///
/// Missing sections or fields in a stored document fall back to their defaults on deserialization,
/// so a partial document read from `user_metadata` yields a complete record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub albums: AlbumsPreferences,
    pub folders: FoldersPreferences,
    pub memories: MemoriesPreferences,
    pub people: PeoplePreferences,
    pub ratings: RatingsPreferences,
    pub shared_links: SharedLinksPreferences,
    pub tags: TagsPreferences,
    pub email_notifications: EmailNotificationsPreferences,
    pub download: DownloadPreferences,
    pub purchase: PurchasePreferences,
    pub cast: CastPreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumsPreferences {
    pub default_asset_order: AssetOrder,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FoldersPreferences {
    pub enabled: bool,
    pub sidebar_web: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MemoriesPreferences {
    pub enabled: bool,
}

impl Default for MemoriesPreferences {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PeoplePreferences {
    pub enabled: bool,
    pub sidebar_web: bool,
}

impl Default for PeoplePreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            sidebar_web: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingsPreferences {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SharedLinksPreferences {
    pub enabled: bool,
    pub sidebar_web: bool,
}

impl Default for SharedLinksPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            sidebar_web: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TagsPreferences {
    pub enabled: bool,
    pub sidebar_web: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailNotificationsPreferences {
    pub enabled: bool,
    pub album_invite: bool,
    pub album_update: bool,
}

impl Default for EmailNotificationsPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            album_invite: true,
            album_update: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadPreferences {
    /// Maximum size in bytes of a single download archive.
    pub archive_size: i64,
    pub include_embedded_videos: bool,
}

impl Default for DownloadPreferences {
    fn default() -> Self {
        Self {
            archive_size: DEFAULT_ARCHIVE_SIZE,
            include_embedded_videos: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchasePreferences {
    pub show_support_badge: bool,
    /// ISO-8601 timestamp.
    pub hide_buy_button_until: String,
}

impl Default for PurchasePreferences {
    fn default() -> Self {
        Self {
            show_support_badge: true,
            hide_buy_button_until: DEFAULT_HIDE_BUY_BUTTON_UNTIL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CastPreferences {
    pub g_cast_enabled: bool,
}
