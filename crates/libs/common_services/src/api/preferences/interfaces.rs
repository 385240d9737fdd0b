use chrono::{DateTime, NaiveDate, NaiveDateTime};
use common_types::{
    AlbumsPreferences, AssetOrder, CastPreferences, DownloadPreferences,
    EmailNotificationsPreferences, FoldersPreferences, MemoriesPreferences, PeoplePreferences,
    PurchasePreferences, RatingsPreferences, SharedLinksPreferences, TagsPreferences,
    UserAvatarColor,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Request Payloads ---

/// A partial update of a user's preferences. Every section and every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesUpdateDto {
    #[validate(nested)]
    pub albums: Option<AlbumsUpdate>,
    #[validate(nested)]
    pub folders: Option<FoldersUpdate>,
    #[validate(nested)]
    pub memories: Option<MemoriesUpdate>,
    #[validate(nested)]
    pub people: Option<PeopleUpdate>,
    #[validate(nested)]
    pub ratings: Option<RatingsUpdate>,
    #[validate(nested)]
    pub shared_links: Option<SharedLinksUpdate>,
    #[validate(nested)]
    pub tags: Option<TagsUpdate>,
    #[validate(nested)]
    pub avatar: Option<AvatarUpdate>,
    #[validate(nested)]
    pub email_notifications: Option<EmailNotificationsUpdate>,
    #[validate(nested)]
    pub download: Option<DownloadUpdate>,
    #[validate(nested)]
    pub purchase: Option<PurchaseUpdate>,
    #[validate(nested)]
    pub cast: Option<CastUpdate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsUpdate {
    pub default_asset_order: Option<AssetOrder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoldersUpdate {
    pub enabled: Option<bool>,
    pub sidebar_web: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoriesUpdate {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeopleUpdate {
    pub enabled: Option<bool>,
    pub sidebar_web: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingsUpdate {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedLinksUpdate {
    pub enabled: Option<bool>,
    pub sidebar_web: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagsUpdate {
    pub enabled: Option<bool>,
    pub sidebar_web: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpdate {
    pub color: Option<UserAvatarColor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationsUpdate {
    pub enabled: Option<bool>,
    pub album_invite: Option<bool>,
    pub album_update: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUpdate {
    /// Maximum archive size in bytes.
    #[validate(range(min = 1))]
    pub archive_size: Option<i64>,
    pub include_embedded_videos: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseUpdate {
    pub show_support_badge: Option<bool>,
    /// ISO-8601 date or date-time.
    #[validate(custom(function = "validate_iso_date"))]
    pub hide_buy_button_until: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastUpdate {
    pub g_cast_enabled: Option<bool>,
}

const ISO_DATE_TIMES_WITH_OFFSET: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];
const ISO_DATE_TIMES: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];
const ISO_DATES: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Accepts ISO 8601 calendar dates and date-times, extended or basic, with or without an offset.
fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    let is_iso = ISO_DATE_TIMES_WITH_OFFSET
        .iter()
        .any(|format| DateTime::parse_from_str(value, format).is_ok())
        || ISO_DATE_TIMES
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(value, format).is_ok())
        || ISO_DATES
            .iter()
            .any(|format| NaiveDate::parse_from_str(value, format).is_ok());

    if is_iso {
        Ok(())
    } else {
        Err(ValidationError::new("iso_date").with_message("must be an ISO 8601 date string".into()))
    }
}

// --- Response Payloads ---

/// A user's preferences with every field resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesResponseDto {
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
