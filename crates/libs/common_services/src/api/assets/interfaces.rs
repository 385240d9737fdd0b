use crate::api::auth::interfaces::AuthDto;
use crate::api::exif::interfaces::ExifResponseDto;
use crate::api::people::interfaces::{AssetFaceWithoutPersonResponseDto, PersonWithFacesResponseDto};
use crate::api::tags::interfaces::TagResponseDto;
use crate::api::users::interfaces::UserResponseDto;
use chrono::{DateTime, Utc};
use common_types::{AssetType, AssetVisibility};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Options ---

/// Controls how much of an asset `map_asset` exposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetMapOptions<'a> {
    /// Only produce the sanitized projection.
    pub strip_metadata: bool,
    /// Include the stack summary (`stack` is omitted otherwise).
    pub with_stack: bool,
    /// The caller. Without it, nothing is reported as favorite.
    pub auth: Option<&'a AuthDto>,
}

// --- Response Payloads ---

/// The fields of an asset that are safe to show to viewers without full access.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedAssetResponseDto {
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Base64 encoded thumbhash.
    pub thumbhash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_mime_type: Option<String>,
    pub local_date_time: DateTime<Utc>,
    pub duration: String,
    pub live_photo_video_id: Option<String>,
    pub has_metadata: bool,
}

/// Full details of an asset. Embeds the sanitized fields, flattened on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponseDto {
    #[serde(flatten)]
    pub sanitized: SanitizedAssetResponseDto,
    pub created_at: DateTime<Utc>,
    pub device_asset_id: String,
    pub device_id: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserResponseDto>,
    pub library_id: Option<String>,
    pub original_path: String,
    pub original_file_name: String,
    pub file_created_at: DateTime<Utc>,
    pub file_modified_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_favorite: bool,
    pub is_archived: bool,
    pub is_trashed: bool,
    pub is_offline: bool,
    pub visibility: AssetVisibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif_info: Option<ExifResponseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagResponseDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<PersonWithFacesResponseDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned_faces: Option<Vec<AssetFaceWithoutPersonResponseDto>>,
    /// Base64 encoded checksum.
    pub checksum: String,
    /// Omitted unless requested; `null` when requested but the asset is not stacked.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<AssetStackResponseDto>)]
    pub stack: Option<Option<AssetStackResponseDto>>,
    pub duplicate_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetStackResponseDto {
    pub id: String,
    pub primary_asset_id: String,
    pub asset_count: i64,
}

/// Either projection of an asset, depending on what the caller may see.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum AssetResponse {
    Full(Box<AssetResponseDto>),
    Sanitized(SanitizedAssetResponseDto),
}

impl AssetResponse {
    /// The sanitized fields, present in both projections.
    #[must_use]
    pub fn sanitized(&self) -> &SanitizedAssetResponseDto {
        match self {
            Self::Full(full) => &full.sanitized,
            Self::Sanitized(sanitized) => sanitized,
        }
    }

    #[must_use]
    pub fn into_full(self) -> Option<AssetResponseDto> {
        match self {
            Self::Full(full) => Some(*full),
            Self::Sanitized(_) => None,
        }
    }
}
