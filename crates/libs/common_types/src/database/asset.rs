use crate::database::exif::Exif;
use crate::database::face::AssetFace;
use crate::database::stack::Stack;
use crate::database::tag::Tag;
use crate::database::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;

/// Maps to the `asset_type` Postgres enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "asset_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    Image,
    Video,
    Audio,
    Other,
}

/// Maps to the `asset_visibility` Postgres enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "asset_visibility", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetVisibility {
    Archive,
    Timeline,
    Hidden,
    Locked,
}

/// The root struct representing an 'asset' with whichever associations the query loaded.
///
/// An association that was not loaded is `None`, which is different from a loaded but empty one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Asset {
    pub id: String,
    pub owner_id: String,
    pub device_asset_id: String,
    pub device_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub original_path: String,
    pub original_file_name: String,
    pub checksum: Vec<u8>,
    pub thumbhash: Option<Vec<u8>>,
    pub duration: Option<String>,
    pub visibility: AssetVisibility,
    pub is_favorite: bool,
    pub is_offline: bool,
    pub library_id: Option<String>,
    pub live_photo_video_id: Option<String>,
    pub duplicate_id: Option<String>,
    pub file_created_at: DateTime<Utc>,
    pub file_modified_at: DateTime<Utc>,
    pub local_date_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub exif_info: Option<Exif>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub faces: Option<Vec<AssetFace>>,
    #[serde(default)]
    pub stack: Option<Stack>,
}

/// Row shape of an asset query that aggregates its associations into JSON columns.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct AssetRow {
    pub id: String,
    pub owner_id: String,
    pub device_asset_id: String,
    pub device_id: String,
    #[sqlx(rename = "type")]
    pub asset_type: AssetType,
    pub original_path: String,
    pub original_file_name: String,
    pub checksum: Vec<u8>,
    pub thumbhash: Option<Vec<u8>>,
    pub duration: Option<String>,
    pub visibility: AssetVisibility,
    pub is_favorite: bool,
    pub is_offline: bool,
    pub library_id: Option<String>,
    pub live_photo_video_id: Option<String>,
    pub duplicate_id: Option<String>,
    pub file_created_at: DateTime<Utc>,
    pub file_modified_at: DateTime<Utc>,
    pub local_date_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub owner: Option<Json<User>>,
    pub exif_info: Option<Json<Exif>>,
    pub tags: Option<Json<Vec<Tag>>>,
    pub faces: Option<Json<Vec<AssetFace>>>,
    pub stack: Option<Json<Stack>>,
}

impl From<AssetRow> for Asset {
    fn from(r: AssetRow) -> Self {
        Self {
            id: r.id,
            owner_id: r.owner_id,
            device_asset_id: r.device_asset_id,
            device_id: r.device_id,
            asset_type: r.asset_type,
            original_path: r.original_path,
            original_file_name: r.original_file_name,
            checksum: r.checksum,
            thumbhash: r.thumbhash,
            duration: r.duration,
            visibility: r.visibility,
            is_favorite: r.is_favorite,
            is_offline: r.is_offline,
            library_id: r.library_id,
            live_photo_video_id: r.live_photo_video_id,
            duplicate_id: r.duplicate_id,
            file_created_at: r.file_created_at,
            file_modified_at: r.file_modified_at,
            local_date_time: r.local_date_time,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
            // Columns that were not selected stay `None`; no empty-list defaulting here.
            owner: r.owner.map(|j| j.0),
            exif_info: r.exif_info.map(|j| j.0),
            tags: r.tags.map(|j| j.0),
            faces: r.faces.map(|j| j.0),
            stack: r.stack.map(|j| j.0),
        }
    }
}
