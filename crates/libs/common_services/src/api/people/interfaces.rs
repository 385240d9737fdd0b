use chrono::{DateTime, NaiveDate, Utc};
use common_types::SourceType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponseDto {
    pub id: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub thumbnail_path: String,
    pub is_hidden: bool,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A person recognized in an asset, together with every face of theirs found in it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonWithFacesResponseDto {
    #[serde(flatten)]
    pub person: PersonResponseDto,
    pub faces: Vec<AssetFaceWithoutPersonResponseDto>,
}

/// A face detection without its person, bounding box in pixels of an `image_width`x`image_height` image.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetFaceWithoutPersonResponseDto {
    pub id: String,
    pub image_width: i32,
    pub image_height: i32,
    pub bounding_box_x1: i32,
    pub bounding_box_y1: i32,
    pub bounding_box_x2: i32,
    pub bounding_box_y2: i32,
    pub source_type: SourceType,
}
