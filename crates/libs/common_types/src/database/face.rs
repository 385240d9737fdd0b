use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maps to the `source_type` Postgres enum: where a face detection came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "source_type", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    MachineLearning,
    Exif,
    Manual,
}

/// Corresponds to the 'person' table.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub thumbnail_path: String,
    pub is_hidden: bool,
    pub is_favorite: bool,
    pub color: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Corresponds to the '`asset_face`' table, optionally with its assigned person joined in.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct AssetFace {
    pub id: String,
    pub asset_id: String,
    pub person_id: Option<String>,
    pub image_width: i32,
    pub image_height: i32,
    pub bounding_box_x1: i32,
    pub bounding_box_y1: i32,
    pub bounding_box_x2: i32,
    pub bounding_box_y2: i32,
    pub source_type: SourceType,
    #[sqlx(skip)]
    #[serde(default)]
    pub person: Option<Person>,
}
