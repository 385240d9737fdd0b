use chrono::{DateTime, Utc};
use common_types::UserAvatarColor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public profile of a user, as embedded in other responses (e.g. an asset's owner).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_image_path: String,
    pub avatar_color: UserAvatarColor,
    pub profile_changed_at: DateTime<Utc>,
}
