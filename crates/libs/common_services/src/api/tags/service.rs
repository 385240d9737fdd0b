use crate::api::tags::interfaces::TagResponseDto;
use common_types::Tag;

#[must_use]
pub fn map_tag(tag: &Tag) -> TagResponseDto {
    let name = tag.value.rsplit('/').next().unwrap_or(&tag.value).to_owned();

    TagResponseDto {
        id: tag.id.clone(),
        parent_id: tag.parent_id.clone(),
        name,
        value: tag.value.clone(),
        created_at: tag.created_at,
        updated_at: tag.updated_at,
        color: tag.color.clone(),
    }
}
