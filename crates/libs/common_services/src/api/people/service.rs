use crate::api::people::interfaces::{AssetFaceWithoutPersonResponseDto, PersonResponseDto};
use common_types::{AssetFace, Person};

#[must_use]
pub fn map_person(person: &Person) -> PersonResponseDto {
    PersonResponseDto {
        id: person.id.clone(),
        name: person.name.clone(),
        birth_date: person.birth_date,
        thumbnail_path: person.thumbnail_path.clone(),
        is_hidden: person.is_hidden,
        is_favorite: person.is_favorite,
        color: person.color.clone(),
        updated_at: person.updated_at,
    }
}

#[must_use]
pub fn map_face_without_person(face: &AssetFace) -> AssetFaceWithoutPersonResponseDto {
    AssetFaceWithoutPersonResponseDto {
        id: face.id.clone(),
        image_width: face.image_width,
        image_height: face.image_height,
        bounding_box_x1: face.bounding_box_x1,
        bounding_box_y1: face.bounding_box_y1,
        bounding_box_x2: face.bounding_box_x2,
        bounding_box_y2: face.bounding_box_y2,
        source_type: face.source_type,
    }
}
