use crate::api::assets::interfaces::{
    AssetMapOptions, AssetResponse, AssetResponseDto, AssetStackResponseDto,
    SanitizedAssetResponseDto,
};
use crate::api::exif::service::map_exif;
use crate::api::people::interfaces::{AssetFaceWithoutPersonResponseDto, PersonWithFacesResponseDto};
use crate::api::people::service::{map_face_without_person, map_person};
use crate::api::tags::service::map_tag;
use crate::api::users::service::map_user;
use crate::utils::{ZERO_DURATION, bytes_to_base64, mime_type_for};
use common_types::{Asset, AssetFace, AssetVisibility};
use std::collections::HashMap;
use tracing::trace;

/// Maps an asset row to its API response.
///
/// With `strip_metadata` only the sanitized projection is produced. Otherwise the full record is
/// returned; `is_favorite` is only ever reported to the owner of the asset.
#[must_use]
pub fn map_asset(asset: &Asset, options: AssetMapOptions<'_>) -> AssetResponse {
    if options.strip_metadata {
        return AssetResponse::Sanitized(sanitized_fields(asset, false));
    }

    let is_owner = options.auth.is_some_and(|auth| auth.is_user(&asset.owner_id));
    if asset.is_favorite && !is_owner {
        trace!("Hiding favorite status of asset {} from non-owner", asset.id);
    }

    AssetResponse::Full(Box::new(AssetResponseDto {
        sanitized: sanitized_fields(asset, true),
        created_at: asset.created_at,
        device_asset_id: asset.device_asset_id.clone(),
        device_id: asset.device_id.clone(),
        owner_id: asset.owner_id.clone(),
        owner: asset.owner.as_ref().map(map_user),
        library_id: asset.library_id.clone(),
        original_path: asset.original_path.clone(),
        original_file_name: asset.original_file_name.clone(),
        file_created_at: asset.file_created_at,
        file_modified_at: asset.file_modified_at,
        updated_at: asset.updated_at,
        is_favorite: is_owner && asset.is_favorite,
        is_archived: asset.visibility == AssetVisibility::Archive,
        is_trashed: asset.deleted_at.is_some(),
        is_offline: asset.is_offline,
        visibility: asset.visibility,
        exif_info: asset.exif_info.as_ref().map(map_exif),
        tags: asset
            .tags
            .as_ref()
            .map(|tags| tags.iter().map(map_tag).collect()),
        people: asset.faces.as_deref().map(people_with_faces),
        unassigned_faces: asset.faces.as_deref().map(unassigned_faces),
        checksum: bytes_to_base64(&asset.checksum),
        stack: options.with_stack.then(|| map_stack(asset)),
        duplicate_id: asset.duplicate_id.clone(),
    }))
}

/// The fields shared by both projections. Built in one place so they always agree.
fn sanitized_fields(asset: &Asset, has_metadata: bool) -> SanitizedAssetResponseDto {
    SanitizedAssetResponseDto {
        id: asset.id.clone(),
        asset_type: asset.asset_type,
        thumbhash: asset.thumbhash.as_deref().map(bytes_to_base64),
        original_mime_type: mime_type_for(&asset.original_file_name),
        local_date_time: asset.local_date_time,
        duration: asset
            .duration
            .clone()
            .unwrap_or_else(|| ZERO_DURATION.to_owned()),
        live_photo_video_id: asset.live_photo_video_id.clone(),
        has_metadata,
    }
}

/// Groups face detections by person, in the order each person is first seen.
///
/// Faces without a person are left out; see [`unassigned_faces`].
#[must_use]
pub fn people_with_faces(faces: &[AssetFace]) -> Vec<PersonWithFacesResponseDto> {
    let mut result: Vec<PersonWithFacesResponseDto> = Vec::new();
    let mut index_by_person: HashMap<&str, usize> = HashMap::new();

    for face in faces {
        let Some(person) = &face.person else {
            continue;
        };

        if let Some(&index) = index_by_person.get(person.id.as_str()) {
            result[index].faces.push(map_face_without_person(face));
        } else {
            index_by_person.insert(&person.id, result.len());
            result.push(PersonWithFacesResponseDto {
                person: map_person(person),
                faces: vec![map_face_without_person(face)],
            });
        }
    }

    result
}

/// The faces that are not assigned to any person, in their original order.
#[must_use]
pub fn unassigned_faces(faces: &[AssetFace]) -> Vec<AssetFaceWithoutPersonResponseDto> {
    faces
        .iter()
        .filter(|face| face.person.is_none())
        .map(map_face_without_person)
        .collect()
}

/// Summarizes the stack an asset belongs to, if any.
///
/// Prefers the stored asset count; when the query did not materialize it, the count is the
/// loaded siblings plus the asset itself.
#[must_use]
pub fn map_stack(asset: &Asset) -> Option<AssetStackResponseDto> {
    let stack = asset.stack.as_ref()?;
    let asset_count = stack
        .asset_count
        .unwrap_or_else(|| stack.assets.len() as i64 + 1);

    Some(AssetStackResponseDto {
        id: stack.id.clone(),
        primary_asset_id: stack.primary_asset_id.clone(),
        asset_count,
    })
}
