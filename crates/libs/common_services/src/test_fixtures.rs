//! Row builders shared by the unit tests.
use chrono::{DateTime, TimeZone, Utc};
use common_types::{
    Asset, AssetFace, AssetType, AssetVisibility, Person, SourceType, Stack, Tag, User,
};

pub fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        created_at: at(),
        updated_at: at(),
        email: format!("{id}@example.com"),
        name: format!("User {id}"),
        is_admin: false,
        avatar_color: None,
        profile_image_path: String::new(),
        profile_changed_at: at(),
    }
}

pub fn tag(id: &str, value: &str) -> Tag {
    Tag {
        id: id.to_owned(),
        value: value.to_owned(),
        created_at: at(),
        updated_at: at(),
        color: None,
        parent_id: None,
    }
}

pub fn person(id: &str, name: &str) -> Person {
    Person {
        id: id.to_owned(),
        owner_id: "user-1".to_owned(),
        name: name.to_owned(),
        birth_date: None,
        thumbnail_path: format!("/thumbs/{id}.jpeg"),
        is_hidden: false,
        is_favorite: false,
        color: None,
        updated_at: at(),
    }
}

pub fn face(id: &str, person: Option<Person>) -> AssetFace {
    AssetFace {
        id: id.to_owned(),
        asset_id: "asset-1".to_owned(),
        person_id: person.as_ref().map(|p| p.id.clone()),
        image_width: 1920,
        image_height: 1080,
        bounding_box_x1: 10,
        bounding_box_y1: 20,
        bounding_box_x2: 110,
        bounding_box_y2: 140,
        source_type: SourceType::MachineLearning,
        person,
    }
}

pub fn stack(asset_count: Option<i64>, siblings: usize) -> Stack {
    Stack {
        id: "stack-1".to_owned(),
        owner_id: "user-1".to_owned(),
        primary_asset_id: "asset-1".to_owned(),
        asset_count,
        assets: (0..siblings)
            .map(|i| asset(&format!("sibling-{i}"), "user-1"))
            .collect(),
    }
}

/// A photo owned by `owner_id` without any associations loaded.
pub fn asset(id: &str, owner_id: &str) -> Asset {
    Asset {
        id: id.to_owned(),
        owner_id: owner_id.to_owned(),
        device_asset_id: format!("device-{id}"),
        device_id: "phone".to_owned(),
        asset_type: AssetType::Image,
        original_path: format!("/library/{id}.jpg"),
        original_file_name: format!("{id}.jpg"),
        checksum: vec![0x01, 0x02, 0x03, 0x04],
        thumbhash: None,
        duration: None,
        visibility: AssetVisibility::Timeline,
        is_favorite: false,
        is_offline: false,
        library_id: None,
        live_photo_video_id: None,
        duplicate_id: None,
        file_created_at: at(),
        file_modified_at: at(),
        local_date_time: at(),
        created_at: at(),
        updated_at: at(),
        deleted_at: None,
        owner: None,
        exif_info: None,
        tags: None,
        faces: None,
        stack: None,
    }
}
