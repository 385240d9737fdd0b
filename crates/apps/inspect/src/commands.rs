use color_eyre::eyre::{Result, WrapErr};
use common_services::api::assets::interfaces::AssetMapOptions;
use common_services::api::assets::service::map_asset;
use common_services::api::auth::interfaces::{AuthDto, AuthUser};
use common_services::api::preferences::service::{
    get_preferences, map_preferences, merge_preferences, parse_preferences_update,
    preferences_partial,
};
use common_types::{Asset, UserMetadataItem, UserMetadataKey};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AssetCommand {
    pub input: PathBuf,
    pub strip_metadata: bool,
    pub with_stack: bool,
    pub viewer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PreferencesCommand {
    pub stored: Option<PathBuf>,
    pub update: Option<PathBuf>,
    pub user_id: String,
}

fn read_json(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("Cannot read {}", path.display()))
}

/// Maps the asset row in `command.input` as seen by `command.viewer`.
pub fn inspect_asset(command: &AssetCommand) -> Result<Value> {
    let asset: Asset = serde_json::from_str(&read_json(&command.input)?)
        .wrap_err("Input is not a valid asset row")?;
    debug!("Loaded asset {} owned by {}", asset.id, asset.owner_id);

    let auth = command.viewer.as_ref().map(|id| AuthDto {
        user: AuthUser { id: id.clone() },
    });

    let response = map_asset(
        &asset,
        AssetMapOptions {
            strip_metadata: command.strip_metadata,
            with_stack: command.with_stack,
            auth: auth.as_ref(),
        },
    );
    Ok(serde_json::to_value(response)?)
}

/// Resolves the stored preferences, applies the update if given, and reports the result along
/// with the partial document that would be stored.
pub fn inspect_preferences(command: &PreferencesCommand) -> Result<Value> {
    let metadata = match &command.stored {
        Some(path) => vec![UserMetadataItem {
            user_id: command.user_id.clone(),
            key: UserMetadataKey::Preferences,
            value: serde_json::from_str(&read_json(path)?)
                .wrap_err("Stored preferences are not valid JSON")?,
        }],
        None => vec![],
    };
    let mut preferences = get_preferences(&metadata);
    let mut avatar_color = None;

    if let Some(path) = &command.update {
        let update = parse_preferences_update(&read_json(path)?)?;
        let merged = merge_preferences(preferences, update);
        preferences = merged.preferences;
        avatar_color = merged.avatar_color;
    }

    let stored = preferences_partial(&preferences)?;
    Ok(json!({
        "preferences": map_preferences(preferences),
        "avatarColor": avatar_color,
        "stored": stored,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use std::fs;

    const ASSET: &str = r#"{
        "id": "asset-1",
        "owner_id": "user-1",
        "device_asset_id": "IMG_0001",
        "device_id": "phone",
        "type": "IMAGE",
        "original_path": "/library/IMG_0001.heic",
        "original_file_name": "IMG_0001.png",
        "checksum": [1, 2, 3, 4],
        "thumbhash": [222, 173, 190, 239],
        "duration": null,
        "visibility": "timeline",
        "is_favorite": true,
        "is_offline": false,
        "library_id": null,
        "live_photo_video_id": null,
        "duplicate_id": null,
        "file_created_at": "2024-05-01T12:00:00Z",
        "file_modified_at": "2024-05-01T12:00:00Z",
        "local_date_time": "2024-05-01T14:00:00Z",
        "created_at": "2024-05-02T08:00:00Z",
        "updated_at": "2024-05-02T08:00:00Z",
        "deleted_at": null
    }"#;

    #[test]
    fn maps_asset_file_for_owner() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("asset.json");
        fs::write(&input, ASSET)?;

        let output = inspect_asset(&AssetCommand {
            input,
            strip_metadata: false,
            with_stack: false,
            viewer: Some("user-1".to_owned()),
        })?;

        assert_eq!(output["isFavorite"], json!(true));
        assert_eq!(output["thumbhash"], json!("3q2+7w=="));
        assert_eq!(output["duration"], json!("0:00:00.00000"));
        assert_eq!(output["originalMimeType"], json!("image/png"));
        assert_eq!(output["checksum"], json!("AQIDBA=="));
        assert!(output.get("tags").is_none());
        Ok(())
    }

    #[test]
    fn strips_asset_metadata() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("asset.json");
        fs::write(&input, ASSET)?;

        let output = inspect_asset(&AssetCommand {
            input,
            strip_metadata: true,
            with_stack: true,
            viewer: None,
        })?;

        assert_eq!(output["hasMetadata"], json!(false));
        assert!(output.get("isFavorite").is_none());
        assert!(output.get("checksum").is_none());
        Ok(())
    }

    #[test]
    fn applies_update_over_stored_preferences() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let stored = dir.path().join("stored.json");
        let update = dir.path().join("update.json");
        fs::write(&stored, r#"{ "ratings": { "enabled": true } }"#)?;
        fs::write(
            &update,
            r#"{ "tags": { "enabled": true }, "avatar": { "color": "blue" } }"#,
        )?;

        let output = inspect_preferences(&PreferencesCommand {
            stored: Some(stored),
            update: Some(update),
            user_id: "user-1".to_owned(),
        })?;

        assert_eq!(output["preferences"]["ratings"]["enabled"], json!(true));
        assert_eq!(output["preferences"]["tags"]["enabled"], json!(true));
        assert_eq!(output["avatarColor"], json!("blue"));
        assert_eq!(
            output["stored"],
            json!({ "ratings": { "enabled": true }, "tags": { "enabled": true } })
        );
        Ok(())
    }

    #[test]
    fn rejects_invalid_update_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let update = dir.path().join("update.json");
        fs::write(&update, r#"{ "download": { "archiveSize": 0 } }"#)?;

        let result = inspect_preferences(&PreferencesCommand {
            stored: None,
            update: Some(update),
            user_id: "user-1".to_owned(),
        });
        assert!(result.is_err());
        Ok(())
    }
}
