use crate::api::preferences::error::{PreferencesError, log_error};
use crate::api::preferences::interfaces::{UserPreferencesResponseDto, UserPreferencesUpdateDto};
use common_types::{UserAvatarColor, UserMetadataItem, UserMetadataKey, UserPreferences};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};
use validator::Validate;

/// Result of applying an update: the new preferences, plus the avatar color to store on the user
/// row when the update changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPreferences {
    pub preferences: UserPreferences,
    pub avatar_color: Option<UserAvatarColor>,
}

/// Copies each field that is present in an update section onto the matching preferences section.
macro_rules! apply_present {
    ($section:expr => $target:expr; $($field:ident),+ $(,)?) => {
        if let Some(section) = $section {
            $(
                if let Some(value) = section.$field {
                    $target.$field = value;
                }
            )+
        }
    };
}

#[must_use]
pub fn map_preferences(preferences: UserPreferences) -> UserPreferencesResponseDto {
    UserPreferencesResponseDto {
        albums: preferences.albums,
        folders: preferences.folders,
        memories: preferences.memories,
        people: preferences.people,
        ratings: preferences.ratings,
        shared_links: preferences.shared_links,
        tags: preferences.tags,
        email_notifications: preferences.email_notifications,
        download: preferences.download,
        purchase: preferences.purchase,
        cast: preferences.cast,
    }
}

/// Resolves a user's preferences from their metadata: the stored partial document laid over the
/// defaults. Stored values that cannot be read are dropped one at a time, so each one falls back to
/// its default while the readable values are kept.
#[must_use]
pub fn get_preferences(metadata: &[UserMetadataItem]) -> UserPreferences {
    let Some(stored) = metadata
        .iter()
        .find(|item| item.key == UserMetadataKey::Preferences)
    else {
        return UserPreferences::default();
    };

    match serde_json::from_value::<UserPreferences>(stored.value.clone()) {
        Ok(preferences) => preferences,
        Err(e) => {
            warn!(
                "Stored preferences of user {} are partly unreadable: {}",
                stored.user_id, e
            );
            readable_preferences(&stored.user_id, &stored.value)
        }
    }
}

/// Keeps every stored leaf that deserializes on its own and drops the rest.
fn readable_preferences(user_id: &str, stored: &Value) -> UserPreferences {
    let Value::Object(sections) = stored else {
        warn!("Stored preferences of user {} are not an object, using defaults", user_id);
        return UserPreferences::default();
    };

    let mut readable = Map::new();
    for (section_name, section) in sections {
        let Value::Object(fields) = section else {
            warn!("Preferences -> Dropping section {} of user {}", section_name, user_id);
            continue;
        };
        let mut kept = Map::new();
        for (field_name, value) in fields {
            let single = json!({ section_name: { field_name: value } });
            if serde_json::from_value::<UserPreferences>(single).is_ok() {
                kept.insert(field_name.clone(), value.clone());
            } else {
                warn!(
                    "Preferences -> Dropping {}.{} of user {}",
                    section_name, field_name, user_id
                );
            }
        }
        readable.insert(section_name.clone(), Value::Object(kept));
    }

    serde_json::from_value(Value::Object(readable)).unwrap_or_default()
}

/// Applies a validated update. Fields missing from the update keep their current value.
#[must_use]
pub fn merge_preferences(
    mut preferences: UserPreferences,
    update: UserPreferencesUpdateDto,
) -> MergedPreferences {
    apply_present!(update.albums => preferences.albums; default_asset_order);
    apply_present!(update.folders => preferences.folders; enabled, sidebar_web);
    apply_present!(update.memories => preferences.memories; enabled);
    apply_present!(update.people => preferences.people; enabled, sidebar_web);
    apply_present!(update.ratings => preferences.ratings; enabled);
    apply_present!(update.shared_links => preferences.shared_links; enabled, sidebar_web);
    apply_present!(update.tags => preferences.tags; enabled, sidebar_web);
    apply_present!(
        update.email_notifications => preferences.email_notifications;
        enabled, album_invite, album_update
    );
    apply_present!(update.download => preferences.download; archive_size, include_embedded_videos);
    apply_present!(update.purchase => preferences.purchase; show_support_badge, hide_buy_button_until);
    apply_present!(update.cast => preferences.cast; g_cast_enabled);

    let avatar_color = update.avatar.and_then(|avatar| avatar.color);
    if let Some(color) = avatar_color {
        debug!("Preferences update changes avatar color to {}", color);
    }

    MergedPreferences {
        preferences,
        avatar_color,
    }
}

/// The form preferences are stored in: only the values that differ from the defaults.
pub fn preferences_partial(preferences: &UserPreferences) -> Result<Value, PreferencesError> {
    let current = serde_json::to_value(preferences)?;
    let defaults = serde_json::to_value(UserPreferences::default())?;

    Ok(diff_from_defaults(current, &defaults).unwrap_or_else(|| Value::Object(Map::new())))
}

fn diff_from_defaults(current: Value, defaults: &Value) -> Option<Value> {
    match (current, defaults) {
        (Value::Object(current), Value::Object(defaults)) => {
            let mut partial = Map::new();
            for (key, value) in current {
                let changed = match defaults.get(&key) {
                    Some(default) => diff_from_defaults(value, default),
                    None => Some(value),
                };
                if let Some(changed) = changed {
                    partial.insert(key, changed);
                }
            }
            (!partial.is_empty()).then_some(Value::Object(partial))
        }
        (current, default) => (current != *default).then_some(current),
    }
}

/// Parses and validates a preferences update payload.
pub fn parse_preferences_update(json: &str) -> Result<UserPreferencesUpdateDto, PreferencesError> {
    let result = serde_json::from_str::<UserPreferencesUpdateDto>(json)
        .map_err(PreferencesError::InvalidPayload)
        .and_then(|update| {
            update.validate()?;
            Ok(update)
        });

    if let Err(e) = &result {
        log_error(e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::preferences::interfaces::{
        AvatarUpdate, DownloadUpdate, MemoriesUpdate, PurchaseUpdate,
    };
    use color_eyre::Result;
    use common_types::{AssetOrder, DEFAULT_ARCHIVE_SIZE};
    use serde_json::json;

    fn stored(value: Value) -> Vec<UserMetadataItem> {
        vec![UserMetadataItem {
            user_id: "user-1".to_owned(),
            key: UserMetadataKey::Preferences,
            value,
        }]
    }

    #[test]
    fn defaults_match_documented_values() {
        let defaults = UserPreferences::default();
        assert_eq!(defaults.albums.default_asset_order, AssetOrder::Desc);
        assert!(!defaults.folders.enabled);
        assert!(defaults.memories.enabled);
        assert!(defaults.people.enabled);
        assert!(!defaults.ratings.enabled);
        assert!(defaults.shared_links.enabled);
        assert!(!defaults.tags.enabled);
        assert!(defaults.email_notifications.album_invite);
        assert_eq!(defaults.download.archive_size, DEFAULT_ARCHIVE_SIZE);
        assert!(defaults.purchase.show_support_badge);
        assert!(!defaults.cast.g_cast_enabled);
    }

    #[test]
    fn response_has_every_field() -> Result<()> {
        let value = serde_json::to_value(map_preferences(UserPreferences::default()))?;
        assert_eq!(
            value,
            json!({
                "albums": { "defaultAssetOrder": "desc" },
                "folders": { "enabled": false, "sidebarWeb": false },
                "memories": { "enabled": true },
                "people": { "enabled": true, "sidebarWeb": false },
                "ratings": { "enabled": false },
                "sharedLinks": { "enabled": true, "sidebarWeb": false },
                "tags": { "enabled": false, "sidebarWeb": false },
                "emailNotifications": { "enabled": true, "albumInvite": true, "albumUpdate": true },
                "download": { "archiveSize": 4_294_967_296_i64, "includeEmbeddedVideos": false },
                "purchase": { "showSupportBadge": true, "hideBuyButtonUntil": "2022-02-12T00:00:00.000Z" },
                "cast": { "gCastEnabled": false },
            })
        );
        Ok(())
    }

    #[test]
    fn map_preferences_is_identity() -> Result<()> {
        let mut preferences = UserPreferences::default();
        preferences.ratings.enabled = true;
        preferences.download.archive_size = 1024;

        let before = serde_json::to_value(&preferences)?;
        let after = serde_json::to_value(map_preferences(preferences))?;
        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn empty_update_is_valid_and_changes_nothing() -> Result<()> {
        let update = parse_preferences_update("{}")?;
        let merged = merge_preferences(UserPreferences::default(), update);
        assert_eq!(merged.preferences, UserPreferences::default());
        assert_eq!(merged.avatar_color, None);
        Ok(())
    }

    #[test]
    fn every_field_is_independently_optional() -> Result<()> {
        for payload in [
            json!({ "albums": {} }),
            json!({ "albums": { "defaultAssetOrder": "asc" } }),
            json!({ "folders": { "sidebarWeb": true } }),
            json!({ "memories": { "enabled": false } }),
            json!({ "people": { "enabled": false } }),
            json!({ "ratings": { "enabled": true } }),
            json!({ "sharedLinks": { "sidebarWeb": true } }),
            json!({ "tags": { "enabled": true } }),
            json!({ "avatar": { "color": "pink" } }),
            json!({ "emailNotifications": { "albumUpdate": false } }),
            json!({ "download": { "archiveSize": 1 } }),
            json!({ "download": { "includeEmbeddedVideos": true } }),
            json!({ "purchase": { "hideBuyButtonUntil": "2030-01-01" } }),
            json!({ "purchase": { "showSupportBadge": false } }),
            json!({ "cast": { "gCastEnabled": true } }),
        ] {
            parse_preferences_update(&payload.to_string())?;
        }
        Ok(())
    }

    #[test]
    fn rejects_invalid_values() {
        for payload in [
            json!({ "download": { "archiveSize": 0 } }),
            json!({ "download": { "archiveSize": -10 } }),
            json!({ "download": { "archiveSize": 1.5 } }),
            json!({ "purchase": { "hideBuyButtonUntil": "next tuesday" } }),
            json!({ "purchase": { "hideBuyButtonUntil": "2030-13-01" } }),
            json!({ "purchase": { "hideBuyButtonUntil": "2030-01-01T25:00" } }),
            json!({ "albums": { "defaultAssetOrder": "sideways" } }),
            json!({ "avatar": { "color": "mauve" } }),
            json!({ "memories": { "enabled": "yes" } }),
        ] {
            assert!(
                parse_preferences_update(&payload.to_string()).is_err(),
                "{payload} should be rejected"
            );
        }
    }

    #[test]
    fn reports_range_failure_per_field() {
        let Err(PreferencesError::Validation(errors)) =
            parse_preferences_update(r#"{ "download": { "archiveSize": 0 } }"#)
        else {
            panic!("expected a validation error");
        };
        assert!(errors.errors().contains_key("download"));
    }

    #[test]
    fn accepts_iso_timestamps() -> Result<()> {
        for date in [
            "2030-01-01",
            "20300101",
            "2030-01-01T10:00",
            "2030-01-01T10:00Z",
            "2030-01-01T10:00:00",
            "2030-01-01T10:00:00.000Z",
            "2030-01-01T10:00:00+02:00",
            "2030-01-01T10:00:00+0200",
            "20300101T100000Z",
        ] {
            parse_preferences_update(&json!({ "purchase": { "hideBuyButtonUntil": date } }).to_string())?;
        }
        Ok(())
    }

    #[test]
    fn merge_applies_present_fields_only() {
        let update = UserPreferencesUpdateDto {
            memories: Some(MemoriesUpdate { enabled: Some(false) }),
            download: Some(DownloadUpdate {
                archive_size: Some(2048),
                include_embedded_videos: None,
            }),
            purchase: Some(PurchaseUpdate {
                show_support_badge: None,
                hide_buy_button_until: Some("2030-01-01T00:00:00.000Z".to_owned()),
            }),
            avatar: Some(AvatarUpdate {
                color: Some(UserAvatarColor::Green),
            }),
            ..UserPreferencesUpdateDto::default()
        };

        let merged = merge_preferences(UserPreferences::default(), update);
        let preferences = merged.preferences;
        assert!(!preferences.memories.enabled);
        assert_eq!(preferences.download.archive_size, 2048);
        assert!(!preferences.download.include_embedded_videos);
        assert_eq!(preferences.purchase.hide_buy_button_until, "2030-01-01T00:00:00.000Z");
        assert!(preferences.purchase.show_support_badge);
        assert!(preferences.people.enabled);
        assert_eq!(merged.avatar_color, Some(UserAvatarColor::Green));
    }

    #[test]
    fn get_preferences_without_stored_document_is_default() {
        assert_eq!(get_preferences(&[]), UserPreferences::default());
    }

    #[test]
    fn get_preferences_lays_stored_values_over_defaults() {
        let preferences = get_preferences(&stored(json!({
            "ratings": { "enabled": true },
            "people": { "sidebarWeb": true },
        })));

        assert!(preferences.ratings.enabled);
        assert!(preferences.people.sidebar_web);
        assert!(preferences.people.enabled);
        assert!(preferences.memories.enabled);
    }

    #[test]
    fn get_preferences_ignores_other_metadata() {
        let mut metadata = stored(json!({ "ratings": { "enabled": true } }));
        metadata[0].key = UserMetadataKey::License;
        assert_eq!(get_preferences(&metadata), UserPreferences::default());
    }

    #[test]
    fn get_preferences_drops_only_unreadable_values() {
        let preferences = get_preferences(&stored(json!({
            "ratings": { "enabled": "sure" },
            "tags": { "enabled": true, "sidebarWeb": 3 },
            "albums": { "defaultAssetOrder": "asc" },
            "cast": "on",
        })));

        let mut expected = UserPreferences::default();
        expected.tags.enabled = true;
        expected.albums.default_asset_order = AssetOrder::Asc;
        assert_eq!(preferences, expected);
    }

    #[test]
    fn get_preferences_with_non_object_document_is_default() {
        assert_eq!(get_preferences(&stored(json!([1, 2, 3]))), UserPreferences::default());
    }

    #[test]
    fn partial_only_holds_changed_values() -> Result<()> {
        assert_eq!(preferences_partial(&UserPreferences::default())?, json!({}));

        let mut preferences = UserPreferences::default();
        preferences.tags.enabled = true;
        preferences.download.archive_size = 1024;
        assert_eq!(
            preferences_partial(&preferences)?,
            json!({ "tags": { "enabled": true }, "download": { "archiveSize": 1024 } })
        );
        Ok(())
    }

    #[test]
    fn partial_round_trips_through_get_preferences() -> Result<()> {
        let update = parse_preferences_update(
            r#"{ "folders": { "enabled": true }, "cast": { "gCastEnabled": true } }"#,
        )?;
        let preferences = merge_preferences(UserPreferences::default(), update).preferences;

        let partial = preferences_partial(&preferences)?;
        assert_eq!(get_preferences(&stored(partial)), preferences);
        Ok(())
    }
}
