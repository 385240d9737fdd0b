use thiserror::Error;
use tracing::warn;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Invalid preferences payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Invalid preferences: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Could not serialize preferences: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub fn log_error(error: &PreferencesError) {
    match error {
        PreferencesError::InvalidPayload(e) => warn!("Preferences -> Malformed payload: {}", e),
        PreferencesError::Validation(errors) => {
            for (field, _) in errors.errors() {
                warn!("Preferences -> Invalid field: {}", field);
            }
        }
        PreferencesError::Serialization(e) => warn!("Preferences -> Serialization failed: {}", e),
    }
}
