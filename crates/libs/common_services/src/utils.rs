use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Duration reported for assets that have none, such as photos.
pub const ZERO_DURATION: &str = "0:00:00.00000";

/// Encodes raw bytes (checksums, thumbhashes) as standard padded base64.
#[must_use]
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Looks up the mime type of a file by its extension. `None` when the extension is unknown.
#[must_use]
pub fn mime_type_for(file_name: &str) -> Option<String> {
    mime_guess::from_path(Path::new(file_name))
        .first()
        .map(|mime| mime.essence_str().to_owned())
}
