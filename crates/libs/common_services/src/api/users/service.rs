use crate::api::users::interfaces::UserResponseDto;
use common_types::{User, UserAvatarColor};
use tracing::trace;

/// Maps a user row to its public profile.
///
/// Users that never picked an avatar color get one derived from their email address.
#[must_use]
pub fn map_user(user: &User) -> UserResponseDto {
    let avatar_color = user.avatar_color.unwrap_or_else(|| {
        trace!("User {} has no avatar color, deriving it from email", user.id);
        avatar_color_from_email(&user.email)
    });

    UserResponseDto {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        profile_image_path: user.profile_image_path.clone(),
        avatar_color,
        profile_changed_at: user.profile_changed_at,
    }
}

/// Picks a stable avatar color: sum of the email's code points, modulo the number of colors.
#[must_use]
pub fn avatar_color_from_email(email: &str) -> UserAvatarColor {
    let colors = UserAvatarColor::ALL;
    let sum: u64 = email.chars().map(|c| u64::from(u32::from(c))).sum();
    let index = usize::try_from(sum % colors.len() as u64).unwrap_or_default();
    colors[index]
}
