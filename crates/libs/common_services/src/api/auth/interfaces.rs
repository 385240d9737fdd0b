use serde::{Deserialize, Serialize};

/// The authenticated caller, as resolved by the auth layer in front of these services.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthDto {
    pub user: AuthUser,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
}

impl AuthDto {
    #[must_use]
    pub fn is_user(&self, user_id: &str) -> bool {
        self.user.id == user_id
    }
}
