use crate::database::asset::Asset;
use serde::{Deserialize, Serialize};

/// Corresponds to the '`asset_stack`' table.
///
/// `asset_count` is only set when the query materialised it; otherwise `assets` holds the loaded
/// siblings of the asset the stack was fetched through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stack {
    pub id: String,
    pub owner_id: String,
    pub primary_asset_id: String,
    #[serde(default)]
    pub asset_count: Option<i64>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}
