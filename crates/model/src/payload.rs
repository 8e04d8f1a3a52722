//! Typed shapes the opaque record payloads decode into.
//!
//! All shapes tolerate absent fields: field presence is a business rule, not a
//! decode concern, so `{}` must decode cleanly and fail validation with a
//! message naming the field instead of failing the call.

use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// Map definition stored under `…map` keys of game records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameMap {
    pub location_id: String,
    pub name: String,
    pub total_resources: i64,
    pub total_enemy: i64,
}

/// Weapon preference stored under `…favourite_weapon` keys of player records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FavouriteWeapon {
    pub user_id: String,
    pub favourite_weapon_type: String,
    pub favourite_weapon: String,
}

/// Announcement stored under `…daily_msg` keys of game records. A missing
/// `availableOn` decodes to the Unix epoch, i.e. the message is available.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyMessage {
    pub title: String,
    pub message: String,
    pub available_on: DateTime<Utc>,
}

/// Activity log entry stored under `…player_activity` keys of admin player
/// records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerActivity {
    pub user_id: String,
    pub activity: String,
}
