//! The individual business-rule evaluators.
//!
//! Every rule is a total, pure function over its decoded inputs; the ambient
//! instant is passed in explicitly and the remote size check receives the
//! already-fetched size, so evaluating the same record twice at the same
//! instant yields identical results.

use {
    chrono::{DateTime, Utc},
    model::{
        payload::{DailyMessage, FavouriteWeapon, GameMap, PlayerActivity},
        record::BinaryInfo,
        verdict::ErrorCode,
    },
};

pub const WEAPON_TYPE_SWORD: &str = "SWORD";
pub const WEAPON_TYPE_GUN: &str = "GUN";

/// A business constraint a record failed to satisfy. Carried verbatim into
/// the error of a failing verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    pub code: ErrorCode,
    pub message: String,
}

impl Violation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: message.into(),
        }
    }

    fn time_gated(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::TimeGated,
            message: message.into(),
        }
    }
}

/// Every declared field of a map payload must be present and non-empty.
pub fn check_game_map(map: &GameMap) -> Result<(), Violation> {
    require_string("locationId", &map.location_id)?;
    require_string("name", &map.name)?;
    require_integer("totalResources", map.total_resources)?;
    require_integer("totalEnemy", map.total_enemy)
}

/// After field presence, the weapon type must come from the closed set of
/// supported weapons.
pub fn check_favourite_weapon(weapon: &FavouriteWeapon) -> Result<(), Violation> {
    require_string("userId", &weapon.user_id)?;
    require_string("favouriteWeaponType", &weapon.favourite_weapon_type)?;
    require_string("favouriteWeapon", &weapon.favourite_weapon)?;
    if weapon.favourite_weapon_type != WEAPON_TYPE_SWORD
        && weapon.favourite_weapon_type != WEAPON_TYPE_GUN
    {
        return Err(Violation::new("invalid weapon type"));
    }
    Ok(())
}

pub fn check_player_activity(activity: &PlayerActivity) -> Result<(), Violation> {
    require_string("userId", &activity.user_id)?;
    require_string("activity", &activity.activity)
}

/// Daily messages are readable only once their publication instant has
/// passed. Exactly at `available_on` the message is accessible.
pub fn check_daily_message(message: &DailyMessage, now: DateTime<Utc>) -> Result<(), Violation> {
    if now < message.available_on {
        return Err(Violation::time_gated("not accessible yet"));
    }
    Ok(())
}

/// A daily event stage is served only if its binary was refreshed on the
/// current UTC calendar day; the time of day is irrelevant.
pub fn check_daily_event_stage(
    key: &str,
    info: &BinaryInfo,
    now: DateTime<Utc>,
) -> Result<(), Violation> {
    if info.updated_at.date_naive() != now.date_naive() {
        return Err(Violation::new(format!("today's {key} is not ready yet")));
    }
    Ok(())
}

/// Id cards are create-once: only the first stored version may be written.
pub fn check_id_card_version(info: &BinaryInfo) -> Result<(), Violation> {
    if info.version > 1 {
        return Err(Violation::new("id card can only be created once"));
    }
    Ok(())
}

/// The banner size in kilobytes (integer division) must not exceed the
/// configured limit.
pub fn check_event_banner_size(size_in_bytes: u64, max_size_in_kb: u64) -> Result<(), Violation> {
    if size_in_bytes / 1000 > max_size_in_kb {
        return Err(Violation::new(format!(
            "maximum size for event banner is {max_size_in_kb} kB"
        )));
    }
    Ok(())
}

fn require_string(field: &str, value: &str) -> Result<(), Violation> {
    if value.is_empty() {
        return Err(Violation::new(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_integer(field: &str, value: i64) -> Result<(), Violation> {
    if value == 0 {
        return Err(Violation::new(format!("{field} cannot be empty")));
    }
    Ok(())
}
