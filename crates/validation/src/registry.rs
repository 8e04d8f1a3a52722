//! Static rule registry: maps a (record category, lifecycle hook) pair to at
//! most one rule, selected by case-insensitive suffix match on the record
//! key.
//!
//! A key matching no binding passes unconditionally. The registry is an
//! allow-list of exceptions, not a deny-list.

use model::record::{Hook, RecordCategory};

/// Rules that decode and inspect a record's JSON payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayloadRule {
    GameMapStructure,
    DailyMessageWindow,
    FavouriteWeaponChoice,
    PlayerActivityStructure,
}

/// Rules that inspect the metadata of a binary-backed record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryRule {
    EventBannerSize,
    DailyEventStageFreshness,
    IdCardCreateOnce,
}

type Binding<R> = (RecordCategory, Hook, &'static str, R);

// Bindings are evaluated top to bottom; the first suffix match wins.
const PAYLOAD_BINDINGS: &[Binding<PayloadRule>] = &[
    (
        RecordCategory::Game,
        Hook::BeforeWrite,
        "map",
        PayloadRule::GameMapStructure,
    ),
    (
        RecordCategory::AdminGame,
        Hook::BeforeWrite,
        "map",
        PayloadRule::GameMapStructure,
    ),
    (
        RecordCategory::Game,
        Hook::AfterRead,
        "daily_msg",
        PayloadRule::DailyMessageWindow,
    ),
    (
        RecordCategory::Game,
        Hook::AfterBulkRead,
        "daily_msg",
        PayloadRule::DailyMessageWindow,
    ),
    (
        RecordCategory::AdminGame,
        Hook::AfterRead,
        "daily_msg",
        PayloadRule::DailyMessageWindow,
    ),
    (
        RecordCategory::AdminGame,
        Hook::AfterBulkRead,
        "daily_msg",
        PayloadRule::DailyMessageWindow,
    ),
    (
        RecordCategory::Player,
        Hook::BeforeWrite,
        "favourite_weapon",
        PayloadRule::FavouriteWeaponChoice,
    ),
    (
        RecordCategory::AdminPlayer,
        Hook::BeforeWrite,
        "player_activity",
        PayloadRule::PlayerActivityStructure,
    ),
];

const BINARY_BINDINGS: &[Binding<BinaryRule>] = &[
    (
        RecordCategory::GameBinary,
        Hook::BeforeWrite,
        "event_banner",
        BinaryRule::EventBannerSize,
    ),
    (
        RecordCategory::GameBinary,
        Hook::AfterRead,
        "daily_event_stage",
        BinaryRule::DailyEventStageFreshness,
    ),
    (
        RecordCategory::GameBinary,
        Hook::AfterBulkRead,
        "daily_event_stage",
        BinaryRule::DailyEventStageFreshness,
    ),
    (
        RecordCategory::PlayerBinary,
        Hook::BeforeWrite,
        "id_card",
        BinaryRule::IdCardCreateOnce,
    ),
];

/// The payload rule applying to `key` at the given dispatch point, if any.
pub fn payload_rule(category: RecordCategory, hook: Hook, key: &str) -> Option<PayloadRule> {
    find(PAYLOAD_BINDINGS, category, hook, key)
}

/// The binary-metadata rule applying to `key` at the given dispatch point, if
/// any.
pub fn binary_rule(category: RecordCategory, hook: Hook, key: &str) -> Option<BinaryRule> {
    find(BINARY_BINDINGS, category, hook, key)
}

fn find<R: Copy>(
    bindings: &[Binding<R>],
    category: RecordCategory,
    hook: Hook,
    key: &str,
) -> Option<R> {
    let key = key.to_ascii_lowercase();
    bindings
        .iter()
        .find(|(bound_category, bound_hook, suffix, _)| {
            *bound_category == category && *bound_hook == hook && key.ends_with(suffix)
        })
        .map(|(_, _, _, rule)| *rule)
}
