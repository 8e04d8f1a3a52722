//! The record shapes the storage layer hands to validation, together with the
//! category and lifecycle-hook enumerations that drive rule dispatch.

use {
    crate::bytes_hex,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    url::Url,
};

/// The closed set of record kinds the cloud-save store distinguishes.
///
/// The category decides which rules are reachable for a record and whether its
/// verdict carries a user id.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RecordCategory {
    Game,
    Player,
    AdminGame,
    AdminPlayer,
    GameBinary,
    PlayerBinary,
}

/// A named interception point in the record lifecycle at which validation
/// runs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Hook {
    BeforeWrite,
    AfterRead,
    AfterBulkRead,
}

/// A game-scoped record. Admin game records use the same wire shape; the
/// category is implied by the hook they arrive through.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub key: String,
    #[serde(with = "bytes_hex")]
    pub payload: Vec<u8>,
}

/// A player-scoped record. Admin player records use the same wire shape.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub key: String,
    pub user_id: String,
    #[serde(with = "bytes_hex")]
    pub payload: Vec<u8>,
}

/// Metadata of the remote binary a binary-backed record points at. The binary
/// content itself never passes through validation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryInfo {
    pub url: Url,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

/// A game-scoped record backed by a remote binary.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBinaryRecord {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_info: Option<BinaryInfo>,
}

/// A player-scoped record backed by a remote binary.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBinaryRecord {
    pub key: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_info: Option<BinaryInfo>,
}

/// Request body of the bulk after-read hook for game records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGameRecords {
    pub game_records: Vec<GameRecord>,
}

/// Request body of the bulk after-read hook for player records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPlayerRecords {
    pub player_records: Vec<PlayerRecord>,
}

/// Request body of the bulk after-read hook for game binary records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGameBinaryRecords {
    pub game_binary_records: Vec<GameBinaryRecord>,
}

/// Request body of the bulk after-read hook for player binary records.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPlayerBinaryRecords {
    pub player_binary_records: Vec<PlayerBinaryRecord>,
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::TimeZone, serde_json::json};

    #[test]
    fn game_record_deserialization() {
        let record: GameRecord = serde_json::from_value(json!({
            "key": "profile_map",
            "payload": "0x7b7d",
        }))
        .unwrap();
        assert_eq!(record.key, "profile_map");
        assert_eq!(record.payload, b"{}");
    }

    #[test]
    fn binary_record_deserialization() {
        let record: GameBinaryRecord = serde_json::from_value(json!({
            "key": "event_banner",
            "binaryInfo": {
                "url": "https://cdn.example.com/banner.png",
                "version": 3,
                "updatedAt": "2023-09-01T10:30:00Z",
            },
        }))
        .unwrap();
        let info = record.binary_info.unwrap();
        assert_eq!(info.version, 3);
        assert_eq!(
            info.updated_at,
            Utc.with_ymd_and_hms(2023, 9, 1, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn binary_info_is_optional() {
        let record: PlayerBinaryRecord = serde_json::from_value(json!({
            "key": "player_id_card",
            "userId": "user-1",
        }))
        .unwrap();
        assert_eq!(record.binary_info, None);
    }
}
