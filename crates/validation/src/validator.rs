//! The dispatch facade invoked by the transport layer: one entry point per
//! (lifecycle hook × record category), each binding a category to its
//! decoder + rule + verdict pipeline.

use {
    crate::{
        registry::{self, BinaryRule, PayloadRule},
        rules,
        size_fetching::{BinarySizeFetching, SizeFetchError},
    },
    chrono::{DateTime, Utc},
    model::{
        record::{
            BinaryInfo, GameBinaryRecord, GameRecord, Hook, PlayerBinaryRecord, PlayerRecord,
            RecordCategory,
        },
        verdict::Verdict,
    },
    serde::de::DeserializeOwned,
    std::sync::Arc,
};

/// Operational failures. The call produced no verdict and the caller must
/// treat the outcome as "unable to determine", not as "denied".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed payload for record {key:?}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to determine size of remote binary")]
    SizeFetch(#[from] SizeFetchError),
}

/// Limits injected into the rules that enforce them.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub max_event_banner_size_in_kb: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_event_banner_size_in_kb: 100,
        }
    }
}

/// Validates cloud-save records before writes and after reads.
///
/// Stateless apart from configuration. Every method looks up the rule
/// applying to the record's key, evaluates it and returns a verdict:
/// business-rule failures are `Ok` verdicts with `is_success == false`, while
/// `Err` is reserved for the operational channel (undecodable payloads,
/// remote metadata faults).
pub struct RecordValidator {
    limits: Limits,
    size_fetcher: Arc<dyn BinarySizeFetching>,
}

impl RecordValidator {
    pub fn new(limits: Limits, size_fetcher: Arc<dyn BinarySizeFetching>) -> Self {
        Self {
            limits,
            size_fetcher,
        }
    }

    pub fn before_write_game_record(&self, record: &GameRecord) -> Result<Verdict, Error> {
        self.game_record_verdict(RecordCategory::Game, Hook::BeforeWrite, record, Utc::now())
    }

    pub fn after_read_game_record(&self, record: &GameRecord) -> Result<Verdict, Error> {
        self.game_record_verdict(RecordCategory::Game, Hook::AfterRead, record, Utc::now())
    }

    pub fn after_bulk_read_game_record(
        &self,
        records: &[GameRecord],
    ) -> Result<Vec<Verdict>, Error> {
        let now = Utc::now();
        records
            .iter()
            .map(|record| {
                self.game_record_verdict(RecordCategory::Game, Hook::AfterBulkRead, record, now)
            })
            .collect()
    }

    pub fn before_write_player_record(&self, record: &PlayerRecord) -> Result<Verdict, Error> {
        self.player_record_verdict(RecordCategory::Player, Hook::BeforeWrite, record, Utc::now())
    }

    pub fn after_read_player_record(&self, record: &PlayerRecord) -> Result<Verdict, Error> {
        self.player_record_verdict(RecordCategory::Player, Hook::AfterRead, record, Utc::now())
    }

    pub fn after_bulk_read_player_record(
        &self,
        records: &[PlayerRecord],
    ) -> Result<Vec<Verdict>, Error> {
        let now = Utc::now();
        records
            .iter()
            .map(|record| {
                self.player_record_verdict(RecordCategory::Player, Hook::AfterBulkRead, record, now)
            })
            .collect()
    }

    pub fn before_write_admin_game_record(&self, record: &GameRecord) -> Result<Verdict, Error> {
        self.game_record_verdict(
            RecordCategory::AdminGame,
            Hook::BeforeWrite,
            record,
            Utc::now(),
        )
    }

    pub fn before_write_admin_player_record(
        &self,
        record: &PlayerRecord,
    ) -> Result<Verdict, Error> {
        self.player_record_verdict(
            RecordCategory::AdminPlayer,
            Hook::BeforeWrite,
            record,
            Utc::now(),
        )
    }

    pub async fn before_write_game_binary_record(
        &self,
        record: &GameBinaryRecord,
    ) -> Result<Verdict, Error> {
        self.game_binary_verdict(Hook::BeforeWrite, record, Utc::now())
            .await
    }

    pub async fn after_read_game_binary_record(
        &self,
        record: &GameBinaryRecord,
    ) -> Result<Verdict, Error> {
        self.game_binary_verdict(Hook::AfterRead, record, Utc::now())
            .await
    }

    pub async fn after_bulk_read_game_binary_record(
        &self,
        records: &[GameBinaryRecord],
    ) -> Result<Vec<Verdict>, Error> {
        let now = Utc::now();
        let mut verdicts = Vec::with_capacity(records.len());
        for record in records {
            verdicts.push(
                self.game_binary_verdict(Hook::AfterBulkRead, record, now)
                    .await?,
            );
        }
        Ok(verdicts)
    }

    pub async fn before_write_player_binary_record(
        &self,
        record: &PlayerBinaryRecord,
    ) -> Result<Verdict, Error> {
        self.player_binary_verdict(Hook::BeforeWrite, record, Utc::now())
            .await
    }

    pub async fn after_read_player_binary_record(
        &self,
        record: &PlayerBinaryRecord,
    ) -> Result<Verdict, Error> {
        self.player_binary_verdict(Hook::AfterRead, record, Utc::now())
            .await
    }

    pub async fn after_bulk_read_player_binary_record(
        &self,
        records: &[PlayerBinaryRecord],
    ) -> Result<Vec<Verdict>, Error> {
        let now = Utc::now();
        let mut verdicts = Vec::with_capacity(records.len());
        for record in records {
            verdicts.push(
                self.player_binary_verdict(Hook::AfterBulkRead, record, now)
                    .await?,
            );
        }
        Ok(verdicts)
    }

    fn game_record_verdict(
        &self,
        category: RecordCategory,
        hook: Hook,
        record: &GameRecord,
        now: DateTime<Utc>,
    ) -> Result<Verdict, Error> {
        self.payload_verdict(category, hook, &record.key, &record.payload, None, now)
    }

    fn player_record_verdict(
        &self,
        category: RecordCategory,
        hook: Hook,
        record: &PlayerRecord,
        now: DateTime<Utc>,
    ) -> Result<Verdict, Error> {
        self.payload_verdict(
            category,
            hook,
            &record.key,
            &record.payload,
            Some(&record.user_id),
            now,
        )
    }

    fn payload_verdict(
        &self,
        category: RecordCategory,
        hook: Hook,
        key: &str,
        payload: &[u8],
        user_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Verdict, Error> {
        let Some(rule) = registry::payload_rule(category, hook, key) else {
            return Ok(Verdict::pass(key, user_id));
        };
        let checked = match rule {
            PayloadRule::GameMapStructure => rules::check_game_map(&decode(key, payload)?),
            PayloadRule::DailyMessageWindow => {
                rules::check_daily_message(&decode(key, payload)?, now)
            }
            PayloadRule::FavouriteWeaponChoice => {
                rules::check_favourite_weapon(&decode(key, payload)?)
            }
            PayloadRule::PlayerActivityStructure => {
                rules::check_player_activity(&decode(key, payload)?)
            }
        };
        Ok(verdict(key, user_id, checked))
    }

    async fn game_binary_verdict(
        &self,
        hook: Hook,
        record: &GameBinaryRecord,
        now: DateTime<Utc>,
    ) -> Result<Verdict, Error> {
        self.binary_verdict(
            RecordCategory::GameBinary,
            hook,
            &record.key,
            None,
            record.binary_info.as_ref(),
            now,
        )
        .await
    }

    async fn player_binary_verdict(
        &self,
        hook: Hook,
        record: &PlayerBinaryRecord,
        now: DateTime<Utc>,
    ) -> Result<Verdict, Error> {
        self.binary_verdict(
            RecordCategory::PlayerBinary,
            hook,
            &record.key,
            Some(&record.user_id),
            record.binary_info.as_ref(),
            now,
        )
        .await
    }

    async fn binary_verdict(
        &self,
        category: RecordCategory,
        hook: Hook,
        key: &str,
        user_id: Option<&str>,
        info: Option<&BinaryInfo>,
        now: DateTime<Utc>,
    ) -> Result<Verdict, Error> {
        let rule = registry::binary_rule(category, hook, key);
        // Records without binary metadata have nothing to check.
        let Some((rule, info)) = rule.zip(info) else {
            return Ok(Verdict::pass(key, user_id));
        };
        let checked = match rule {
            BinaryRule::EventBannerSize => {
                let size = self.size_fetcher.fetch_size(&info.url).await?;
                rules::check_event_banner_size(size, self.limits.max_event_banner_size_in_kb)
            }
            BinaryRule::DailyEventStageFreshness => rules::check_daily_event_stage(key, info, now),
            BinaryRule::IdCardCreateOnce => rules::check_id_card_version(info),
        };
        Ok(verdict(key, user_id, checked))
    }
}

fn verdict(key: &str, user_id: Option<&str>, checked: Result<(), rules::Violation>) -> Verdict {
    match checked {
        Ok(()) => Verdict::pass(key, user_id),
        Err(violation) => Verdict::fail(key, user_id, violation.code, violation.message),
    }
}

fn decode<T: DeserializeOwned>(key: &str, payload: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(payload).map_err(|source| Error::Decode {
        key: key.to_owned(),
        source,
    })
}
