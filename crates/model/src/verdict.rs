//! The pass/fail outcome of validating a single record, plus the batch
//! wrapper returned by bulk hooks.

use {
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::fmt,
};

/// Machine-readable classification of a validation failure.
///
/// The two codes are exhaustive for the current rule set. A future rule
/// introducing a new failure class must allocate a new code instead of
/// reusing these.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    /// A business constraint on the record is not satisfied.
    Validation,
    /// The record exists but is gated until a later time.
    TimeGated,
}

impl ErrorCode {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Validation => 1,
            Self::TimeGated => 2,
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl de::Visitor<'_> for Visitor {
            type Value = ErrorCode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a validation error code (1 or 2)")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value {
                    1 => Ok(ErrorCode::Validation),
                    2 => Ok(ErrorCode::TimeGated),
                    _ => Err(de::Error::custom(format!(
                        "unknown validation error code {value}"
                    ))),
                }
            }
        }

        deserializer.deserialize_u64(Visitor)
    }
}

/// The structured error carried by a failing verdict.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictError {
    pub code: ErrorCode,
    pub message: String,
}

/// The validation outcome for a single record.
///
/// `error` is present if and only if `is_success` is false; the constructors
/// are the only way this type is built, which keeps that invariant by
/// construction. `user_id` is set for player-scoped categories only.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_success: bool,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<VerdictError>,
}

impl Verdict {
    /// A passing verdict echoing the record identity.
    pub fn pass(key: impl Into<String>, user_id: Option<&str>) -> Self {
        Self {
            is_success: true,
            key: key.into(),
            user_id: user_id.map(str::to_owned),
            error: None,
        }
    }

    /// A failing verdict carrying the violated rule's code and message.
    pub fn fail(
        key: impl Into<String>,
        user_id: Option<&str>,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            is_success: false,
            key: key.into(),
            user_id: user_id.map(str::to_owned),
            error: Some(VerdictError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Order-preserving sequence of verdicts for a bulk hook, one per input
/// record.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchVerdict {
    pub validation_results: Vec<Verdict>,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn passing_verdict_omits_absent_fields() {
        let serialized = serde_json::to_value(Verdict::pass("some_key", None)).unwrap();
        assert_eq!(
            serialized,
            json!({
                "isSuccess": true,
                "key": "some_key",
            })
        );
    }

    #[test]
    fn failing_verdict_carries_numeric_code() {
        let verdict = Verdict::fail(
            "profile_daily_msg",
            Some("user-1"),
            ErrorCode::TimeGated,
            "not accessible yet",
        );
        assert_eq!(
            serde_json::to_value(&verdict).unwrap(),
            json!({
                "isSuccess": false,
                "key": "profile_daily_msg",
                "userId": "user-1",
                "error": {
                    "code": 2,
                    "message": "not accessible yet",
                },
            })
        );
    }

    #[test]
    fn error_code_round_trip() {
        for (code, number) in [(ErrorCode::Validation, 1), (ErrorCode::TimeGated, 2)] {
            assert_eq!(serde_json::to_value(code).unwrap(), json!(number));
            assert_eq!(
                serde_json::from_value::<ErrorCode>(json!(number)).unwrap(),
                code
            );
        }
        assert!(serde_json::from_value::<ErrorCode>(json!(3)).is_err());
    }

    #[test]
    fn error_is_present_iff_failed() {
        assert!(Verdict::pass("k", None).error.is_none());
        assert!(
            Verdict::fail("k", None, ErrorCode::Validation, "nope")
                .error
                .is_some()
        );
    }
}
