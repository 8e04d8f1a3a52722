//! Serde helpers for serializing opaque byte payloads as `0x`-prefixed hex
//! strings in JSON bodies.

use {
    serde::{Deserialize, Deserializer, Serializer, de},
    std::borrow::Cow,
};

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Cow::<str>::deserialize(deserializer)?;
    let s = s
        .strip_prefix("0x")
        .ok_or_else(|| de::Error::custom("payload is missing \"0x\" prefix"))?;
    hex::decode(s)
        .map_err(|err| de::Error::custom(format!("failed to decode {s:?} as hex: {err}")))
}

#[cfg(test)]
mod tests {
    use {serde::Serialize, serde_json::json};

    #[derive(Debug, PartialEq, serde::Deserialize, Serialize)]
    struct S {
        #[serde(with = "super")]
        b: Vec<u8>,
    }

    #[test]
    fn serialization() {
        let orig = S { b: vec![0, 1, 2] };
        let serialized = serde_json::to_value(&orig).unwrap();
        let expected = json!({ "b": "0x000102" });
        assert_eq!(serialized, expected);
        let deserialized: S = serde_json::from_value(expected).unwrap();
        assert_eq!(orig, deserialized);
    }

    #[test]
    fn missing_prefix_is_rejected() {
        assert!(serde_json::from_value::<S>(json!({ "b": "000102" })).is_err());
    }

    #[test]
    fn empty_payload() {
        let deserialized: S = serde_json::from_value(json!({ "b": "0x" })).unwrap();
        assert_eq!(deserialized, S { b: vec![] });
    }
}
