use alloy_dyn_abi::DynSolValue;
use bifrost_common::{abi::types::DynSolValueExt, utils::strings::ensure_hex_prefix};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw event log entry as returned by the node's RPC layer.
///
/// Hex fields may arrive with or without a `0x` prefix; [`Self::normalized`]
/// applies the prefix the decoding path requires.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionLog {
    /// The contract that emitted the log, as a hex string.
    pub address: String,

    /// The ABI-encoded payload holding the event's non-indexed parameters,
    /// as a hex string.
    pub data: String,

    /// Zero to four 32-byte indexed log arguments, as hex strings. The first
    /// topic is the hash of the event signature, unless the event was
    /// declared anonymous.
    pub topics: Vec<String>,
}

impl TransactionLog {
    /// Returns a copy with the `0x` prefix applied to the address, the data,
    /// and every topic independently. The ABI decoding path rejects
    /// unprefixed hex input.
    pub fn normalized(&self) -> Self {
        Self {
            address: ensure_hex_prefix(&self.address),
            data: ensure_hex_prefix(&self.data),
            topics: self.topics.iter().map(|topic| ensure_hex_prefix(topic)).collect(),
        }
    }
}

/// A decoded event log record: the matched event's name plus one decoded
/// value per declared event parameter.
///
/// Parameters keep their declared order. The JSON rendering stores the event
/// name under the reserved key `type`; `type` is a reserved keyword in the
/// contract language, so no event parameter can shadow it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLog {
    /// The name of the matched event descriptor.
    pub event: String,

    /// Decoded parameter values, keyed by declared parameter name.
    pub params: Vec<(String, DynSolValue)>,
}

impl DecodedLog {
    /// Looks up a decoded parameter value by its declared name.
    pub fn get(&self, name: &str) -> Option<&DynSolValue> {
        self.params.iter().find(|(param, _)| param == name).map(|(_, value)| value)
    }

    /// Renders the record as a JSON map: the `type` key holding the event
    /// name, plus one key per declared parameter.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.event.clone()));
        for (name, value) in &self.params {
            map.insert(name.clone(), value.serialize());
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn test_normalized_prefixes_every_field() {
        let log = TransactionLog {
            address: "abc123".to_string(),
            data: "".to_string(),
            topics: vec!["deadbeef".to_string()],
        };

        let normalized = log.normalized();
        assert_eq!(normalized.address, "0xabc123");
        assert_eq!(normalized.data, "0x");
        assert_eq!(normalized.topics, vec!["0xdeadbeef".to_string()]);
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let log = TransactionLog {
            address: "0xabc123".to_string(),
            data: "0xff".to_string(),
            topics: vec!["0xdeadbeef".to_string()],
        };

        assert_eq!(log.normalized(), log);
    }

    #[test]
    fn test_deserialize_rpc_shape() {
        let log: TransactionLog = serde_json::from_str(
            r#"{
                "address": "a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "data": "00000000000000000000000000000000000000000000000000000000000003e8",
                "topics": ["ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"]
            }"#,
        )
        .expect("failed to parse log");

        assert_eq!(log.topics.len(), 1);
        assert!(!log.address.starts_with("0x"));
    }

    #[test]
    fn test_decoded_log_get_and_json() {
        let record = DecodedLog {
            event: "Minted".to_string(),
            params: vec![
                ("owner".to_string(), DynSolValue::String("alice".to_string())),
                ("amount".to_string(), DynSolValue::Uint(U256::from(7u64), 256)),
            ],
        };

        assert_eq!(record.get("owner"), Some(&DynSolValue::String("alice".to_string())));
        assert_eq!(record.get("missing"), None);

        let json = record.to_json();
        let object = json.as_object().expect("expected a JSON object");
        assert_eq!(object.len(), 3);
        assert_eq!(object["type"], Value::String("Minted".to_string()));
        assert_eq!(object["owner"], Value::String("alice".to_string()));
        assert_eq!(object["amount"], Value::String("7".to_string()));
    }
}
