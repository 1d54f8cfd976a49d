//! The contract interface descriptor model.
//!
//! A contract interface definition is a list of [`AbiMethod`] entries, one
//! per callable method or declared event. The model serde round-trips the
//! standard JSON ABI format, and converts into the descriptor types of the
//! underlying ABI codec on demand.

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::{Event, EventParam, Function, Param, StateMutability};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::utils::{hex::ToLowerHex, strings::encode_hex};

/// The kind of an interface entry, as carried by the JSON ABI `type` field.
/// Entries with no `type` field default to `function`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbiKind {
    /// A callable contract method.
    #[default]
    Function,
    /// The contract constructor.
    Constructor,
    /// An event declaration.
    Event,
    /// The fallback method.
    Fallback,
    /// The receive method.
    Receive,
    /// A custom error declaration.
    Error,
}

/// A named, typed parameter of a method or event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbiParam {
    /// The parameter name. May be empty for unnamed parameters.
    #[serde(default)]
    pub name: String,

    /// The canonical type string, e.g. `uint256` or `tuple`.
    #[serde(rename = "type")]
    pub ty: String,

    /// Whether the parameter is stored as an indexed event topic rather than
    /// in the event's data payload. Only meaningful on event inputs.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub indexed: bool,

    /// Nested members for `tuple` types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<AbiParam>,
}

impl AbiParam {
    /// Builds the codec's parameter descriptor.
    pub fn to_param(&self) -> Param {
        Param {
            ty: self.ty.clone(),
            name: self.name.clone(),
            components: self.components.iter().map(Self::to_param).collect(),
            internal_type: None,
        }
    }

    /// Builds the codec's event parameter descriptor, carrying the indexed
    /// flag.
    pub fn to_event_param(&self) -> EventParam {
        EventParam {
            ty: self.ty.clone(),
            name: self.name.clone(),
            indexed: self.indexed,
            components: self.components.iter().map(Self::to_param).collect(),
            internal_type: None,
        }
    }
}

/// A single entry of a contract interface definition.
///
/// One descriptor covers both callable methods (with `inputs` and `outputs`)
/// and event declarations (with `inputs` only, some of them indexed). The
/// descriptor is immutable and supplied by the caller, typically
/// deserialized from the interface JSON produced by the contract compiler.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbiMethod {
    /// The method or event name.
    #[serde(default)]
    pub name: String,

    /// The kind of the entry.
    #[serde(rename = "type", default)]
    pub kind: AbiKind,

    /// Ordered, named, typed inputs. For events, these are the declared
    /// event parameters.
    #[serde(default)]
    pub inputs: Vec<AbiParam>,

    /// Ordered, named, typed outputs. Empty for events.
    #[serde(default)]
    pub outputs: Vec<AbiParam>,

    /// Whether the method promises not to modify state.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub constant: bool,

    /// Whether the method accepts value transfers.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub payable: bool,

    /// Whether the event was declared anonymous. Anonymous events emit no
    /// signature topic and cannot be matched back to their descriptor.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub anonymous: bool,
}

impl AbiMethod {
    /// Whether this entry declares an event.
    pub fn is_event(&self) -> bool {
        self.kind == AbiKind::Event
    }

    /// Builds the codec's function descriptor for this entry.
    pub fn to_function(&self) -> Function {
        Function {
            name: self.name.clone(),
            inputs: self.inputs.iter().map(AbiParam::to_param).collect(),
            outputs: self.outputs.iter().map(AbiParam::to_param).collect(),
            state_mutability: if self.payable {
                StateMutability::Payable
            } else if self.constant {
                StateMutability::View
            } else {
                StateMutability::NonPayable
            },
        }
    }

    /// Builds the codec's event descriptor for this entry.
    pub fn to_event(&self) -> Event {
        Event {
            name: self.name.clone(),
            inputs: self.inputs.iter().map(AbiParam::to_event_param).collect(),
            anonymous: self.anonymous,
        }
    }

    /// The canonical signature of this entry, e.g.
    /// `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        if self.is_event() {
            self.to_event().signature()
        } else {
            self.to_function().signature()
        }
    }
}

/// Deserializes a full contract interface definition (a JSON array of
/// descriptor entries).
///
/// ```
/// use bifrost_common::abi::types::parse_interface;
///
/// let interface = parse_interface(r#"[{"name":"ping","type":"function","inputs":[],"outputs":[]}]"#)
///     .expect("failed to parse interface");
/// assert_eq!(interface.len(), 1);
/// assert_eq!(interface[0].name, "ping");
/// ```
pub fn parse_interface(json: &str) -> Result<Vec<AbiMethod>> {
    let methods: Vec<AbiMethod> = serde_json::from_str(json)
        .map_err(|e| eyre!("failed to parse contract interface: {}", e))?;
    trace!("parsed contract interface with {} entries", methods.len());
    Ok(methods)
}

/// An extension on [`DynSolValue`] which renders decoded values as JSON.
pub trait DynSolValueExt {
    /// Serializes the value to a [`serde_json::Value`]. Addresses and byte
    /// blobs render as `0x` hex strings; integers render as decimal strings
    /// to avoid JSON number overflow.
    fn serialize(&self) -> Value;
}

impl DynSolValueExt for DynSolValue {
    fn serialize(&self) -> Value {
        match self {
            DynSolValue::Address(addr) => Value::String(addr.to_lower_hex()),
            DynSolValue::Bool(b) => Value::Bool(*b),
            DynSolValue::String(s) => Value::String(s.to_owned()),
            DynSolValue::Bytes(b) => Value::String(b.to_lower_hex()),
            DynSolValue::FixedBytes(word, size) => {
                Value::String(format!("0x{}", encode_hex(&word[..*size])))
            }
            DynSolValue::Uint(u, _) => Value::String(u.to_string()),
            DynSolValue::Int(i, _) => Value::String(i.to_string()),
            DynSolValue::Array(arr) | DynSolValue::FixedArray(arr) => {
                Value::Array(arr.iter().map(|v| v.serialize()).collect())
            }
            DynSolValue::Tuple(t) => {
                let mut map = Map::new();
                for (i, v) in t.iter().enumerate() {
                    map.insert(format!("component{i}"), v.serialize());
                }
                Value::Object(map)
            }
            _ => Value::Null,
        }
    }
}
