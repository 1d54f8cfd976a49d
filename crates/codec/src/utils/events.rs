use alloy::primitives::B256;
use alloy_dyn_abi::{DynSolValue, EventExt};
use alloy_json_abi::Event;
use bifrost_common::{
    abi::types::AbiMethod,
    utils::{hex::ToLowerHex, strings::decode_hex},
};
use eyre::eyre;
use hashbrown::HashMap;
use tracing::trace;

use crate::{error::Error, interfaces::TransactionLog};

/// A single log entry decoded against a known event, tagged with the event
/// name so callers can re-associate it with its interface descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    /// Name of the event whose signature hash matched the log's first topic.
    pub event: String,

    /// Decoded parameter values in declared order, keyed by parameter name.
    pub params: Vec<(String, DynSolValue)>,
}

/// Matches raw logs against the events of a contract interface and decodes
/// them with the ABI codec.
///
/// The signature hash table is built once per interface; decoding a log is
/// then one table lookup plus one codec invocation. Logs must already carry
/// `0x`-prefixed hex fields, see [`TransactionLog::normalized`].
#[derive(Debug, Clone)]
pub struct LogDecoder {
    /// event signature hash -> resolved event descriptor
    events: HashMap<B256, Event>,
}

impl LogDecoder {
    /// Builds a decoder over every event declared in the given interface.
    ///
    /// Anonymous events emit no signature topic and are never matched; they
    /// surface as [`Error::MissingEventAbi`] at decode time like any other
    /// unknown log.
    pub fn new(methods: &[AbiMethod]) -> Self {
        let events: HashMap<B256, Event> = methods
            .iter()
            .filter(|method| method.is_event() && !method.anonymous)
            .map(|method| {
                let event = method.to_event();
                (event.selector(), event)
            })
            .collect();

        trace!("built log decoder over {} event(s)", events.len());
        Self { events }
    }

    /// Decodes a single log entry against the known events.
    ///
    /// The first topic selects the event descriptor; the remaining topics
    /// and the data payload are handed to the ABI codec, and the decoded
    /// indexed and non-indexed values are stitched back into declared
    /// parameter order.
    pub fn decode(&self, log: &TransactionLog) -> Result<ParsedLog, Error> {
        let mut topics = Vec::with_capacity(log.topics.len());
        for topic in &log.topics {
            let bytes = decode_hex(topic)?;
            if bytes.len() != 32 {
                return Err(Error::Eyre(eyre!("invalid 32-byte topic: {}", topic)));
            }
            topics.push(B256::from_slice(&bytes));
        }
        let data = decode_hex(&log.data)?;

        let signature = topics
            .first()
            .copied()
            .ok_or_else(|| Error::Eyre(eyre!("log has no signature topic")))?;
        let event = self
            .events
            .get(&signature)
            .ok_or_else(|| Error::MissingEventAbi(signature.to_lower_hex()))?;

        trace!("decoding log with topic {} as event {}", signature.to_lower_hex(), event.name);
        let decoded = event.decode_log_parts(topics.iter().copied(), &data)?;

        // stitch the indexed and non-indexed values back into declared order
        let mut indexed = decoded.indexed.into_iter();
        let mut body = decoded.body.into_iter();
        let mut params = Vec::with_capacity(event.inputs.len());
        for input in &event.inputs {
            let value = if input.indexed { indexed.next() } else { body.next() }.ok_or_else(
                || {
                    Error::Eyre(eyre!(
                        "decoded event {} is missing a value for parameter {}",
                        event.name,
                        input.name
                    ))
                },
            )?;
            params.push((input.name.clone(), value));
        }

        Ok(ParsedLog { event: event.name.clone(), params })
    }

    /// Decodes a batch of log entries. All-or-nothing: the first entry that
    /// matches no known event, or fails to decode, fails the whole batch.
    pub fn decode_batch(&self, logs: &[TransactionLog]) -> Result<Vec<ParsedLog>, Error> {
        logs.iter().map(|log| self.decode(log)).collect()
    }
}
