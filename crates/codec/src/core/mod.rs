//! Core conversion routines between application-level call values and the
//! ABI wire encoding.

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use bifrost_common::{
    abi::types::AbiMethod,
    utils::strings::{decode_hex, encode_hex},
};
use eyre::eyre;
use tracing::{debug, trace};

use crate::{
    error::Error,
    interfaces::{DecodedLog, TransactionLog},
    utils::LogDecoder,
};

/// Encodes the arguments for a contract method call.
///
/// Returns the full call payload, 4-byte selector included, as a bare hex
/// string with no `0x` prefix; the transaction layer embeds it directly.
/// Pass an empty slice for methods that take no arguments. Type mismatches
/// and arity errors are raised by the ABI codec and passed through
/// unchanged.
pub fn encode_inputs(method: &AbiMethod, args: &[DynSolValue]) -> Result<String, Error> {
    let function = method.to_function();
    trace!("encoding {} argument(s) for {}", args.len(), function.signature());

    let calldata = function.abi_encode_input(args)?;

    Ok(encode_hex(&calldata))
}

/// Decodes a method's raw return data into one value per declared output.
///
/// `output_data` is the hex payload as returned by the node, accepted with
/// or without a `0x` prefix. Values come back as a real sequence in declared
/// output order, one per declared output type. Decoding errors from the ABI
/// codec are passed through unchanged.
pub fn decode_outputs(method: &AbiMethod, output_data: &str) -> Result<Vec<DynSolValue>, Error> {
    let function = method.to_function();
    trace!("decoding {} output(s) for {}", function.outputs.len(), function.signature());

    let data = decode_hex(output_data)?;
    let values = function.abi_decode_output(&data)?;

    Ok(values)
}

/// Decodes a batch of raw event logs against a contract interface.
///
/// Every hex field of every log is normalized to carry the `0x` prefix
/// before decoding. Each decoded entry is re-associated with its interface
/// descriptor by event name, and the resulting record holds the event name
/// plus every declared input parameter mapped to its decoded value. A log
/// whose event matches no descriptor fails the whole batch with
/// [`Error::MissingEventAbi`].
pub fn decode_logs(
    methods: &[AbiMethod],
    logs: &[TransactionLog],
) -> Result<Vec<DecodedLog>, Error> {
    let decoder = LogDecoder::new(methods);
    debug!("decoding {} log(s)", logs.len());

    // the ABI decoding path rejects unprefixed hex input
    let rawlogs = logs.iter().map(TransactionLog::normalized).collect::<Vec<_>>();

    let parsed = decoder.decode_batch(&rawlogs)?;

    parsed
        .into_iter()
        .map(|log| {
            let method = methods
                .iter()
                .find(|method| method.name == log.event)
                .ok_or_else(|| Error::MissingEventAbi(log.event.clone()))?;

            // keep only the declared parameters, keyed by the descriptor's
            // input names
            let mut params = Vec::with_capacity(method.inputs.len());
            for input in &method.inputs {
                let value = log
                    .params
                    .iter()
                    .find(|(name, _)| *name == input.name)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| {
                        Error::Eyre(eyre!(
                            "decoded event {} has no value for parameter {}",
                            log.event,
                            input.name
                        ))
                    })?;
                params.push((input.name.clone(), value));
            }

            Ok(DecodedLog { event: log.event, params })
        })
        .collect()
}
