use crate::device::Transmitter;
use crate::domain::{Command, DEFAULT_BITS, IrSignal, Protocol};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Turns a command into a simulated IR transmission.
///
/// Commands of an unknown or missing type are accepted without transmitting anything, they still count as processed.
/// `raw` signals always go out with the default bit width, whatever `bits` holds.
pub fn dispatch(command: &Command, transmitter: &dyn Transmitter) -> Result<Option<IrSignal>, DispatchError> {
    let Some(protocol) = command.r#type.as_deref().and_then(Protocol::from_tag) else {
        info!(command_id = command.id, "Skipping command of unsupported type {:?}", command.r#type);
        return Ok(None);
    };

    let code = command.code.as_ref().ok_or_else(|| DispatchError::MissingCode {
        command_id: command.id.clone(),
        protocol,
    })?;

    let bits = match protocol {
        Protocol::Raw => DEFAULT_BITS,
        Protocol::Samsung | Protocol::Nec => bit_width(command, protocol)?,
    };

    let signal = IrSignal::new(protocol, code, bits);
    if !transmitter.transmit(&signal) {
        warn!(command_id = command.id, "⚠️ Transmitter failed to send {}", signal);
    }

    Ok(Some(signal))
}

fn bit_width(command: &Command, protocol: Protocol) -> Result<u32, DispatchError> {
    match &command.bits {
        None | Some(Value::Null) => Ok(DEFAULT_BITS),
        Some(value) => value
            .as_u64()
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or_else(|| DispatchError::InvalidBits {
                command_id: command.id.clone(),
                protocol,
                bits: value.to_string(),
            }),
    }
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("{protocol} command '{command_id}' has no code")]
    MissingCode { command_id: String, protocol: Protocol },
    #[error("{protocol} command '{command_id}' has an invalid bit width {bits}")]
    InvalidBits { command_id: String, protocol: Protocol, bits: String },
}
