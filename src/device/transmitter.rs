use crate::domain::IrSignal;
use std::fmt::Debug;
use tracing::info;

/// Emits an IR signal. Returns whether the transmission succeeded.
pub trait Transmitter: Debug + Send + Sync {
    fn transmit(&self, signal: &IrSignal) -> bool;
}

/// Stands in for the IR LED by logging every signal it is asked to send.
#[derive(Debug, Default)]
pub struct LogTransmitter;

impl Transmitter for LogTransmitter {
    fn transmit(&self, signal: &IrSignal) -> bool {
        info!(protocol = %signal.protocol, code = signal.code, bits = signal.bits, "🔴 IR signal sent: {}", signal);
        true
    }
}

#[cfg(test)]
pub use recording::RecordingTransmitter;
