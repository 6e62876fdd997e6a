mod command;
mod command_id_deserializer;
mod command_type_deserializer;
mod ir_signal;

pub use command::Command;
pub use ir_signal::{DEFAULT_BITS, IrSignal, Protocol};
