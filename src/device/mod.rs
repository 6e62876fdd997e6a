mod dispatcher;
mod shutdown;
mod simulator;
mod transmitter;

pub use dispatcher::dispatch;
pub use shutdown::listen_for_shutdown;
pub use simulator::Simulator;
pub use transmitter::{LogTransmitter, Transmitter};
