mod acknowledger;
mod client;
mod endpoints;
mod poller;
mod registrar;

pub use acknowledger::acknowledge;
pub use client::{BackendError, new_client};
pub use endpoints::{EndpointError, Endpoints};
pub use poller::fetch_command;
pub use registrar::register;
