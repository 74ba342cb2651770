pub mod core;
pub mod poller;
