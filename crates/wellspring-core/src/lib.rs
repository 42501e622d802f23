pub mod event_bus;
pub mod ports;
pub mod store;
