pub mod snapshot_store;
pub mod temperature_converter;
