pub mod migrations;
pub mod snapshot_store;
