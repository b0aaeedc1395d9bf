pub mod config;
pub mod conversion;
pub mod logging;
pub mod sqlite;
