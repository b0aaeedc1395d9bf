pub mod daily_max_result;
pub mod metar_config;
pub mod raw_state;
pub mod snapshot;
