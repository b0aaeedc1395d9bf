pub mod daily_max;
pub mod max_temp_processor;
