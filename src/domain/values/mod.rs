pub mod confidence;
pub mod observation_source;
pub mod precision;
pub mod rule_type;
