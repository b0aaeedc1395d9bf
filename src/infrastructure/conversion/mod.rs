pub mod cli_temperature;
