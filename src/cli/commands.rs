use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dailymax", about = "Daily maximum temperature tracker for weather markets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply an observation to a station's daily maximum
    Observe {
        /// Station ICAO (e.g. KNYC)
        station: String,
        /// Hourly METAR temperature in Celsius
        #[arg(allow_negative_numbers = true)]
        temp_c: f64,
        /// Whole-degree 6-hour maximum in Celsius from the same report
        #[arg(long, allow_negative_numbers = true)]
        six_hour_max: Option<i32>,
        /// Observation time (RFC3339); defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Station's UTC offset in hours, used to detect local-day rollover
        #[arg(
            long,
            default_value = "0",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-12..=14)
        )]
        utc_offset_hours: i32,
    },
    /// Show the current daily maximum for a station
    Status {
        station: String,
        /// Station's UTC offset in hours, used to detect local-day rollover
        #[arg(
            long,
            default_value = "0",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-12..=14)
        )]
        utc_offset_hours: i32,
    },
    /// Rule-adjusted maximum in Fahrenheit
    Adjusted {
        station: String,
        /// Rule type (conservative, aggressive)
        rule_type: String,
        /// Station's UTC offset in hours, used to detect local-day rollover
        #[arg(
            long,
            default_value = "0",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-12..=14)
        )]
        utc_offset_hours: i32,
    },
    /// Clear a station's stored state
    Reset {
        station: String,
    },
}
