use chrono::{FixedOffset, Utc};
use clap::Parser;
use dailymax::cli::commands::{Cli, Commands};
use dailymax::infrastructure::logging::init_logging;
use dailymax::{DailyMaxService, Observation};

fn main() {
    init_logging();
    let cli = Cli::parse();
    let db_path = std::env::var("DAILYMAX_DB").unwrap_or_else(|_| "./dailymax.db".into());

    let service = match DailyMaxService::new(&db_path) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error initializing dailymax: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&service, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(service: &DailyMaxService, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Observe {
            station,
            temp_c,
            six_hour_max,
            at,
            utc_offset_hours,
        } => {
            let observed_at = parse_date(&at)?.unwrap_or_else(Utc::now);
            let offset = utc_offset(utc_offset_hours)?;
            let observation = Observation {
                temp_c,
                six_hour_max_c: six_hour_max,
                observed_at,
            };
            let status = service.observe(&station, &observation, offset)?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::Status {
            station,
            utc_offset_hours,
        } => match service.status(&station, Utc::now(), utc_offset(utc_offset_hours)?)? {
            Some(status) => println!("{}", serde_json::to_string_pretty(&status)?),
            None => println!("No data for {station}"),
        },
        Commands::Adjusted {
            station,
            rule_type,
            utc_offset_hours,
        } => {
            let temp_f = service.adjusted(&station, &rule_type, Utc::now(), utc_offset(utc_offset_hours)?)?;
            println!("{temp_f}");
        }
        Commands::Reset { station } => {
            if service.reset(&station)? {
                println!("Reset {station}");
            } else {
                println!("Nothing stored for {station}");
            }
        }
    }
    Ok(())
}

fn utc_offset(hours: i32) -> Result<FixedOffset, String> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| format!("Invalid UTC offset: {hours}h"))
}

fn parse_date(s: &Option<String>) -> Result<Option<chrono::DateTime<Utc>>, String> {
    match s {
        None => Ok(None),
        Some(s) => chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| format!("Invalid date format: {s}. Use RFC3339")),
    }
}
