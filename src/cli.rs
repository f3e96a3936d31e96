use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sirocco ARIMA point forecaster for daily geophysical series.
#[derive(Parser)]
#[command(
    name = "sirocco",
    version,
    about = "Point forecasts of daily NASA POWER series via ARIMA order search"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Forecast one parameter at one location for a future date.
    Forecast(ForecastArgs),
    /// Download the history window for a location and save the raw response.
    Fetch(FetchArgs),
}

/// Location and parameter shared by both subcommands.
#[derive(clap::Args)]
pub struct LocationArgs {
    /// Latitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// POWER parameter identifier, e.g. RH2M.
    #[arg(short, long)]
    pub parameter: String,

    /// Path to TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Target date, YYYYMMDD or YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Read a saved POWER response instead of calling the API.
    #[arg(short, long)]
    pub series: Option<PathBuf>,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Where to write the raw JSON response.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_forecast_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "sirocco", "-vv", "forecast", "--lat", "41.9", "--lon", "-3.7", "-p", "RH2M",
            "--date", "20250501",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Forecast(args) => {
                assert_eq!(args.location.lon, -3.7);
                assert_eq!(args.date, "20250501");
                assert!(args.series.is_none());
            }
            Command::Fetch(_) => panic!("expected forecast"),
        }
    }
}
