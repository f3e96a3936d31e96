use anyhow::{Context, Result};
use tracing::{info, info_span};

use sirocco_forecast::{Engine, ForecastRequest, handle_request};
use sirocco_io::{FileSource, PowerClient, SeriesSource};

use crate::cli::ForecastArgs;
use crate::config::SiroccoConfig;
use crate::convert;

/// Run one forecast and print the JSON response on stdout.
pub fn run(args: ForecastArgs) -> Result<()> {
    let config = SiroccoConfig::load(args.location.config.as_deref())?;
    let engine_cfg = convert::build_engine_config(&config.history, &config.search)?;
    let engine = Engine::new(engine_cfg).context("invalid engine configuration")?;

    let source: Box<dyn SeriesSource> = match &args.series {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let power_cfg = convert::build_power_config(&config.source)?;
            Box::new(PowerClient::new(power_cfg).context("failed to build POWER client")?)
        }
    };

    let request = ForecastRequest {
        latitude: args.location.lat,
        longitude: args.location.lon,
        parameter: args.location.parameter,
        forecast_date: args.date,
    };

    let _span = info_span!(
        "forecast",
        parameter = %request.parameter,
        date = %request.forecast_date
    )
    .entered();

    let response = handle_request(&engine, source.as_ref(), &request)
        .with_context(|| format!("forecast failed for {}", request.parameter))?;
    info!(
        value = response.predicted_value,
        order = %response.arima_order,
        aic = response.aic,
        "forecast complete"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("failed to serialise response")?;
    println!("{json}");
    Ok(())
}
