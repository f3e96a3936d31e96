use anyhow::{Context, Result};
use tracing::info;

use sirocco_io::{PowerClient, SeriesQuery, write_response};

use crate::cli::FetchArgs;
use crate::config::SiroccoConfig;
use crate::convert;

/// Download the configured history window and save the raw response.
pub fn run(args: FetchArgs) -> Result<()> {
    let config = SiroccoConfig::load(args.location.config.as_deref())?;
    let window = convert::build_history_window(&config.history)?;
    let power_cfg = convert::build_power_config(&config.source)?;

    let query = SeriesQuery::new(
        args.location.lat,
        args.location.lon,
        args.location.parameter.as_str(),
        window,
    )
    .context("invalid location or parameter")?;

    let client = PowerClient::new(power_cfg).context("failed to build POWER client")?;
    info!(url = %client.request_url(&query)?, "fetching history");
    let body = client
        .fetch_raw(&query)
        .with_context(|| format!("failed to fetch {}", query.parameter()))?;

    write_response(&args.output, &body)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
