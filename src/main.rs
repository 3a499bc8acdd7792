use anyhow::{Context, Result, bail};
use flightwx::airport::CatalogStore;
use flightwx::clock::{SimTime, current_month};
use flightwx::logging::init_logging;
use flightwx::{FlightWxConfig, MetarClient, PositionFix, WeatherService};

const USAGE: &str = "usage: flightwx ICAO [ICAO]\n       flightwx cruise FIX.json";

fn main() -> Result<()> {
    let config = FlightWxConfig::load()?;
    init_logging(&config.logging)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let month = current_month();
    let service = WeatherService::new(MetarClient::new(&config.weather)?);

    let output = match args.as_slice() {
        [command, fix_path] if command == "cruise" => {
            let fix = PositionFix::load(fix_path)
                .with_context(|| format!("Failed to read position fix {fix_path}"))?;
            let catalog = CatalogStore::new(&config.catalog).load()?;
            serde_json::to_value(service.cruise(&fix, &catalog, month)?)?
        }
        [icao] => serde_json::to_value(service.station(icao, month)?)?,
        [origin, destination] => serde_json::to_value(service.route(origin, destination, month)?)?,
        _ => bail!(USAGE),
    };

    let report = serde_json::json!({
        "time": SimTime::now(),
        "weather": output,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
