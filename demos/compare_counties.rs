//! Compares two Kenyan counties and prints the report plus the yearly aggregates.
//!
//! Usage: `cargo run --example compare_counties -- Nairobi Mombasa`

use climate_mirror::{ClimateMirror, ClimateMirrorError, DashboardProfile, YearlyAggregate};
use std::env;

#[tokio::main]
async fn main() -> Result<(), ClimateMirrorError> {
    env_logger::init();
    configure_polars_display();

    let mut args = env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "Nairobi".to_string());
    let second = args.next().unwrap_or_else(|| "Mombasa".to_string());

    let client = ClimateMirror::with_config(DashboardProfile::extended(), Default::default())?;
    let comparison = client
        .compare()
        .first(&first)
        .second(&second)
        .call()
        .await?;

    for outcome in [&comparison.first, &comparison.second] {
        match outcome.analysis() {
            Some(analysis) => {
                println!(
                    "{}: {:.2}°C mean, {:.0}mm/year, risk {}",
                    analysis.region,
                    analysis.mean_temperature_c,
                    analysis.mean_annual_rainfall_mm,
                    analysis.risk_level
                );
                println!("{}", YearlyAggregate::to_frame(&analysis.yearly)?);
            }
            None => println!("{}", outcome.error_message().unwrap_or_default()),
        }
    }

    if let Some(report) = comparison.report {
        println!("{}", report.narrative);
        if let Some(share) = report.share_message {
            println!("\n{share}");
        }
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show all 25 years
    env::set_var("POLARS_FMT_MAX_ROWS", "30");
}
