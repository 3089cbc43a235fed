//! fx-money - Binary Entry Point
//!
//! Runs the worked examples against the standard rate table.
//! Set `RUST_LOG=debug` to see every conversion.

use std::process::ExitCode;

use fx_money::{Exchange, Money, RateTable, Result};
use tracing_subscriber::EnvFilter;

fn run(fx: Exchange<'_>) -> Result<()> {
    let v1 = Money::new(23.43, "EUR");
    let v2 = Money::usd(19.97);

    println!("v1 = {}", v1);
    println!("v2 = {}", v2);
    println!();
    println!("v1 + v2 = {}", fx.add(&v1, &v2)?);
    println!("v2 + v1 = {}", fx.add(&v2, &v1)?);
    println!("v1 + 3  = {}", fx.add(&v1, 3.0)?);
    println!("3 + v1  = {}", fx.add_reflected(3.0, &v1)?);
    println!("v1 - 3  = {}", fx.sub(&v1, 3.0)?);
    println!("30 - v2 = {}", fx.sub_reflected(30.0, &v2)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rates = RateTable::standard();
    tracing::info!(units = rates.len(), "loaded standard rate table");

    match run(Exchange::new(&rates)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "example failed");
            ExitCode::FAILURE
        }
    }
}
