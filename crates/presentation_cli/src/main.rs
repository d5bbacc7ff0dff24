//! Weatheryze CLI
//!
//! Current conditions, an hourly strip and daily summaries for a city.

#![allow(clippy::print_stdout)]

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::{LookupService, WeatherView};
use clap::Parser;
use infrastructure::{AppConfig, WeatherAdapter, init_telemetry};
use presentation_cli::{
    Cli, Commands, ConsoleNotifier, ReplInput, parse_line, render_json, render_text,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Look up one city and print the result
async fn run_lookup(
    service: &LookupService,
    city: &domain::CityName,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let mut view = WeatherView::new();
    let outcome = service.submit(city, &mut view).await;

    if json {
        println!("{}", render_json(&view)?);
    } else {
        let text = render_text(&view, &service.config().zone);
        if !text.is_empty() {
            print!("{text}");
        }
    }

    Ok(if outcome.current_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read cities from stdin until `quit`, `exit` or end of input
async fn run_repl(service: &LookupService) -> anyhow::Result<ExitCode> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut view = WeatherView::new();

    loop {
        stdout.write_all(b"city> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            ReplInput::Skip => {},
            ReplInput::Quit => break,
            ReplInput::Invalid(e) => println!("❌ {e}"),
            ReplInput::City(city) => {
                let outcome = service.submit(&city, &mut view).await;
                debug!(success = outcome.is_success(), "Lookup finished");
                println!("{}", render_text(&view, &service.config().zone));
            },
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_to(&mut config);
    init_telemetry(&config.telemetry)?;

    config.validate()?;
    let lookup_config = config.forecast.to_lookup_config()?;
    info!(
        environment = %config.environment,
        zone = %lookup_config.zone,
        hourly_samples = lookup_config.hourly_samples,
        "Starting weatheryze"
    );

    let adapter = WeatherAdapter::from_app_config(&config.weather)?;
    let service = LookupService::new(
        Arc::new(adapter),
        Arc::new(ConsoleNotifier::stderr()),
        lookup_config,
    );

    match cli.command {
        Commands::Lookup { city, json, .. } => run_lookup(&service, &city, json).await,
        Commands::Repl { .. } => run_repl(&service).await,
    }
}
