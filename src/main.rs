// src/main.rs
use clap::Parser;
use crossterm::style::Stylize;
use linkboard::cli::args::Cli;
use linkboard::cli::execute_command;
use linkboard::config::load_settings;
use linkboard::exitcode;
use linkboard::infrastructure::di::service_container::ServiceContainer;
use linkboard::util::helper::is_stderr_piped;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[instrument]
fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug, cli.no_color);

    // use stderr as human output in order to make stdout output passable to downstream processes
    let color_choice = if cli.no_color || is_stderr_piped() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let stderr = StandardStream::stderr(color_choice);

    // An explicitly requested config file must load; the standard location
    // is best effort and falls back to defaults inside load_settings.
    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            std::process::exit(exitcode::USAGE);
        }
    };

    // Create service container (single composition root)
    let service_container = match ServiceContainer::new(&settings) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("{}: {}", "Failed to create service container".red(), e);
            std::process::exit(exitcode::USAGE);
        }
    };

    // Execute CLI command with services
    if let Err(e) = execute_command(stderr, cli, &service_container) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(exitcode::USAGE);
    }
}

fn setup_logging(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    // Log initial debug level
    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
