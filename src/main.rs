#![forbid(unsafe_code)]

mod config;
mod constants;
mod gui;
mod visibility;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::{ConfigUpdate, WidgetConfig, WidgetTemplate, WidgetTheme};
use visibility::WidgetSize;

/// Configure and preview project status widgets
#[derive(Debug, Parser)]
#[command(name = "widget-studio", version, about)]
struct Cli {
    /// Log verbosity: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Theme to start with (falls back to Cream if unrecognized)
    #[arg(long)]
    theme: Option<String>,

    /// Template to start with (falls back to the initial preset if unrecognized)
    #[arg(long)]
    template: Option<String>,

    /// Widget size to start with: S, M, L or XL (falls back to S if unrecognized)
    #[arg(long)]
    size: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = WidgetConfig::default();

    if let Some(name) = &cli.template {
        match WidgetTemplate::from_name(name) {
            Some(template) => config.set_template(template),
            None => warn!(template = %name, "Unrecognized template, keeping initial preset"),
        }
    }

    if let Some(name) = &cli.theme {
        match WidgetTheme::from_name(name) {
            Some(theme) => config.apply(ConfigUpdate {
                theme: Some(theme),
                ..ConfigUpdate::default()
            }),
            None => warn!(theme = %name, "Unrecognized theme, falling back to Cream"),
        }
    }

    let size = match &cli.size {
        Some(name) => WidgetSize::from_name(name).unwrap_or_else(|| {
            warn!(size = %name, "Unrecognized size, falling back to S");
            WidgetSize::default()
        }),
        None => WidgetSize::default(),
    };

    info!(
        template = config.template.label(),
        theme = config.theme.label(),
        size = size.label(),
        "Starting widget builder"
    );

    gui::run_gui(config, size)
}
