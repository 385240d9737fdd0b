use app_state::load_app_settings;
use clap::{Parser, Subcommand};
use color_eyre::Result;
use inspect::commands::{AssetCommand, PreferencesCommand, inspect_asset, inspect_preferences};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(version, about = "Map asset rows and user preferences to API responses", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map an asset row (JSON file) to its API response.
    Asset {
        #[arg(long)]
        input: PathBuf,
        /// Only output the fields visible to viewers without full access.
        #[arg(long, default_value_t = false)]
        strip_metadata: bool,
        #[arg(long, default_value_t = false)]
        with_stack: bool,
        /// Id of the user viewing the asset.
        #[arg(long)]
        viewer: Option<String>,
    },
    /// Resolve stored preferences and optionally apply an update payload.
    Preferences {
        /// Stored partial preferences document (JSON file).
        #[arg(long)]
        stored: Option<PathBuf>,
        /// Update payload (JSON file).
        #[arg(long)]
        update: Option<PathBuf>,
        #[arg(long, default_value = "cli-user")]
        user_id: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(settings.logging.level).into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = match Args::parse().command {
        Command::Asset {
            input,
            strip_metadata,
            with_stack,
            viewer,
        } => inspect_asset(&AssetCommand {
            input,
            strip_metadata,
            with_stack,
            viewer,
        })?,
        Command::Preferences {
            stored,
            update,
            user_id,
        } => inspect_preferences(&PreferencesCommand {
            stored,
            update,
            user_id,
        })?,
    };
    info!("Mapping done");

    let rendered = if settings.output.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
