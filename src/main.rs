use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};

use tempo::bridge::{Bridge, pair};
use tempo::host::{HostState, register_handlers};

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Tempo - desktop time tracking companion")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the settings window
    Settings,

    /// Print the application version reported by the host
    Version,

    /// List the installed applications the host can monitor
    Apps,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Stand-in privileged side; a packaged build replaces this with the
    // real main process behind the same transport.
    let state = Arc::new(Mutex::new(demo_host_state()));
    let (transport, mut endpoint) = pair();
    register_handlers(&mut endpoint, state);
    endpoint.spawn();

    let bridge = Arc::new(Bridge::new(Arc::new(transport)));

    match cli.command {
        Some(Commands::Settings) | None => {
            tempo::gui::run_gui(bridge)?;
        }
        Some(Commands::Version) => {
            println!("{}", bridge.app_version());
        }
        Some(Commands::Apps) => {
            for app in bridge.installed_apps() {
                println!("{app}");
            }
        }
    }

    Ok(())
}

/// Seed state for the demo host: a monitored browser so the browser
/// tracking section is visible.
fn demo_host_state() -> HostState {
    let mut state = HostState::default();
    state.browser_monitored = true;
    state.installed_apps = vec![
        "Firefox".to_string(),
        "Terminal".to_string(),
        "Code".to_string(),
    ];
    state
}
