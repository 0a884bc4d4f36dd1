//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the server and serves it
//! over stdio. Any startup failure or panic ends the process with status 1.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use npm_mcp_server::core::{Config, Error, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level, config.logging.with_timestamps);
    install_panic_hook();

    for note in config.env_overrides() {
        info!("{}", note);
    }

    match run(config).await {
        Ok(()) => {
            info!("Server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Build the server and serve it until the client disconnects.
async fn run(config: Config) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Authentication required: {}", config.security.auth_required);

    let server = McpServer::new(config).context("server initialization failed")?;

    info!("Server initialized");

    StdioTransport::run(server)
        .await
        .map_err(Error::from)
        .context("stdio transport failed")?;

    Ok(())
}

/// Log panics and exit with a non-zero status instead of unwinding silently.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Uncaught panic: {}", panic_info);
        std::process::exit(1);
    }));
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr: stdout carries the MCP protocol.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
