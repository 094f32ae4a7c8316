use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use error_common::{log_error, HealthGuardError, Result};
use healthguard_server::{create_app, HealthGuardServer, ServerConfig};
use healthguard_server::server::{DEFAULT_HOST, DEFAULT_PORT, ENVIRONMENT_ENV, HOST_ENV, PORT_ENV};
use symptom_engine::config::CATALOG_PATH_ENV;

/// HealthGuard Engine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "healthguard-server")]
#[command(about = "Rules-based symptom triage HTTP API server")]
struct Args {
    /// Server bind address
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(short, long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// YAML or JSON condition catalog; the bundled catalog is used when unset
    #[arg(short, long, env = CATALOG_PATH_ENV)]
    catalog: Option<PathBuf>,

    /// Deployment environment; anything but "development" logs JSON
    #[arg(long, env = ENVIRONMENT_ENV, default_value = "development")]
    environment: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env file: {e}");
        }
    }

    let args = Args::parse();
    let mut config = ServerConfig {
        host: args.host,
        port: args.port,
        environment: args.environment,
        ..ServerConfig::default()
    };
    init_tracing(args.verbose, config.is_development());

    info!("🏥 {}", "Starting HealthGuard Engine HTTP Server".bright_cyan());
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());

    if let Some(path) = args.catalog {
        info!("📚 Catalog: {}", path.display().to_string().bright_yellow());
        config.engine = config.engine.with_catalog_path(path);
    }

    let addr = config.bind_address()?;
    let server = HealthGuardServer::new(config)
        .inspect_err(|e| log_error("loading condition catalog", e))?;
    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HealthGuardError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!("🚀 {}", format!("HealthGuard Engine running on http://{addr}").bright_green());
    info!("📋 {}", format!("Health check available at: http://{addr}/api/health").bright_blue());
    info!("📖 {}", format!("API docs available at: http://{addr}/docs").bright_blue());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HealthGuardError::ServerError(format!("HTTP server error: {e}")))?;

    info!("👋 {}", "Server stopped".bright_white());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn init_tracing(verbose: bool, is_development: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let use_colors = std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("healthguard_server={level},symptom_engine={level},tower_http=info").into()
    });

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(verbose)
                    .with_line_number(verbose)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_colors),
            )
            .init();

        if use_colors {
            print_startup_banner();
        }
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}

fn print_startup_banner() {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║                     🏥 HEALTHGUARD ENGINE                    ║".bright_cyan());
    println!("{}", "║                 Rules-based symptom triage API               ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".bright_cyan());
    println!();
}
