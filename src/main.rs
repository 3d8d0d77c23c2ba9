//! Fruit stand web server entry point.

use axum::ServiceExt;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fruit_stand::api::{create_app, AppState};
use fruit_stand::config::Config;
use fruit_stand::metrics;
use fruit_stand::store::FruitStore;
use fruit_stand::utils::shutdown_signal;

/// In-memory fruit CRUD web app.
#[derive(Parser, Debug)]
#[command(name = "fruit-stand")]
#[command(about = "Serve a list of fruits editable through HTML forms")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration first; RUST_LOG and VERBOSE shape the log filter
    let loaded = Config::load();
    let directives = match &loaded {
        Ok(config) => config.log_directives(args.verbose),
        Err(_) => Config::default().log_directives(args.verbose),
    };

    // Initialize logging
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(loaded, args.port),
        Some(Command::Serve) | None => cmd_serve(loaded, args.port).await,
    }
}

/// Apply CLI overrides to the loaded configuration and validate it.
fn load_config(
    loaded: fruit_stand::Result<Config>,
    port_override: Option<u16>,
) -> anyhow::Result<Config> {
    let mut config = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config(
    loaded: fruit_stand::Result<Config>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("FRUIT STAND - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(loaded, port_override) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(e);
        }
    };

    if let Some(path) = &config.seed_path {
        print!("Loading seed file... ");
        match FruitStore::from_seed_file(path) {
            Ok(_) => println!("OK"),
            Err(e) => {
                println!("FAILED");
                println!("  Error: {}", e);
                return Err(anyhow::anyhow!("Seed file invalid"));
            }
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Static Dir: {}", config.static_dir);
    println!(
        "  Seed: {}",
        config.seed_path.as_deref().unwrap_or("built-in")
    );
    println!(
        "  Metrics: {}",
        if config.metrics_enabled { "Enabled" } else { "Disabled" }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the web server until Ctrl+C or SIGTERM.
async fn cmd_serve(
    loaded: fruit_stand::Result<Config>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    info!("Validating configuration...");
    let config = load_config(loaded, port_override)?;

    let store = match &config.seed_path {
        Some(path) => FruitStore::from_seed_file(path)?,
        None => FruitStore::seeded(),
    };
    info!("Loaded {} fruits", store.len().await);

    let mut app_state = AppState::new(store);
    if config.metrics_enabled {
        match metrics::init_metrics() {
            Ok(handle) => app_state = app_state.with_metrics(handle),
            Err(e) => warn!("Metrics disabled: {}", e),
        }
    }

    let app = create_app(app_state, &config.static_dir);

    let addr = config.bind_addr().map_err(|e| anyhow::anyhow!(e))?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
