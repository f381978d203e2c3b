//! Content catalog server.
//!
//! This binary seeds the catalog, then starts the HTTP server.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content_catalog::{
    config::{Cli, Command, SeedConfig, ServeConfig, StorageArgs},
    content::{ContentService, StorageLayout},
    seed::seed,
    server::{create_router, AppState, Identity, RouterConfig},
    SqliteCatalog,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(config) => run_serve(config).await,
        Command::Seed(config) => run_seed(config).await,
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Content catalog v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Storage root: {}", config.storage.storage_root.display());
    info!("  Database: {}", config.storage.database.display());
    info!("  Login user: {}", config.username);
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => warn!("  CORS: any origin allowed"),
    }

    let (catalog, layout) = match open_and_seed(&config.storage).await {
        Some(opened) => opened,
        None => return ExitCode::FAILURE,
    };

    let identity = match Identity::provision(&config.username, &config.password, config.bcrypt_cost)
    {
        Ok(identity) => identity,
        Err(e) => {
            error!("Failed to hash login password: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(ContentService::new(catalog, layout), identity);
    let router = create_router(state, build_router_config(&config));

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("");
    info!("  Server listening on: http://{}", addr);
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/api/books", addr);
    info!("    curl 'http://{}/api/search?query=the'", addr);
    info!("");

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Build RouterConfig from the serve configuration.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new();

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config.with_tracing(!config.no_tracing)
}

// =============================================================================
// Seed Command
// =============================================================================

async fn run_seed(config: SeedConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    match open_and_seed(&config.storage).await {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}

/// Open the catalog database and run the seed routine.
///
/// Failures are logged here; `None` means startup must abort.
async fn open_and_seed(storage: &StorageArgs) -> Option<(SqliteCatalog, StorageLayout)> {
    let catalog = match SqliteCatalog::open(&storage.database).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to open catalog database: {}", e);
            return None;
        }
    };

    let layout = StorageLayout::new(&storage.storage_root);
    match seed(&catalog, &layout).await {
        Ok(report) if report.is_noop() => info!("Catalog already seeded"),
        Ok(_) => info!("Seeded storage at {}", layout.root().display()),
        Err(e) => {
            error!("Seeding failed: {}", e);
            return None;
        }
    }

    Some((catalog, layout))
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "content_catalog=debug,tower_http=debug"
    } else {
        "content_catalog=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
