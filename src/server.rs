//! Server initialization and startup logic for Mergington.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mergington_api::{ApiServer, AppState, ServerOptions};
use mergington_config::{Config, ConfigLoader, LoggingConfig};
use mergington_registry::{ActivityRegistry, Catalog, CatalogError};

/// Initialize tracing with console output and, when `logging.dir` is set,
/// a daily rolling log file.
///
/// `RUST_LOG` takes precedence over the configured level.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let file_layer = match logging.dir {
        Some(ref dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("mergington")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes buffered lines on drop; keep it for the process lifetime.
            static GUARD: OnceLock<WorkerGuard> = OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    Ok(())
}

/// Seed a registry from the configured catalog file, or the built-in
/// school catalog when none is configured.
pub(crate) fn build_registry(config: &Config) -> Result<ActivityRegistry, CatalogError> {
    match config.catalog.path {
        Some(ref path) => {
            info!("Loading activity catalog from {}", path.display());
            ActivityRegistry::from_catalog(Catalog::load(path)?)
        }
        None => {
            info!("Using built-in activity catalog");
            Ok(ActivityRegistry::with_default_catalog())
        }
    }
}

/// Run the server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Mergington v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(build_registry(&config)?);
    info!("Activity registry ready: {}", registry.names().join(", "));

    let state = Arc::new(AppState::new(registry));

    let mut options = ServerOptions::new(config.server.host.clone(), config.server.port);
    if config.static_files.enabled {
        options = options.with_static_dir(config.static_files.dir.clone());
    }

    let server = ApiServer::new(options, state);
    info!("Serving at http://{}", server.addr());
    server.run().await
}
