use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use portal_api::config::ApiConfig;
use portal_api::handlers;
use portal_api::state::PortalState;
use portal_api::DocumentStore;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("portal-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let loaded = match &args.config {
        Some(path) => ApiConfig::load_from(path).map(|config| (config, path.clone())),
        None => ApiConfig::load(),
    };
    let (config, config_path) = loaded.map_err(|e| {
        std::io::Error::other(format!("Failed to load config: {e}"))
    })?;
    tracing::info!("Config loaded from {:?}", config_path);

    let store = Arc::new(DocumentStore::new());
    let state = PortalState::new(config.app_id(), config.shift_calculator());
    tracing::info!(
        "Serving app '{}' with a {} minute workday",
        state.app_id,
        state.shift_calculator.workday().num_minutes()
    );

    let (host, port) = config.bind_address();
    tracing::info!("Server will listen on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type", "X-User-Id"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type", "X-User-Id"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
