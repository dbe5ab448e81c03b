//! # Tiny HTTP Server - Entry Point
//! src/main.rs
//!
//! Lee `--directory`, inicializa el logging, bindea 0.0.0.0:4221 y acepta
//! conexiones para siempre. Termina con código 1 si no puede bindear.

use std::net::TcpListener;
use tiny_http_server::config::Config;
use tiny_http_server::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiny_http_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new();
    let address = config.address();

    tracing::info!(
        %address,
        directory = ?config.directory,
        "tiny_http_server v0.1.0 starting"
    );

    // El servidor sigue funcionando: las rutas de archivos responderán 404/400
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "serving directory is not usable");
    }

    let listener = match TcpListener::bind(&address) {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%address, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    let server = Server::new(config);
    if let Err(e) = server.run(listener) {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
