//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! El loop de accept corre en un solo thread; cada conexión aceptada se
//! procesa en su propio thread. Las conexiones no comparten estado mutable:
//! lo único compartido es el `Router`, de solo lectura.

use crate::config::Config;
use crate::router::Router;
use crate::server::connection::handle_connection;
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info, warn};

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    router: Arc<Router>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            router: Arc::new(Router::new(config.directory)),
        }
    }

    /// Acepta conexiones para siempre sobre un listener ya bindeado
    ///
    /// Un error al aceptar o al procesar una conexión solo afecta a esa
    /// conexión.
    pub fn run(&self, listener: TcpListener) -> std::io::Result<()> {
        let address = listener.local_addr()?;
        info!(%address, "listening for connections (one thread per connection)");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    debug!(%peer, "accepted connection");

                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &router) {
                            error!(%peer, error = %e, "connection failed");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }
}
