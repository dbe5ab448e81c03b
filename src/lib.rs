//! # Tiny HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: una conexión, un
//! request, una respuesta.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → Request::parse → encoding::negotiate → Router::route
//!       → encoding::apply → Response::to_bytes → socket
//! ```
//!
//! - `http`: Parsing de requests, construcción de responses, gzip
//! - `router`: Tabla de rutas (echo, user-agent, archivos)
//! - `handlers`: Implementación de cada ruta
//! - `server`: Loop de accept y manejo de cada conexión
//! - `config`: Argumentos CLI (`--directory`)
//! - `error`: Errores de conexión y configuración
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use std::net::TcpListener;
//! use tiny_http_server::config::Config;
//! use tiny_http_server::server::Server;
//!
//! let config = Config::default();
//! let listener = TcpListener::bind(config.address()).unwrap();
//! Server::new(config).run(listener).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
