//! # Manejo de una Conexión
//! src/server/connection.rs
//!
//! Una conexión = un request = una respuesta. No hay keep-alive: después
//! de escribir la respuesta el stream se cierra.
//!
//! El request se lee con un único `read` de [`READ_BUFFER_SIZE`] bytes;
//! lo que no entre en el buffer se descarta.

use crate::error::ServerError;
use crate::http::{encoding, Request, Response, StatusCode};
use crate::router::Router;
use std::io::{Read, Write};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Tamaño del buffer de lectura del request
pub const READ_BUFFER_SIZE: usize = 4096;

/// Construye la respuesta completa para un request ya parseado
///
/// negociación de encoding → router → compresión
pub fn respond(request: &Request, router: &Router) -> Response {
    let mut response = Response::new();
    encoding::negotiate(request, &mut response);
    router.route(request, &mut response);
    encoding::apply(&mut response);
    response
}

/// Procesa una conexión completa y la cierra
///
/// Sirve para cualquier stream (`TcpStream` en producción). Los errores de
/// I/O se devuelven al llamador, que los registra y sigue aceptando.
pub fn handle_connection<S: Read + Write>(mut stream: S, router: &Router) -> Result<(), ServerError> {
    let start = Instant::now();

    let mut buffer = [0u8; READ_BUFFER_SIZE];
    let bytes_read = stream.read(&mut buffer)?;

    if bytes_read == 0 {
        debug!("peer closed the connection without sending data");
        return Ok(());
    }

    let response = match Request::parse(&buffer[..bytes_read]) {
        Ok(request) => {
            let response = respond(&request, router);
            info!(
                method = request.method().as_str(),
                target = request.target(),
                status = response.status().as_u16(),
                bytes = bytes_read,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "request served"
            );
            response
        }
        Err(e) => {
            warn!(error = %e, bytes = bytes_read, "invalid request");
            let mut response = Response::new();
            response
                .set_status(StatusCode::BadRequest)
                .set_body(&format!("Invalid request: {}", e));
            response
        }
    };

    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    Ok(())
}
