//! # Content-Encoding
//!
//! Negociación y aplicación de la compresión del body. El único esquema
//! soportado es gzip y nunca se encadenan codificaciones.
//!
//! Se usa en dos pasos alrededor del router:
//!
//! ```text
//! negotiate(req, res) → router.route(req, res) → apply(res)
//! ```

use super::response::{HeaderValue, CONTENT_ENCODING};
use super::{Request, Response};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tracing::warn;

/// Header del request con la lista de esquemas aceptados
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// Esquemas de compresión soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Interpreta un token de `Accept-Encoding` (ya recortado)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(ContentEncoding::Gzip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    /// Comprime los bytes con este esquema
    pub fn encode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                encoder.finish()
            }
        }
    }
}

/// Primer esquema soportado de una lista `Accept-Encoding` ("a, gzip, b")
pub fn select(accept_encoding: &str) -> Option<ContentEncoding> {
    accept_encoding
        .split(',')
        .find_map(|scheme| ContentEncoding::from_token(scheme.trim()))
}

/// Registra en la respuesta el esquema negociado con el cliente
///
/// Debe llamarse antes de que el router construya el body.
pub fn negotiate(request: &Request, response: &mut Response) {
    if let Some(encoding) = request.header(ACCEPT_ENCODING).and_then(select) {
        response.add_header(CONTENT_ENCODING, encoding.as_str());
    }
}

/// Comprime el body si la respuesta tiene un `Content-Encoding` soportado
///
/// Sin body, o sin esquema reconocido, la respuesta no se toca.
pub fn apply(response: &mut Response) {
    let encoding = match response.header(CONTENT_ENCODING) {
        Some(HeaderValue::Text(token)) => ContentEncoding::from_token(token),
        _ => None,
    };

    let Some(encoding) = encoding else {
        return;
    };

    let Some(body) = response.body() else {
        return;
    };

    match encoding.encode(body) {
        Ok(compressed) => {
            response.replace_body(compressed);
        }
        Err(e) => {
            warn!(encoding = encoding.as_str(), error = %e, "failed to compress body, sending it as is");
            response.remove_header(CONTENT_ENCODING);
        }
    }
}
