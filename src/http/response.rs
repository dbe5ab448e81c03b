//! # Construcción de Respuestas HTTP
//!
//! La respuesta se crea una vez por conexión con el estado por defecto
//! (`200 OK`, sin headers, sin body), los handlers la modifican en el lugar
//! y al final se serializa una sola vez con [`Response::to_bytes`].
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use tiny_http_server::http::Response;
//!
//! let mut response = Response::new();
//! response.set_body("abc");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! assert!(bytes.ends_with(b"\r\n\r\nabc"));
//! ```

use super::StatusCode;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Versión fija de todas las respuestas
pub const HTTP_VERSION: &str = "HTTP/1.1";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_ENCODING: &str = "Content-Encoding";

/// Content-Type de los bodies de texto
pub const TEXT_PLAIN: &str = "text/plain";

/// Content-Type de los bodies leídos de archivos
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Valor de un header: texto o número (Content-Length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Text(String),
    Number(usize),
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(text) => f.write_str(text),
            HeaderValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Text(value)
    }
}

impl From<usize> for HeaderValue {
    fn from(value: usize) -> Self {
        HeaderValue::Number(value)
    }
}

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    /// Usamos HashMap para evitar duplicados; el orden al serializar no es estable.
    headers: HashMap<String, HeaderValue>,

    /// Cuerpo de la respuesta. `None` significa "sin body".
    body: Option<Vec<u8>>,
}

impl Response {
    /// Crea la respuesta por defecto: `200 OK`, sin headers ni body
    pub fn new() -> Self {
        Self {
            status: StatusCode::Ok,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sobrescribe el código de estado (y con él el mensaje)
    pub fn set_status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    /// Agrega un header. Si el header ya existe, se sobrescribe.
    ///
    /// # Ejemplo
    /// ```
    /// use tiny_http_server::http::{HeaderValue, Response};
    ///
    /// let mut response = Response::new();
    /// response.add_header("Content-Encoding", "gzip");
    /// assert_eq!(
    ///     response.header("Content-Encoding"),
    ///     Some(&HeaderValue::Text("gzip".to_string()))
    /// );
    /// ```
    pub fn add_header(&mut self, name: &str, value: impl Into<HeaderValue>) -> &mut Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    pub fn remove_header(&mut self, name: &str) -> Option<HeaderValue> {
        self.headers.remove(name)
    }

    /// Establece el cuerpo desde texto
    ///
    /// Pone `Content-Type: text/plain` y `Content-Length` con la cantidad
    /// de bytes UTF-8 (no de caracteres).
    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.add_header(CONTENT_TYPE, TEXT_PLAIN);
        self.replace_body(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo con el contenido de un archivo
    ///
    /// Si el archivo no se puede leer (no existe, permisos, es un
    /// directorio...) la respuesta pasa a `404 Not Found` con el error en
    /// texto plano como body.
    pub fn set_body_file(&mut self, path: &Path) -> &mut Self {
        match std::fs::read(path) {
            Ok(contents) => {
                self.add_header(CONTENT_TYPE, OCTET_STREAM);
                self.replace_body(contents)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read file");
                self.set_status(StatusCode::NotFound);
                self.set_body(&format!("Error reading file: {}", e))
            }
        }
    }

    /// Reemplaza los bytes del body sin tocar Content-Type
    ///
    /// Content-Length siempre se recalcula para que coincida con el body.
    pub fn replace_body(&mut self, body: Vec<u8>) -> &mut Self {
        self.add_header(CONTENT_LENGTH, body.len());
        self.body = Some(body);
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n` (en el orden del mapa)
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario, o nada si no hay body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        let status_line = format!("{} {}\r\n", HTTP_VERSION, self.status);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");

        if let Some(body) = &self.body {
            result.extend_from_slice(body);
        }

        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HashMap<String, HeaderValue> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Body de la respuesta, `None` si nunca se estableció
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}
