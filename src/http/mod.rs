//! # Módulo HTTP
//!
//! Implementa desde cero la parte del protocolo HTTP/1.1 que el servidor
//! necesita:
//!
//! - Parsing de requests (una por conexión, sin keep-alive)
//! - Construcción y serialización de responses
//! - Códigos de estado
//! - Negociación de `Content-Encoding` (gzip)
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Encoding: gzip\r\n
//! Content-Length: 23\r\n
//! \r\n
//! <bytes gzip>
//! ```

pub mod encoding;  // Negociación y compresión del body
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use encoding::ContentEncoding;
pub use request::{Method, ParseError, Request};
pub use response::{HeaderValue, Response};
pub use status::StatusCode;
