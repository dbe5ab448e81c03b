//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser HTTP/1.1 mínimo, escrito desde cero.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/hello.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /target HTTP/1.1`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: la última línea, tomada tal cual (puede ser vacía)
//!
//! El request se lee con un único `read`, así que el body solo puede ser
//! una línea y lo que no entre en el buffer se pierde.

use std::collections::HashMap;
use thiserror::Error;

/// Métodos HTTP
///
/// Los métodos que no conocemos no son un error: el router simplemente
/// no tiene rutas para ellos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    HEAD,
    PUT,
    DELETE,

    /// Cualquier otro token (ej: "PATCH", "BREW")
    Other(String),
}

impl Method {
    /// Interpreta el token del método tal cual llega en la request line
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "HEAD" => Method::HEAD,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::HEAD => "HEAD",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::Other(token) => token,
        }
    }
}

/// Representa un request HTTP parseado
///
/// Se construye una sola vez por conexión y no se modifica después.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST, ...)
    method: Method,

    /// Target tal cual llegó (ej: "/echo/abc?x=1")
    target: String,

    /// Target sin el '/' inicial, separado por '/' (ej: ["echo", "abc"])
    path_segments: Vec<String>,

    /// Versión HTTP (ej: "HTTP/1.1"), no se valida
    version: String,

    /// Headers HTTP (ej: {"Host": "localhost:4221"})
    /// Las claves distinguen mayúsculas; si un header se repite gana el último.
    headers: HashMap<String, String>,

    /// Body del request (última línea del buffer)
    body: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Request vacío
    #[error("empty request")]
    EmptyRequest,

    /// La request line no tiene exactamente 3 tokens
    #[error("invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// Header sin ':'
    #[error("invalid header: {0:?}")]
    InvalidHeader(String),
}

impl Request {
    /// Parsea un request HTTP desde los bytes leídos del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use tiny_http_server::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl/8.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path_segments(), ["echo", "abc"]);
    /// assert_eq!(request.header("User-Agent"), Some("curl/8.0"));
    /// assert_eq!(request.body(), "");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Un read truncado puede cortar un caracter multibyte a la mitad
        let request_str = String::from_utf8_lossy(buffer);

        if request_str.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let lines: Vec<&str> = request_str.split("\r\n").collect();

        // 1. Request line
        let (method, target, version) = Self::parse_request_line(lines[0])?;

        // 2. Headers: todo entre la request line y las dos últimas líneas
        let headers_end = lines.len().saturating_sub(2).max(1);
        let headers = Self::parse_headers(&lines[1..headers_end])?;

        // 3. Body: la última línea, verbatim
        let body = if lines.len() > 1 {
            lines[lines.len() - 1].to_string()
        } else {
            String::new()
        };

        let path_segments = Self::split_segments(&target);

        Ok(Request {
            method,
            target,
            path_segments,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line: `METHOD TARGET VERSION`, separados por un espacio
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine(line.to_string()));
        }

        Ok((
            Method::from_token(parts[0]),
            parts[1].to_string(),
            parts[2].to_string(),
        ))
    }

    /// Quita el '/' inicial y separa por '/', conservando segmentos vacíos
    ///
    /// "/" → [""], "/echo/abc" → ["echo", "abc"], "/a//b" → ["a", "", "b"]
    fn split_segments(target: &str) -> Vec<String> {
        target
            .strip_prefix('/')
            .unwrap_or(target)
            .split('/')
            .map(str::to_string)
            .collect()
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato "Name: Value"; nombre y valor se recortan.
    fn parse_headers(lines: &[&str]) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.trim().is_empty() {
                break;
            }

            match line.split_once(':') {
                Some((name, value)) => {
                    headers.insert(name.trim().to_string(), value.trim().to_string());
                }
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target crudo (path + query)
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (el nombre distingue mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.target(), "/");
        assert_eq!(request.version(), "HTTP/1.1");
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), "");
    }

    #[test]
    fn test_root_target_has_one_empty_segment() {
        let request = Request::parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.path_segments(), [""]);
    }

    #[test]
    fn test_path_segments_keep_order_and_empties() {
        let request = Request::parse(b"GET /files//a.txt HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.path_segments(), ["files", "", "a.txt"]);

        let request = Request::parse(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.path_segments(), ["echo", "abc"]);
    }

    #[test]
    fn test_target_keeps_query() {
        let request = Request::parse(b"GET /echo/a?b=c HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.target(), "/echo/a?b=c");
        assert_eq!(request.path_segments(), ["echo", "a?b=c"]);
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent:   foo/1.0  \r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("User-Agent"), Some("foo/1.0"));
        assert_eq!(request.header("user-agent"), None);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let raw = b"GET / HTTP/1.1\r\nX-A: 1\r\nX-A: 2\r\n\r\n";
        let request = Request::parse(raw).unwrap();
        assert_eq!(request.header("X-A"), Some("2"));
    }

    #[test]
    fn test_header_value_with_colon() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
        let request = Request::parse(raw).unwrap();
        assert_eq!(request.header("Host"), Some("localhost:4221"));
    }

    #[test]
    fn test_parse_post_body() {
        let raw = b"POST /files/a.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.header("Content-Length"), Some("5"));
        assert_eq!(request.body(), "hello");
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let request = Request::parse(b"PATCH /x HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.method(), &Method::Other("PATCH".to_string()));
        assert_eq!(request.method().as_str(), "PATCH");
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(Request::parse(b"").unwrap_err(), ParseError::EmptyRequest);
        assert_eq!(Request::parse(b"\r\n\r\n").unwrap_err(), ParseError::EmptyRequest);
    }

    #[test]
    fn test_invalid_request_line() {
        let result = Request::parse(b"GET\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));

        // Dos espacios producen cuatro tokens
        let result = Request::parse(b"GET  / HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
    }

    #[test]
    fn test_invalid_header() {
        let result = Request::parse(b"GET / HTTP/1.1\r\nno-colon-here\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidHeader(_))));
    }

    #[test]
    fn test_request_line_only() {
        let request = Request::parse(b"GET /user-agent HTTP/1.1").unwrap();
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), "");
    }
}
