//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea un request a los handlers, en este orden de precedencia:
//!
//! | Método | Path              | Resultado                                  |
//! |--------|-------------------|--------------------------------------------|
//! | GET    | `/echo/{text}`    | 200, body = `{text}`                       |
//! | GET    | `/files/{name}`   | 200 + bytes, o 404 (requiere directorio)   |
//! | GET    | `/user-agent`     | 200, body = header `User-Agent`            |
//! | GET    | `/`               | 200, sin body                              |
//! | GET    | cualquier otro    | 404, sin body                              |
//! | POST   | `/files/{name}`   | 201, o 400 si falla (requiere directorio)  |
//! | otro   | cualquier otro    | 200, sin body                              |
//!
//! Sin directorio configurado las rutas `/files/*` no existen: se tratan
//! como cualquier otra ruta desconocida.

use crate::handlers;
use crate::http::{Method, Request, Response, StatusCode};
use std::path::{Path, PathBuf};

/// Router con el directorio servido (opcional)
#[derive(Debug, Clone, Default)]
pub struct Router {
    /// Raíz de las rutas `/files/*`
    directory: Option<PathBuf>,
}

impl Router {
    /// Crea un router; `None` deshabilita las rutas de archivos
    ///
    /// # Ejemplo
    /// ```
    /// use tiny_http_server::router::Router;
    /// use tiny_http_server::http::{Request, Response, StatusCode};
    ///
    /// let router = Router::new(None);
    /// let request = Request::parse(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();
    /// let mut response = Response::new();
    /// router.route(&request, &mut response);
    ///
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), Some(&b"abc"[..]));
    /// ```
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Ejecuta el handler que corresponde al request, modificando `response`
    pub fn route(&self, request: &Request, response: &mut Response) {
        let segments: Vec<&str> = request.path_segments().iter().map(String::as_str).collect();

        match request.method() {
            Method::GET => match (segments.as_slice(), self.directory()) {
                (["echo", text], _) => handlers::echo_handler(text, response),
                (["files", name], Some(directory)) => {
                    handlers::read_file_handler(directory, name, response)
                }
                _ if request.target() == "/user-agent" => {
                    handlers::user_agent_handler(request, response)
                }
                _ if request.target() == "/" => {}
                _ => {
                    response.set_status(StatusCode::NotFound);
                }
            },
            Method::POST => {
                if let (["files", name], Some(directory)) = (segments.as_slice(), self.directory()) {
                    handlers::write_file_handler(directory, name, request.body(), response);
                }
            }
            // Cualquier otro método: 200 sin body
            _ => {}
        }
    }
}
