//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - /echo/{text}: devuelve `{text}` tal cual (sin URL-decode)
//! - /user-agent: devuelve el header `User-Agent` del request

use crate::http::{Request, Response};

pub const USER_AGENT: &str = "User-Agent";

/// Handler para /echo/{text}
pub fn echo_handler(text: &str, response: &mut Response) {
    response.set_body(text);
}

/// Handler para /user-agent
///
/// Si el cliente no manda `User-Agent` el body es vacío (no es un error).
pub fn user_agent_handler(request: &Request, response: &mut Response) {
    response.set_body(request.header(USER_AGENT).unwrap_or(""));
}
