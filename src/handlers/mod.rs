//! # Handlers del Servidor
//!
//! Cada handler recibe lo que necesita del request y modifica la
//! `Response` en el lugar. El router decide cuál llamar.
//!
//! - **basic**: `/echo/{text}` y `/user-agent`
//! - **files**: `GET` y `POST` sobre `/files/{name}`

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;
