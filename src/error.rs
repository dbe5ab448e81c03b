//! # Errores del Servidor
//! src/error.rs
//!
//! Los errores de archivos nunca llegan hasta acá: el router los convierte
//! en respuestas 404/400. Solo quedan los errores de la conexión misma.

use crate::http::ParseError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Fallo de lectura/escritura en el socket
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Los bytes recibidos no forman un request válido
    #[error("parse error: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },
}

/// Errores de configuración detectados al arrancar
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("directory does not exist: {0}")]
    MissingDirectory(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),
}
