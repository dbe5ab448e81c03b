//! # Configuración del Servidor
//! src/config.rs
//!
//! La única opción es el directorio servido por las rutas `/files/*`.
//! Host y puerto son fijos.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./tiny_http_server --directory /tmp/files/
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! SERVER_DIRECTORY=/tmp/files ./tiny_http_server
//! ```

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Host en el que escucha el servidor (todas las interfaces)
pub const HOST: &str = "0.0.0.0";

/// Puerto en el que escucha el servidor
pub const PORT: u16 = 4221;

/// Configuración del servidor
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tiny_http_server")]
#[command(about = "Servidor HTTP/1.1 minimo: echo, user-agent, archivos y gzip")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio donde se leen/escriben los archivos de /files/{name}
    #[arg(long, env = "SERVER_DIRECTORY")]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use tiny_http_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", HOST, PORT)
    }

    /// Valida la configuración
    ///
    /// Sin directorio siempre es válida; con directorio, este debe existir.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(directory) = &self.directory else {
            return Ok(());
        };

        let shown = directory.display().to_string();
        match std::fs::metadata(directory) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ConfigError::NotADirectory(shown)),
            Err(_) => Err(ConfigError::MissingDirectory(shown)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.directory.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_address() {
        assert_eq!(Config::default().address(), "0.0.0.0:4221");
    }

    #[test]
    fn test_parse_directory_flag() {
        let config = Config::try_parse_from(["tiny_http_server", "--directory", "/tmp/files/"]).unwrap();
        assert_eq!(config.directory, Some(PathBuf::from("/tmp/files/")));
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        let result = Config::try_parse_from(["tiny_http_server", "--port", "8080"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_existing_directory() {
        let config = Config {
            directory: Some(std::env::temp_dir()),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_directory() {
        let config = Config {
            directory: Some(PathBuf::from("/definitely/not/here/tiny_http_server")),
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingDirectory(_))));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let file = std::env::temp_dir().join(format!("tiny_http_config_{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();

        let config = Config {
            directory: Some(file.clone()),
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotADirectory(_))));

        std::fs::remove_file(&file).unwrap();
    }
}
