//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! Lectura y escritura de archivos dentro del directorio servido:
//! - GET /files/{name}: contenido del archivo (404 si no se puede leer)
//! - POST /files/{name}: escribe el body del request (201, o 400 si falla)
//!
//! El nombre es el segundo segmento del path, así que nunca contiene '/'.
//! Solo hay que rechazar `.` y `..`.

use crate::http::{Response, StatusCode};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Permisos de los archivos creados con POST
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Valida el nombre de archivo recibido en el path
pub fn is_valid_file_name(name: &str) -> bool {
    name != "." && name != ".."
}

/// Handler para GET /files/{name}
pub fn read_file_handler(directory: &Path, name: &str, response: &mut Response) {
    if !is_valid_file_name(name) {
        response.set_status(StatusCode::NotFound);
        response.set_body(&format!("Invalid filename: {}", name));
        return;
    }

    let path = directory.join(name);
    debug!(path = %path.display(), "reading file");
    response.set_body_file(&path);
}

/// Handler para POST /files/{name}
///
/// Crea el archivo o lo trunca si ya existe. No hay coordinación entre
/// conexiones: si dos POST escriben el mismo archivo, gana el último.
pub fn write_file_handler(directory: &Path, name: &str, contents: &str, response: &mut Response) {
    if !is_valid_file_name(name) {
        response.set_status(StatusCode::BadRequest);
        response.set_body(&format!("Invalid filename: {}", name));
        return;
    }

    let path = directory.join(name);
    match write_file(&path, contents.as_bytes()) {
        Ok(()) => {
            debug!(path = %path.display(), bytes = contents.len(), "file written");
            response.set_status(StatusCode::Created);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write file");
            response.set_status(StatusCode::BadRequest);
            response.set_body(&format!("Error writing file: {}", e));
        }
    }
}

/// Escribe `contents` en `path`, creando o truncando el archivo
fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{CONTENT_TYPE, OCTET_STREAM};
    use crate::http::HeaderValue;
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tiny_http_files_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn body_text(response: &Response) -> String {
        String::from_utf8(response.body().unwrap_or_default().to_vec()).unwrap()
    }

    #[test]
    fn test_valid_file_names() {
        assert!(is_valid_file_name("a.txt"));
        assert!(is_valid_file_name(".hidden"));
        assert!(!is_valid_file_name("."));
        assert!(!is_valid_file_name(".."));
    }

    #[test]
    fn test_read_existing_file() {
        let dir = temp_dir("read_ok");
        fs::write(dir.join("a.txt"), b"contenido").unwrap();

        let mut response = Response::new();
        read_file_handler(&dir, "a.txt", &mut response);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), Some(&b"contenido"[..]));
        assert_eq!(response.header(CONTENT_TYPE), Some(&HeaderValue::from(OCTET_STREAM)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let dir = temp_dir("read_missing");

        let mut response = Response::new();
        read_file_handler(&dir, "nope.txt", &mut response);

        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(body_text(&response).starts_with("Error reading file:"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_rejects_parent_dir() {
        let dir = temp_dir("read_parent");

        let mut response = Response::new();
        read_file_handler(&dir, "..", &mut response);

        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(body_text(&response).contains("Invalid filename"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_then_read() {
        let dir = temp_dir("write_read");

        let mut response = Response::new();
        write_file_handler(&dir, "new.txt", "hello", &mut response);
        assert_eq!(response.status(), StatusCode::Created);
        assert!(response.body().is_none());

        let mut response = Response::new();
        read_file_handler(&dir, "new.txt", &mut response);
        assert_eq!(response.body(), Some(&b"hello"[..]));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_truncates() {
        let dir = temp_dir("write_truncate");
        fs::write(dir.join("f.txt"), b"un texto bastante largo").unwrap();

        let mut response = Response::new();
        write_file_handler(&dir, "f.txt", "corto", &mut response);

        assert_eq!(response.status(), StatusCode::Created);
        assert_eq!(fs::read(dir.join("f.txt")).unwrap(), b"corto");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory() {
        let base = temp_dir("write_fail");
        let dir = base.join("does").join("not").join("exist");

        let mut response = Response::new();
        write_file_handler(&dir, "x", "hello", &mut response);

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert!(body_text(&response).starts_with("Error writing file:"));

        fs::remove_dir_all(&base).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_dir("write_mode");
        let mut response = Response::new();
        write_file_handler(&dir, "m.txt", "x", &mut response);

        let mode = fs::metadata(dir.join("m.txt")).unwrap().permissions().mode();
        // El umask solo puede quitar permisos
        assert_eq!(mode & 0o133, 0);

        fs::remove_dir_all(&dir).unwrap();
    }
}
