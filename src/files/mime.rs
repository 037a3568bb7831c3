//! # Tipos de Contenido
//! src/files/mime.rs
//!
//! Resolución de Content-Type por extensión de archivo.
//!
//! Tabla fija; cualquier otra extensión (o ninguna) es
//! `application/octet-stream`.

use super::extension;

/// Content-Type para extensiones desconocidas
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
];

/// Obtiene el Content-Type de un nombre de archivo
///
/// # Ejemplo
/// ```
/// use folder_server::files::mime::content_type;
///
/// assert_eq!(content_type("logo.PNG"), "image/png");
/// assert_eq!(content_type("notes.txt"), "application/octet-stream");
/// ```
pub fn content_type(name: &str) -> &'static str {
    let Some(ext) = extension(name) else {
        return DEFAULT_CONTENT_TYPE;
    };

    let ext = ext.to_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
