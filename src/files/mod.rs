//! # Acceso a la Carpeta Raíz
//! src/files/mod.rs
//!
//! Todo lo que toca (o decide no tocar) el sistema de archivos:
//!
//! - `mime`: extensión → Content-Type
//! - `filter`: extensiones bloqueadas
//! - `listing`: listado JSON de la carpeta raíz
//! - `resolver`: path del request → path dentro de la raíz
//! - `reader`: lectura completa de un archivo a memoria

pub mod filter;
pub mod listing;
pub mod mime;
pub mod reader;
pub mod resolver;

pub use filter::ExtensionFilter;
pub use listing::Listing;
pub use reader::FileBody;
pub use resolver::Target;

/// Extensión de un nombre: desde el último `.` del último componente
///
/// Incluye el punto. Los nombres sin punto no tienen extensión.
///
/// # Ejemplo
/// ```
/// use folder_server::files::extension;
///
/// assert_eq!(extension("index.HTML"), Some(".HTML"));
/// assert_eq!(extension("docs.v2/README"), None);
/// assert_eq!(extension("archive.tar.gz"), Some(".gz"));
/// ```
pub fn extension(name: &str) -> Option<&str> {
    let file_name = name
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or(name);

    file_name.rfind('.').map(|dot| &file_name[dot..])
}
