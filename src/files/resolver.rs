//! # Resolución de Paths
//! src/files/resolver.rs
//!
//! Convierte el path crudo del request en un destino:
//!
//! 1. Se quita un separador inicial (`/index.html` → `index.html`)
//! 2. Vacío o terminado en separador → listado de la carpeta raíz
//!    (siempre la raíz, aunque el path apunte a una subcarpeta)
//! 3. Cualquier otro → candidato a archivo dentro de la raíz
//!
//! Los candidatos con componentes `..`, raíz o prefijo de unidad se rechazan
//! sin tocar el disco. Para los demás se canonicaliza y se exige que el
//! resultado siga dentro de la raíz canonicalizada (cubre symlinks).

use crate::error::ServeError;
use std::path::{is_separator, Component, Path, PathBuf};

/// Destino de un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Listar la carpeta raíz
    Listing,

    /// Servir un archivo; contiene el path relativo normalizado
    File(String),
}

/// Quita un único separador inicial
pub fn normalize(raw_path: &str) -> &str {
    match raw_path.chars().next() {
        Some(first) if is_separator(first) => &raw_path[first.len_utf8()..],
        _ => raw_path,
    }
}

/// Clasifica el path crudo del request
///
/// # Ejemplo
/// ```
/// use folder_server::files::resolver::{classify, Target};
///
/// assert_eq!(classify("/"), Target::Listing);
/// assert_eq!(classify("/docs/"), Target::Listing);
/// assert_eq!(classify("/index.html"), Target::File("index.html".to_string()));
/// ```
pub fn classify(raw_path: &str) -> Target {
    let relative = normalize(raw_path);

    match relative.chars().last() {
        None => Target::Listing,
        Some(last) if is_separator(last) => Target::Listing,
        Some(_) => Target::File(relative.to_string()),
    }
}

/// Resuelve un path relativo a un archivo existente dentro de `root`
///
/// - `Forbidden` si el path intenta salir de la raíz
/// - `NotFound` si el archivo (o la raíz) no existe
pub fn resolve_file(root: &Path, relative: &str) -> Result<PathBuf, ServeError> {
    let relative = Path::new(relative);

    // Chequeo léxico, antes de cualquier acceso a disco
    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(ServeError::Forbidden);
    }

    let candidate = root.join(relative);

    let canonical_root = root.canonicalize().map_err(|_| ServeError::NotFound)?;
    let canonical = candidate.canonicalize().map_err(|_| ServeError::NotFound)?;

    if !canonical.starts_with(&canonical_root) {
        return Err(ServeError::Forbidden);
    }

    Ok(canonical)
}
