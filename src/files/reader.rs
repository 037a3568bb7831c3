//! # Lectura de Archivos
//! src/files/reader.rs
//!
//! Lectura completa de archivos a memoria.

use super::mime;
use crate::error::ServeError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Contenido de un archivo listo para enviarse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBody {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Lee el archivo entero
///
/// El Content-Type sale de `requested`, el nombre que pidió el cliente, no
/// de `path` (que puede ser el destino canónico de un symlink).
///
/// - No se puede abrir, no es archivo regular o falla la lectura → `NotFound`
/// - No se puede reservar el buffer del tamaño del archivo → `Internal`
pub fn read_file(path: &Path, requested: &str) -> Result<FileBody, ServeError> {
    let mut file = File::open(path).map_err(|_| ServeError::NotFound)?;

    let metadata = file.metadata().map_err(|_| ServeError::NotFound)?;
    if !metadata.is_file() {
        return Err(ServeError::NotFound);
    }

    let length = usize::try_from(metadata.len()).map_err(|_| ServeError::Internal)?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(length)
        .map_err(|_| ServeError::Internal)?;

    file.read_to_end(&mut bytes).map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "Error leyendo archivo");
        ServeError::NotFound
    })?;

    Ok(FileBody {
        bytes,
        content_type: mime::content_type(requested),
    })
}
