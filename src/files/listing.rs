//! # Listado de Carpeta
//! src/files/listing.rs
//!
//! Lista las entradas inmediatas de una carpeta como JSON:
//!
//! ```json
//! {"status":true,"data":["index.html","css"]}
//! ```
//!
//! Solo se incluyen archivos regulares y subcarpetas; symlinks, sockets y
//! dispositivos se omiten. El orden es el de la enumeración del sistema
//! operativo (no se ordena). Si la carpeta no se puede abrir el resultado es
//! `{"status":false,"data":[]}`.

use super::ExtensionFilter;
use crate::http::response::to_json_body;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Resultado del listado, con la misma forma que el JSON enviado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub status: bool,
    pub data: Vec<String>,
}

impl Listing {
    /// Listado fallido: la carpeta no se pudo abrir
    pub fn failed() -> Self {
        Self {
            status: false,
            data: Vec::new(),
        }
    }

    /// Serializa a JSON compacto
    pub fn to_json(&self) -> Vec<u8> {
        to_json_body(self, || br#"{"status":false,"data":[]}"#.to_vec())
    }
}

/// Lista la carpeta `folder` omitiendo las entradas bloqueadas por `filter`
pub fn list_folder(folder: &Path, filter: &ExtensionFilter) -> Listing {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(folder = %folder.display(), error = %err, "No se pudo abrir la carpeta");
            return Listing::failed();
        }
    };

    let mut data = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "Entrada ilegible, se omite");
                continue;
            }
        };

        // file_type() no sigue symlinks
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };
        if !file_type.is_file() && !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == "." || name == ".." || filter.is_blocked(&name) {
            continue;
        }

        data.push(name);
    }

    Listing { status: true, data }
}
