//! # Filtro de Extensiones
//! src/files/filter.rs
//!
//! Filtro de extensiones bloqueadas.

use super::extension;
use std::collections::HashSet;

/// Conjunto inmutable de extensiones bloqueadas (en minúsculas, con punto)
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    blocked: HashSet<String>,
}

impl ExtensionFilter {
    /// Construye el filtro a partir de la lista configurada
    ///
    /// Las extensiones se comparan sin distinguir mayúsculas.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let blocked = extensions
            .iter()
            .map(|ext| ext.as_ref().to_lowercase())
            .collect();

        Self { blocked }
    }

    /// Indica si el nombre tiene una extensión bloqueada
    ///
    /// Con el conjunto vacío retorna `false` sin mirar el nombre.
    ///
    /// # Ejemplo
    /// ```
    /// use folder_server::files::ExtensionFilter;
    ///
    /// let filter = ExtensionFilter::new(&[".exe"]);
    /// assert!(filter.is_blocked("setup.EXE"));
    /// assert!(!filter.is_blocked("setup.exe.txt"));
    /// assert!(!filter.is_blocked("exe"));
    /// ```
    pub fn is_blocked(&self, name: &str) -> bool {
        if self.blocked.is_empty() {
            return false;
        }

        match extension(name) {
            Some(ext) => self.blocked.contains(&ext.to_lowercase()),
            None => false,
        }
    }

    /// Cantidad de extensiones bloqueadas
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// `true` si no hay extensiones bloqueadas
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}
