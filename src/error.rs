//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores:
//!
//! - [`ServeError`]: errores por request. Nunca son fatales, se reportan
//!   dentro del sobre JSON (`{"status":false,"code":...}`) con status 200.
//! - [`StartupError`]: errores al crear el socket de escucha. Son los únicos
//!   fatales y terminan el proceso.

use std::fmt;
use std::io;

/// Error al resolver o leer un archivo pedido por un cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeError {
    /// 404 - El archivo no existe o no se pudo leer
    NotFound,

    /// 403 - Extensión bloqueada o path fuera de la carpeta raíz
    Forbidden,

    /// 500 - No se pudo reservar memoria para el contenido
    Internal,
}

impl ServeError {
    /// Código numérico que viaja en el campo `code` del sobre JSON
    ///
    /// # Ejemplo
    /// ```
    /// use folder_server::error::ServeError;
    /// assert_eq!(ServeError::Forbidden.code(), 403);
    /// ```
    pub fn code(&self) -> u16 {
        match self {
            ServeError::NotFound => 404,
            ServeError::Forbidden => 403,
            ServeError::Internal => 500,
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::NotFound => write!(f, "File not found"),
            ServeError::Forbidden => write!(f, "Access forbidden"),
            ServeError::Internal => write!(f, "Internal error"),
        }
    }
}

impl std::error::Error for ServeError {}

/// Error fatal al levantar el listener
#[derive(Debug)]
pub enum StartupError {
    /// La dirección configurada no es válida
    InvalidAddress(String),

    /// Falló `socket()` o `bind()`
    Bind { address: String, source: io::Error },

    /// Falló `listen()`
    Listen(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::InvalidAddress(addr) => write!(f, "Invalid listen address: {}", addr),
            StartupError::Bind { address, source } => {
                write!(f, "Failed to bind {}: {}", address, source)
            }
            StartupError::Listen(err) => write!(f, "Failed to listen: {}", err),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Bind { source, .. } => Some(source),
            StartupError::Listen(err) => Some(err),
            StartupError::InvalidAddress(_) => None,
        }
    }
}
