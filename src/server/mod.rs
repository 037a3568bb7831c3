//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto (backlog 5)
//! 2. Acepta conexiones entrantes, un thread por conexión
//! 3. Lee la primera línea del request y la enruta
//! 4. Envía la respuesta y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{handle_connection, Server};
