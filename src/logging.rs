//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing-subscriber`. El filtro sale de `RUST_LOG` si está
//! definido; si no, del nivel configurado (`--log-level`).
//!
//! Los logs van a stderr: stdout queda reservado para la línea
//! `{"status":...}` que leen los scripts que lanzan el servidor.

use tracing_subscriber::{fmt, EnvFilter};

/// Instala el subscriber global
///
/// Llamar más de una vez no falla; las llamadas siguientes se ignoran.
pub fn init(default_level: &str) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .try_init();
}
