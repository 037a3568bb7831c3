//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos. Se construye
//! una sola vez al arrancar (argumentos CLI + variables de entorno) y luego
//! se comparte como valor inmutable entre todas las conexiones.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./folder_server 8080 ./public .exe .bat
//! ./folder_server 8080 ./public exe --read-timeout-ms 2000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! FOLDER_SERVER_HOST=127.0.0.1 FOLDER_SERVER_LOG=debug ./folder_server 8080 ./public
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Tamaño por defecto del buffer de lectura del request (8 KiB)
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 8192;

/// Configuración del servidor de archivos
#[derive(Debug, Clone, Parser)]
#[command(name = "folder_server")]
#[command(about = "Servidor HTTP de archivos estáticos con listado JSON")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    pub port: u16,

    /// Carpeta raíz desde la que se sirven los archivos
    pub root: PathBuf,

    /// Extensiones bloqueadas (ej: .exe .bat); no se sirven ni se listan
    #[arg(value_parser = parse_extension)]
    pub blocked_extensions: Vec<String>,

    /// Host/IP en el que escucha (por defecto todas las interfaces)
    #[arg(long, default_value = "0.0.0.0", env = "FOLDER_SERVER_HOST")]
    pub host: String,

    /// Máximo de bytes aceptados para la línea de request
    #[arg(long = "max-request-bytes", default_value_t = DEFAULT_MAX_REQUEST_BYTES, env = "FOLDER_SERVER_MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,

    /// Timeout de lectura por conexión en milisegundos (0 = sin timeout)
    #[arg(long = "read-timeout-ms", default_value = "5000", env = "FOLDER_SERVER_READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Timeout de escritura por conexión en milisegundos (0 = sin timeout)
    #[arg(long = "write-timeout-ms", default_value = "5000", env = "FOLDER_SERVER_WRITE_TIMEOUT_MS")]
    pub write_timeout_ms: u64,

    /// Nivel de log cuando RUST_LOG no está definido
    #[arg(long = "log-level", default_value = "info", env = "FOLDER_SERVER_LOG")]
    pub log_level: String,
}

/// Normaliza una extensión recibida por CLI: minúsculas y con punto inicial
///
/// `EXE`, `.Exe` y `.exe` quedan todos como `.exe`.
pub fn parse_extension(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Err("extension must not be empty".to_string());
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        Ok(lower)
    } else {
        Ok(format!(".{}", lower))
    }
}

impl Config {
    /// Crea una configuración sin pasar por la CLI
    ///
    /// Útil para tests y para embeber el servidor en otro programa. Las
    /// extensiones se normalizan igual que en la CLI; las vacías se descartan
    /// con un warning.
    ///
    /// # Ejemplo
    /// ```rust
    /// use folder_server::config::Config;
    ///
    /// let config = Config::new(8080, "./public", &[".exe"]);
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn new(port: u16, root: impl Into<PathBuf>, blocked: &[&str]) -> Self {
        Self {
            port,
            root: root.into(),
            blocked_extensions: blocked
                .iter()
                .filter_map(|ext| match parse_extension(ext) {
                    Ok(ext) => Some(ext),
                    Err(e) => {
                        tracing::warn!(extension = %ext, error = %e, "Extensión bloqueada ignorada");
                        None
                    }
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout de lectura como `Duration`; `None` si está deshabilitado
    pub fn read_timeout(&self) -> Option<Duration> {
        (self.read_timeout_ms > 0).then(|| Duration::from_millis(self.read_timeout_ms))
    }

    /// Timeout de escritura como `Duration`; `None` si está deshabilitado
    pub fn write_timeout(&self) -> Option<Duration> {
        (self.write_timeout_ms > 0).then(|| Duration::from_millis(self.write_timeout_ms))
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Root folder must not be empty".to_string());
        }

        // Necesitamos al menos espacio para "GET / HTTP/1.1\r\n"
        if self.max_request_bytes < 16 {
            return Err("Max request bytes must be >= 16".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración en el log
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.address(),
            root = %self.root.display(),
            blocked = ?self.blocked_extensions,
            max_request_bytes = self.max_request_bytes,
            read_timeout_ms = self.read_timeout_ms,
            write_timeout_ms = self.write_timeout_ms,
            "Configuración cargada"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            root: PathBuf::from("."),
            blocked_extensions: Vec::new(),
            host: "0.0.0.0".to_string(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
            read_timeout_ms: 5_000,
            write_timeout_ms: 5_000,
            log_level: "info".to_string(),
        }
    }
}
