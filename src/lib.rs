//! # Folder Server
//! src/lib.rs
//!
//! Servidor HTTP mínimo que expone una carpeta raíz: sirve archivos,
//! lista la raíz como JSON y rechaza extensiones bloqueadas.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `config`: Argumentos CLI y variables de entorno
//! - `http`: Lectura de la request line y construcción de responses
//! - `files`: Content-Type, filtro de extensiones, listado, resolución y lectura
//! - `router`: Decide listado, archivo o sobre de error
//! - `server`: Listener TCP y manejo de conexiones
//! - `error`: Errores por request y errores de arranque
//! - `logging`: Inicialización de `tracing`
//!
//! ## Contrato de respuesta
//!
//! El status line siempre es `HTTP/1.1 200 OK`. Los errores viajan en el
//! body como `{"status":false,"code":403|404|500}`.
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use folder_server::config::Config;
//! use folder_server::server::Server;
//!
//! let config = Config::new(8080, "./public", &[".exe"]);
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
