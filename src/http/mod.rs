//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1 que necesita el servidor de archivos:
//!
//! - Lectura acotada de la primera línea del request
//! - Extracción de método y path (sin headers ni body)
//! - Construcción de responses con status de transporte fijo
//!
//! ### Formato de Request (lo único que se consume)
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 11\r\n
//! Connection: close\r\n
//! \r\n
//! <h1>Hi</h1>
//! ```
//!
//! El status line siempre es `200 OK`; los errores viajan en el body JSON.

pub mod request;   // Lectura y parsing de la request line
pub mod response;  // Construcción de HTTP responses

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{ParseError, Request};
pub use response::Response;
