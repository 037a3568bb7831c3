//! # Construcción de Respuestas HTTP
//!
//! Todas las respuestas usan el status line `HTTP/1.1 200 OK`. El resultado
//! real (listado, archivo o error) se comunica en el body. Los headers se
//! guardan en orden de inserción para que dos respuestas iguales produzcan
//! exactamente los mismos bytes.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use folder_server::http::Response;
//!
//! let response = Response::new("text/plain", b"Hello".to_vec());
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use crate::error::ServeError;
use serde::Serialize;

/// Status line fijo de transporte
pub const STATUS_LINE: &str = "HTTP/1.1 200 OK";

/// Sobre JSON de error: `{"status":false,"code":404}`
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    status: bool,
    code: u16,
}

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Headers en orden de escritura
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta
    body: Vec<u8>,

    /// Error lógico transportado en el body, si lo hay (para logs)
    error: Option<ServeError>,
}

impl Response {
    /// Crea una respuesta con `Content-Type`, `Content-Length` y `Connection: close`
    pub fn new(content_type: &str, body: Vec<u8>) -> Self {
        let headers = vec![
            ("Content-Type".to_string(), content_type.to_string()),
            ("Content-Length".to_string(), body.len().to_string()),
            ("Connection".to_string(), "close".to_string()),
        ];

        Self {
            headers,
            body,
            error: None,
        }
    }

    /// Crea una respuesta JSON a partir de un body ya serializado
    pub fn json(body: Vec<u8>) -> Self {
        Self::new("application/json", body)
    }

    /// Crea el sobre de error `{"status":false,"code":<code>}`
    ///
    /// El transporte sigue siendo `200 OK`; el cliente debe mirar el body.
    ///
    /// # Ejemplo
    /// ```
    /// use folder_server::error::ServeError;
    /// use folder_server::http::Response;
    ///
    /// let response = Response::error(ServeError::NotFound);
    /// assert_eq!(response.body(), br#"{"status":false,"code":404}"#);
    /// ```
    pub fn error(err: ServeError) -> Self {
        let envelope = ErrorEnvelope {
            status: false,
            code: err.code(),
        };
        let body = to_json_body(&envelope, || {
            format!(r#"{{"status":false,"code":{}}}"#, err.code()).into_bytes()
        });

        let mut response = Self::json(body);
        response.error = Some(err);
        response
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        // 1. Status line
        result.extend_from_slice(STATUS_LINE.as_bytes());
        result.extend_from_slice(b"\r\n");

        // 2. Headers
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el valor de un header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Error lógico de la respuesta, si es un sobre de error
    pub fn error_kind(&self) -> Option<ServeError> {
        self.error
    }
}

/// Serializa a JSON compacto; si falla usa el body alternativo
pub(crate) fn to_json_body<T, F>(value: &T, fallback: F) -> Vec<u8>
where
    T: Serialize,
    F: FnOnce() -> Vec<u8>,
{
    serde_json::to_vec(value).unwrap_or_else(|err| {
        tracing::error!(error = %err, "No se pudo serializar el body JSON");
        fallback()
    })
}
