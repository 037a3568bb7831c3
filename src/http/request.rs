//! # Parsing de Requests
//! src/http/request.rs
//!
//! Solo se consume la primera línea del request:
//!
//! ```text
//! <METHOD> <PATH> <VERSION (ignorada)>
//! ```
//!
//! No se validan método ni versión, no se leen headers ni body. Una línea sin
//! tokens produce un path vacío, que el router trata como listado de la raíz.

use std::io::{self, Read};

/// Tamaño de cada lectura parcial del socket
const READ_CHUNK: usize = 1024;

/// Request parseado: método y path crudo tal como llegaron
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Primer token de la línea (ej: "GET"); vacío si no había
    method: String,

    /// Segundo token de la línea (ej: "/index.html"); vacío si no había
    path: String,
}

/// Errores al leer la request line del socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// El cliente cerró sin enviar nada
    EmptyRequest,

    /// Se alcanzó el límite de bytes sin encontrar fin de línea
    TooLarge { limit: usize },

    /// Error de I/O durante la lectura (incluye timeouts)
    Io(io::ErrorKind),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::TooLarge { limit } => {
                write!(f, "Request line exceeds {} bytes", limit)
            }
            ParseError::Io(kind) => write!(f, "I/O error while reading request: {}", kind),
        }
    }
}

impl std::error::Error for ParseError {}

/// Lee del stream hasta tener una línea completa, EOF, timeout, o `limit` bytes
///
/// La línea puede llegar fragmentada en varios segmentos TCP, por eso se
/// lee en un ciclo. El buffer crece dinámicamente pero nunca pasa de
/// `limit`: si se llena sin ver `\n` el request se rechaza, no se trunca.
///
/// Si el cliente deja el socket abierto sin terminar la línea, al vencer el
/// timeout de lectura se acepta lo recibido hasta ese momento. Solo un
/// timeout sin ningún byte leído es error.
pub fn read_request<R: Read>(reader: &mut R, limit: usize) -> Result<Vec<u8>, ParseError> {
    let mut buffer = Vec::with_capacity(limit.min(READ_CHUNK));
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let remaining = limit.saturating_sub(buffer.len());
        if remaining == 0 {
            return Err(ParseError::TooLarge { limit });
        }

        let want = remaining.min(chunk.len());
        let bytes_read = match reader.read(&mut chunk[..want]) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if is_timeout(e.kind()) && !buffer.is_empty() => return Ok(buffer),
            Err(e) => return Err(ParseError::Io(e.kind())),
        };

        if bytes_read == 0 {
            break;
        }

        let start = buffer.len();
        buffer.extend_from_slice(&chunk[..bytes_read]);

        if buffer[start..].contains(&b'\n') {
            return Ok(buffer);
        }
    }

    if buffer.is_empty() {
        Err(ParseError::EmptyRequest)
    } else {
        // EOF sin salto de línea: se acepta lo que llegó
        Ok(buffer)
    }
}

/// `set_read_timeout` reporta `WouldBlock` en unix y `TimedOut` en windows
fn is_timeout(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
}

impl Request {
    /// Parsea la primera línea de los bytes recibidos
    ///
    /// Nunca falla: los tokens ausentes quedan como strings vacíos.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use folder_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n");
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/index.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        let line_end = buffer
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(buffer.len());
        let line = String::from_utf8_lossy(&buffer[..line_end]);

        // Solo espacios ASCII separan tokens; U+00A0 y similares son parte del path
        let mut tokens = line.split_ascii_whitespace();
        let method = tokens.next().unwrap_or_default().to_string();
        let path = tokens.next().unwrap_or_default().to_string();

        Request { method, path }
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path crudo del request
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader que entrega los datos en trozos de tamaño fijo
    struct Fragmented {
        data: Vec<u8>,
        pos: usize,
        step: usize,
    }

    impl Read for Fragmented {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = (self.pos + self.step).min(self.data.len());
            let n = (end - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    /// Reader que entrega los datos y luego simula un timeout de lectura
    struct StallsAfter {
        data: Option<Vec<u8>>,
        kind: io::ErrorKind,
    }

    impl Read for StallsAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    buf[..data.len()].copy_from_slice(&data);
                    Ok(data.len())
                }
                None => Err(io::Error::new(self.kind, "timed out")),
            }
        }
    }

    #[test]
    fn test_parse_simple_get() {
        let request = Request::parse(b"GET / HTTP/1.1\r\n\r\n");

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/");
    }

    #[test]
    fn test_parse_ignores_headers() {
        let raw = b"GET /style.css HTTP/1.1\r\nHost: localhost\r\nX-Path: /other\r\n\r\n";
        let request = Request::parse(raw);

        assert_eq!(request.path(), "/style.css");
    }

    #[test]
    fn test_parse_missing_version() {
        let request = Request::parse(b"GET /index.html\r\n");
        assert_eq!(request.path(), "/index.html");
    }

    #[test]
    fn test_parse_method_only() {
        let request = Request::parse(b"GET\r\n\r\n");

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "");
    }

    #[test]
    fn test_parse_blank_line() {
        let request = Request::parse(b"   \r\n");

        assert_eq!(request.method(), "");
        assert_eq!(request.path(), "");
    }

    #[test]
    fn test_parse_any_method() {
        let request = Request::parse(b"DELETE /a.txt HTTP/1.0\r\n");
        assert_eq!(request.method(), "DELETE");
        assert_eq!(request.path(), "/a.txt");
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let request = Request::parse(b"GET /\xff.txt HTTP/1.1\r\n");
        assert!(request.path().starts_with('/'));
        assert!(request.path().ends_with(".txt"));
    }

    #[test]
    fn test_read_request_stops_at_newline() {
        let mut cursor = Cursor::new(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n".to_vec());
        let bytes = read_request(&mut cursor, 8192).unwrap();
        assert!(bytes.starts_with(b"GET / HTTP/1.1\r\n"));
    }

    #[test]
    fn test_read_request_fragmented() {
        let mut reader = Fragmented {
            data: b"GET /fragmented.html HTTP/1.1\r\n".to_vec(),
            pos: 0,
            step: 3,
        };
        let bytes = read_request(&mut reader, 8192).unwrap();
        let request = Request::parse(&bytes);
        assert_eq!(request.path(), "/fragmented.html");
    }

    #[test]
    fn test_read_request_empty() {
        let mut cursor = Cursor::new(Vec::new());
        assert_eq!(read_request(&mut cursor, 8192), Err(ParseError::EmptyRequest));
    }

    #[test]
    fn test_read_request_eof_without_newline() {
        let mut cursor = Cursor::new(b"GET /x.txt".to_vec());
        let bytes = read_request(&mut cursor, 8192).unwrap();
        assert_eq!(Request::parse(&bytes).path(), "/x.txt");
    }

    #[test]
    fn test_read_request_timeout_keeps_partial_line() {
        for kind in [io::ErrorKind::WouldBlock, io::ErrorKind::TimedOut] {
            let mut reader = StallsAfter {
                data: Some(b"GET /index.html HTTP/1.1".to_vec()),
                kind,
            };
            let bytes = read_request(&mut reader, 8192).unwrap();
            assert_eq!(Request::parse(&bytes).path(), "/index.html");
        }
    }

    #[test]
    fn test_read_request_timeout_without_data_is_error() {
        let mut reader = StallsAfter {
            data: None,
            kind: io::ErrorKind::WouldBlock,
        };
        assert_eq!(
            read_request(&mut reader, 8192),
            Err(ParseError::Io(io::ErrorKind::WouldBlock))
        );
    }

    #[test]
    fn test_parse_splits_only_on_ascii_whitespace() {
        let request = Request::parse("GET /a\u{a0}b.html\tHTTP/1.1\r\n".as_bytes());

        assert_eq!(request.path(), "/a\u{a0}b.html");
    }

    #[test]
    fn test_read_request_too_large() {
        let mut cursor = Cursor::new(vec![b'a'; 100]);
        assert_eq!(
            read_request(&mut cursor, 64),
            Err(ParseError::TooLarge { limit: 64 })
        );
    }

    #[test]
    fn test_read_request_line_exactly_at_limit() {
        let line = b"GET /abc HTTP/1.1\n";
        let mut cursor = Cursor::new(line.to_vec());
        let bytes = read_request(&mut cursor, line.len()).unwrap();
        assert_eq!(bytes.len(), line.len());
    }
}
