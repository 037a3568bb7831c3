//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Decide qué respuesta corresponde a un request ya parseado.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → classify ─┬─ Listing ─────────────→ list_folder(root)
//!                     └─ File ─┬─ bloqueado ──→ error 403
//!                              └─ resolve_file → read_file → archivo | 404 | 500
//! ```
//!
//! El filtro de extensiones se consulta antes de tocar el disco, y de nuevo
//! sobre el path canónico: un symlink permitido no puede apuntar a un
//! archivo bloqueado.

use crate::config::Config;
use crate::error::ServeError;
use crate::files::{listing, reader, resolver, ExtensionFilter, Target};
use crate::http::{Request, Response};
use std::path::{Path, PathBuf};

/// Router inmutable compartido por todas las conexiones
#[derive(Debug, Clone)]
pub struct Router {
    /// Carpeta raíz configurada
    root: PathBuf,

    /// Extensiones bloqueadas
    filter: ExtensionFilter,
}

impl Router {
    /// Crea un router para una carpeta raíz y un filtro
    pub fn new(root: impl Into<PathBuf>, filter: ExtensionFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    /// Crea el router a partir de la configuración del servidor
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.root.clone(),
            ExtensionFilter::new(config.blocked_extensions.as_slice()),
        )
    }

    /// Carpeta raíz que sirve este router
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Encuentra y genera la respuesta apropiada para un request
    ///
    /// # Ejemplo
    /// ```
    /// use folder_server::files::ExtensionFilter;
    /// use folder_server::http::Request;
    /// use folder_server::router::Router;
    ///
    /// let router = Router::new("/srv/www", ExtensionFilter::new(&[".exe"]));
    /// let response = router.route(&Request::parse(b"GET /tool.exe HTTP/1.1\r\n"));
    /// assert_eq!(response.body(), br#"{"status":false,"code":403}"#);
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        match resolver::classify(request.path()) {
            Target::Listing => {
                let listing = listing::list_folder(&self.root, &self.filter);
                Response::json(listing.to_json())
            }
            Target::File(relative) => match self.serve_file(&relative) {
                Ok(body) => Response::new(body.content_type, body.bytes),
                Err(err) => Response::error(err),
            },
        }
    }

    fn serve_file(&self, relative: &str) -> Result<reader::FileBody, ServeError> {
        if self.filter.is_blocked(relative) {
            return Err(ServeError::Forbidden);
        }

        let path = resolver::resolve_file(&self.root, relative)?;
        if self.filter.is_blocked(&path.to_string_lossy()) {
            return Err(ServeError::Forbidden);
        }

        reader::read_file(&path, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// Carpeta con index.html y secret.exe, bloqueando .exe
    fn scenario() -> (TempDir, Router) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>Hi</h1>").unwrap();
        fs::write(dir.path().join("secret.exe"), "MZ....").unwrap();
        let router = Router::new(dir.path(), ExtensionFilter::new(&[".exe"]));
        (dir, router)
    }

    fn get(router: &Router, path: &str) -> Response {
        let raw = format!("GET {} HTTP/1.1\r\n\r\n", path);
        router.route(&Request::parse(raw.as_bytes()))
    }

    #[test]
    fn test_root_listing() {
        let (_dir, router) = scenario();
        let response = get(&router, "/");

        assert_eq!(response.body(), br#"{"status":true,"data":["index.html"]}"#);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_empty_path_lists_root() {
        let (_dir, router) = scenario();
        let response = router.route(&Request::parse(b"GET\r\n"));
        assert_eq!(response.body(), br#"{"status":true,"data":["index.html"]}"#);
    }

    #[test]
    fn test_subfolder_request_lists_root() {
        let (dir, router) = scenario();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("inner.txt"), "x").unwrap();

        let response = get(&router, "/docs/");
        let text = String::from_utf8(response.body().to_vec()).unwrap();

        assert!(text.contains("index.html"));
        assert!(text.contains("docs"));
        assert!(!text.contains("inner.txt"));
    }

    #[test]
    fn test_serves_file() {
        let (_dir, router) = scenario();
        let response = get(&router, "/index.html");

        assert_eq!(response.body(), b"<h1>Hi</h1>");
        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.header("Content-Length"), Some("11"));
        assert!(response.error_kind().is_none());
    }

    #[test]
    fn test_blocked_file_is_forbidden() {
        let (_dir, router) = scenario();
        let response = get(&router, "/secret.exe");

        assert_eq!(response.body(), br#"{"status":false,"code":403}"#);
        assert_eq!(response.error_kind(), Some(ServeError::Forbidden));
    }

    #[test]
    fn test_blocked_file_case_insensitive() {
        let (_dir, router) = scenario();
        let response = get(&router, "/SECRET.EXE");
        assert_eq!(response.body(), br#"{"status":false,"code":403}"#);
    }

    #[test]
    fn test_blocked_even_when_missing() {
        let (_dir, router) = scenario();
        let response = get(&router, "/nothing.exe");
        assert_eq!(response.error_kind(), Some(ServeError::Forbidden));
    }

    #[test]
    fn test_missing_file() {
        let (_dir, router) = scenario();
        let response = get(&router, "/missing.txt");
        assert_eq!(response.body(), br#"{"status":false,"code":404}"#);
    }

    #[test]
    fn test_traversal_is_forbidden() {
        let (_dir, router) = scenario();
        let response = get(&router, "/../etc/passwd");
        assert_eq!(response.error_kind(), Some(ServeError::Forbidden));
    }

    #[test]
    fn test_directory_without_trailing_separator_is_not_found() {
        let (dir, router) = scenario();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let response = get(&router, "/docs");
        assert_eq!(response.error_kind(), Some(ServeError::NotFound));
    }

    #[test]
    fn test_missing_root_listing_fails() {
        let dir = tempdir().unwrap();
        let router = Router::new(dir.path().join("gone"), ExtensionFilter::default());

        let response = get(&router, "/");
        assert_eq!(response.body(), br#"{"status":false,"data":[]}"#);
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let (dir, router) = scenario();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let response = get(&router, "/notes.txt");
        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_repeated_request_is_identical() {
        let (_dir, router) = scenario();

        for path in ["/", "/index.html", "/secret.exe", "/missing.txt"] {
            let first = get(&router, path).to_bytes();
            let second = get(&router, path).to_bytes();
            assert_eq!(first, second, "path {}", path);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_content_type_uses_requested_name() {
        let (dir, router) = scenario();
        fs::write(dir.path().join("page.v2"), "<p>v2</p>").unwrap();
        std::os::unix::fs::symlink(dir.path().join("page.v2"), dir.path().join("page.html"))
            .unwrap();

        let response = get(&router, "/page.html");
        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.body(), b"<p>v2</p>");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_blocked_file_is_forbidden() {
        let (dir, router) = scenario();
        std::os::unix::fs::symlink(dir.path().join("secret.exe"), dir.path().join("ok.txt"))
            .unwrap();

        let response = get(&router, "/ok.txt");
        assert_eq!(response.error_kind(), Some(ServeError::Forbidden));
        assert_eq!(response.body(), br#"{"status":false,"code":403}"#);
    }

    #[test]
    fn test_from_config() {
        let dir = tempdir().unwrap();
        let config = Config::new(0, dir.path(), &["EXE"]);
        let router = Router::from_config(&config);

        assert_eq!(router.root(), dir.path());
        fs::write(dir.path().join("x.exe"), "x").unwrap();
        assert_eq!(get(&router, "/x.exe").error_kind(), Some(ServeError::Forbidden));
    }
}
