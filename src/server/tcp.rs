//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP. El listener se crea con backlog 5 y cada
//! conexión aceptada se procesa en su propio thread, así un cliente lento no
//! bloquea a los demás. La configuración y el router son inmutables y se
//! comparten con `Arc`; cada conexión tiene sus propios buffers.
//!
//! Ciclo de vida de una conexión:
//!
//! ```text
//! Accepted → Parsed → Routed → Responded → Closed
//!     └──(lectura vacía/fallida/excesiva)──────┘
//! ```

use crate::config::Config;
use crate::error::StartupError;
use crate::http::request::{read_request, ParseError};
use crate::http::Request;
use crate::router::Router;
use socket2::{Domain, Protocol, Socket, Type};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant, SystemTime};
use tracing::{debug, error, info, info_span, warn};

/// Conexiones pendientes que el kernel encola antes de `accept`
pub const LISTEN_BACKLOG: i32 = 5;

/// Máximo de bytes sobrantes que se descartan antes de cerrar
const DRAIN_LIMIT: usize = 64 * 1024;

/// Timeout de lectura mientras se descartan bytes sobrantes
const DRAIN_TIMEOUT: Duration = Duration::from_millis(100);

/// Servidor HTTP de archivos
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let router = Router::from_config(&config);

        Self {
            config: Arc::new(config),
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Crea el socket de escucha (socket → bind → listen)
    ///
    /// Retorna la dirección real, útil cuando el puerto configurado es 0.
    pub fn bind(&mut self) -> Result<SocketAddr, StartupError> {
        let address = self.config.address();
        let listener = bind_listener(&address)?;
        let local = listener.local_addr().map_err(StartupError::Listen)?;

        info!(address = %local, backlog = LISTEN_BACKLOG, "Servidor escuchando");
        self.listener = Some(listener);
        Ok(local)
    }

    /// Ciclo de accept; bloquea el thread actual
    ///
    /// Solo retorna cuando `accept` falla (o si no se pudo hacer bind).
    pub fn run(&mut self) -> Result<(), StartupError> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = match self.listener.as_ref() {
            Some(listener) => listener,
            None => return Ok(()),
        };

        info!("Modo concurrente: un thread por conexión");

        loop {
            let (stream, peer) = match listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "Error al aceptar conexión, deteniendo servidor");
                    return Ok(());
                }
            };

            let config = Arc::clone(&self.config);
            let router = Arc::clone(&self.router);

            let spawned = thread::Builder::new()
                .name(format!("conn-{}", peer))
                .spawn(move || {
                    let request_id = request_id(&peer);
                    let span = info_span!("conn", req_id = %request_id, peer = %peer);
                    let _guard = span.enter();

                    if let Err(e) = handle_connection(stream, &router, &config) {
                        warn!(error = %e, "Error en thread de conexión");
                    }
                });

            if let Err(e) = spawned {
                error!(peer = %peer, error = %e, "No se pudo crear el thread de conexión");
            }
        }
    }
}

/// Crea el listener con `socket2` para poder fijar el backlog
fn bind_listener(address: &str) -> Result<TcpListener, StartupError> {
    let addr = address
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| StartupError::InvalidAddress(address.to_string()))?;

    let bind_error = |source: io::Error| StartupError::Bind {
        address: address.to_string(),
        source,
    };

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .map_err(bind_error)?;

    #[cfg(unix)]
    socket.set_reuse_address(true).map_err(bind_error)?;

    socket.bind(&addr.into()).map_err(bind_error)?;
    socket.listen(LISTEN_BACKLOG).map_err(StartupError::Listen)?;

    Ok(socket.into())
}

/// Identificador corto para correlacionar los logs de una conexión
fn request_id(peer: &SocketAddr) -> String {
    let mut hasher = DefaultHasher::new();
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .hash(&mut hasher);
    thread::current().id().hash(&mut hasher);
    peer.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Procesa una conexión completa: leer, parsear, enrutar, responder, cerrar
///
/// El stream se consume y se cierra una única vez al salir, pase lo que
/// pase. Si la lectura falla no se escribe ninguna respuesta.
pub fn handle_connection(mut stream: TcpStream, router: &Router, config: &Config) -> io::Result<()> {
    let start = Instant::now();

    stream.set_read_timeout(config.read_timeout())?;
    stream.set_write_timeout(config.write_timeout())?;

    // Accepted → Parsed
    let raw = match read_request(&mut stream, config.max_request_bytes) {
        Ok(raw) => raw,
        Err(ParseError::EmptyRequest) => {
            debug!("Conexión cerrada sin datos");
            return Ok(());
        }
        Err(e) => {
            warn!(error = %e, "Request descartado sin respuesta");
            linger_close(&mut stream);
            return Ok(());
        }
    };
    let request = Request::parse(&raw);

    // Parsed → Routed → Responded
    let response = router.route(&request);
    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    let outcome = match response.error_kind() {
        Some(err) => err.code(),
        None => 200,
    };
    info!(
        method = request.method(),
        path = request.path(),
        code = outcome,
        bytes = response.body().len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request atendido"
    );

    // Responded → Closed
    linger_close(&mut stream);
    Ok(())
}

/// Cierra la escritura y descarta lo que el cliente haya dejado sin leer
///
/// Cerrar un socket con datos pendientes en el buffer de entrada provoca un
/// RST que puede descartar la respuesta en el cliente.
fn linger_close(stream: &mut TcpStream) {
    if stream.shutdown(Shutdown::Write).is_err() {
        return;
    }
    if stream.set_read_timeout(Some(DRAIN_TIMEOUT)).is_err() {
        return;
    }

    let mut scratch = [0u8; 1024];
    let mut drained = 0;
    while drained < DRAIN_LIMIT {
        match stream.read(&mut scratch) {
            Ok(0) | Err(_) => break,
            Ok(n) => drained += n,
        }
    }
}
