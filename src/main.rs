//! # Folder Server - Entry Point
//! src/main.rs
//!
//! Uso: `folder_server <port> <rootFolder> [blockedExt ...]`
//!
//! Salida en stdout (para los scripts que lanzan el proceso):
//! - Sin los dos argumentos obligatorios: nada, código 0
//! - Error al abrir el puerto: `{"status":false}`, código 1
//! - Fin del ciclo de accept: `{"status":true}`, código 0

use clap::error::ErrorKind;
use clap::Parser;
use folder_server::config::Config;
use folder_server::logging;
use folder_server::server::Server;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        // Sin puerto o carpeta: no se inicia nada
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => return ExitCode::SUCCESS,
        Err(e) => e.exit(),
    };

    logging::init(&config.log_level);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuración inválida");
        println!(r#"{{"status":false}}"#);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let mut server = Server::new(config);

    match server.run() {
        Ok(()) => {
            println!(r#"{{"status":true}}"#);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fatal");
            println!(r#"{{"status":false}}"#);
            ExitCode::FAILURE
        }
    }
}
