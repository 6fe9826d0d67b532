//! Message protocol mode over stdin/stdout.

use super::HandlerResult;
use super::config::{effective_config, load_config};
use crate::Cli;
use crate::protocol::serve;
use std::io;
use tracing::info;

/// Handle --stdin: answer JSON-line messages until EOF.
pub fn handle_stdin_mode(cli: &Cli) -> HandlerResult {
    let config = match load_config(cli) {
        Ok(config) => effective_config(cli, config),
        Err(e) => {
            eprintln!("Error: {}", e);
            return HandlerResult::Error(2);
        }
    };
    let analyzer = config.analyzer();

    info!("Serving analysis requests on stdin");
    let stdin = io::stdin();
    let stdout = io::stdout();
    match serve(&analyzer, stdin.lock(), stdout.lock()) {
        Ok(answered) => {
            info!(answered, "Input closed");
            HandlerResult::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            HandlerResult::Error(2)
        }
    }
}
