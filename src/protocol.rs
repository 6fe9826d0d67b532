//! Line-delimited JSON message protocol for host integrations.
//!
//! Each input line is a message object. `LINKGUARD_ANALYZE` messages are
//! answered with the serialized verdict; any other message type is answered
//! with `null`. Malformed lines get an `{"error": ...}` object and do not stop
//! the stream.

use crate::analyzer::DomainAnalyzer;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const ANALYZE_MESSAGE: &str = "LINKGUARD_ANALYZE";

/// Incoming message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

/// Answer a single message line. Returns `None` for blank lines.
pub fn respond(analyzer: &DomainAnalyzer, line: &str) -> Result<Option<String>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let reply = match serde_json::from_str::<Message>(line) {
        Ok(message) if message.kind == ANALYZE_MESSAGE => {
            let verdict = analyzer.analyze(message.domain.as_deref().unwrap_or_default());
            serde_json::to_string(&verdict)?
        }
        Ok(message) => {
            debug!(kind = %message.kind, "Ignoring message");
            "null".to_string()
        }
        Err(e) => {
            warn!(error = %e, "Malformed message");
            serde_json::to_string(&ErrorReply {
                error: e.to_string(),
            })?
        }
    };

    Ok(Some(reply))
}

/// Serve messages from `input` until EOF, writing one reply line per message.
pub fn serve<R: BufRead, W: Write>(analyzer: &DomainAnalyzer, input: R, mut output: W) -> Result<usize> {
    let mut answered = 0;
    for line in input.lines() {
        let line = line?;
        if let Some(reply) = respond(analyzer, &line)? {
            writeln!(output, "{}", reply)?;
            output.flush()?;
            answered += 1;
        }
    }
    Ok(answered)
}
