//! Target analysis mode.

use super::HandlerResult;
use super::config::{effective_config, load_config};
use crate::link::LinkTarget;
use crate::{Cli, JsonReporter, OutputFormat, Reporter, TerminalReporter, Verdict};
use std::fs;
use tracing::{debug, info};

/// Turn a CLI target into the link that gets filtered and analyzed.
///
/// Bare hostnames keep their non-ASCII spelling so it reaches the homoglyph
/// check instead of being converted to punycode.
pub fn resolve_target(target: &str) -> Option<LinkTarget> {
    LinkTarget::parse(target)
}

/// Run normal analysis over the CLI targets.
pub fn run_analyze_mode(cli: &Cli) -> HandlerResult {
    let config = match load_config(cli) {
        Ok(config) => effective_config(cli, config),
        Err(e) => {
            eprintln!("Error: {}", e);
            return HandlerResult::Error(2);
        }
    };

    let analyzer = config.analyzer();
    let scope = config.preferences.sensitivity;
    info!(targets = cli.targets.len(), trusted = analyzer.trusted().len(), %scope, "Starting analysis");

    let mut verdicts: Vec<Verdict> = Vec::with_capacity(cli.targets.len());
    for target in &cli.targets {
        let link = resolve_target(target)
            .filter(|link| link.should_inspect(cli.page_host.as_deref(), scope));
        let Some(link) = link else {
            debug!(target = %target, "Skipping link outside scope");
            eprintln!("Skipped (outside {} scope): {}", scope, target);
            continue;
        };
        verdicts.push(analyzer.analyze(&link.host));
    }

    let output = match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(config.preferences.ui_preset)
            .with_verbose(cli.verbose)
            .report(&verdicts),
        OutputFormat::Json => JsonReporter::new().report(&verdicts),
    };

    if let Some(ref output_path) = cli.output {
        if let Err(e) = fs::write(output_path, &output) {
            eprintln!("Failed to write output to {}: {}", output_path.display(), e);
            return HandlerResult::Error(2);
        }
        println!("Output written to {}", output_path.display());
    } else {
        println!("{}", output);
    }

    if verdicts.iter().any(Verdict::is_danger) {
        HandlerResult::Error(1)
    } else {
        HandlerResult::Success
    }
}
