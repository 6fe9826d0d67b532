use clap::Parser;
use linkguard::{
    Cli,
    handlers::{HandlerResult, handle_save_preferences, handle_stdin_mode, run_analyze_mode},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle --save-preferences, then continue if there is work left
    if cli.save_preferences {
        let result = handle_save_preferences(&cli);
        if result != HandlerResult::Success || (cli.targets.is_empty() && !cli.stdin) {
            return result.into();
        }
    }

    if cli.stdin {
        return handle_stdin_mode(&cli).into();
    }

    run_analyze_mode(&cli).into()
}
