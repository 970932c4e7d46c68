//! joshua-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use joshua_setup::cli::{Cli, CommandDispatcher};
use joshua_setup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set up logging to stderr.
///
/// `--debug` forces debug level for this crate; otherwise `RUST_LOG` is
/// honored, falling back to warnings only. Stdout stays reserved for the
/// installer's own output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("joshua_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("joshua_setup=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("Parsed arguments: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(OutputMode::from_flags(cli.verbose, cli.quiet));
    let dispatcher = CommandDispatcher::new(cli.project.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
