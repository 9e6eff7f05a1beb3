//! Binscout CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use binscout::cli::{Cli, ResolutionReport};
use binscout::resolver::{ManagerQuery, Resolver, ToolSpec};
use binscout::shell::SystemRunner;
use binscout::version::probe_version;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("binscout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("binscout=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("binscout starting with args: {:?}", cli);

    let mut spec =
        ToolSpec::npm_tool(&cli.tool).with_manager_query(ManagerQuery::new(&cli.manager));
    if let Some(var) = &cli.env_var {
        spec = spec.with_override_var(var);
    }

    let runner = SystemRunner::with_timeout(Duration::from_secs(cli.timeout));

    // Resolved exactly once; everything below consumes this value.
    let resolution = Resolver::new(&spec, &runner).resolve();

    let version = if cli.verify {
        probe_version(&runner, &resolution.path)
    } else {
        None
    };

    if cli.json {
        let report = ResolutionReport::new(&cli.tool, &resolution, version);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        println!("{}", resolution.path.display());
        if let Some(version) = version {
            eprintln!("{} {}", cli.tool, version);
        }
    }

    ExitCode::SUCCESS
}
