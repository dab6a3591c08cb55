/*!
# Mood Journal

Interactive command-line mood journal. This file wires logging, configuration
and the interactive shell together.

## Usage

```text
mood-journal [OPTIONS]

Options:
      --journal <PATH>       Path of the JSON journal (overrides MOOD_JOURNAL_FILE)
      --export <PATH>        Path of the text export (overrides MOOD_EXPORT_FILE)
  -v, --verbose              Log debug output to stderr
      --log-format <FORMAT>  Format of log output on stderr [default: text] [possible values: text, json]
  -h, --help                 Print help
  -V, --version              Print version
```

## Configuration

- `MOOD_JOURNAL_FILE`: location of the JSON journal (defaults to `journal.json`)
- `MOOD_EXPORT_FILE`: location of the text export (defaults to `journal_export.txt`)
- `RUST_LOG`: log filter (defaults to `warn`)
*/

use chrono::Local;
use clap::Parser;
use mood_journal::cli::CliArgs;
use mood_journal::config::Config;
use mood_journal::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use mood_journal::errors::AppResult;
use mood_journal::shell::Shell;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args);

    let invocation_id = uuid::Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        invocation_id = %invocation_id
    );
    let _guard = span.enter();

    match run(&args) {
        Ok(()) => {
            info!("Session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?.with_cli_overrides(args)?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let today = Local::now().date_naive();
    let stdin = io::stdin();
    Shell::new(stdin.lock(), io::stdout(), &config, today).run()
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_logging(args: &CliArgs) {
    let filter = if args.verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    if args.json_logs() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}
