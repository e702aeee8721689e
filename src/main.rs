//! `ifhwaddr`: print the hardware address of network interfaces.

use std::path::Path;
use std::process::ExitCode;

use ifhwaddr::config::{Cli, Command, ValidatedConfig, write_default_config};
use ifhwaddr::network::platform::PlatformBackend;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Configuration error: {error}");
            print_config_hint(&error);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    lookup_all(&config)
}

fn init(output: &Path) -> ExitCode {
    if let Err(error) = write_default_config(output) {
        eprintln!("{error}");
        return exit_code::CONFIG_ERROR;
    }
    println!("Wrote {}", output.display());
    exit_code::SUCCESS
}

#[cfg(not(tarpaulin_include))]
fn lookup_all(config: &ValidatedConfig) -> ExitCode {
    let backend = PlatformBackend::default();
    let mut stdout = std::io::stdout().lock();

    match run::execute(config, &backend, &mut stdout) {
        Ok(()) => exit_code::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            exit_code::lookup_failed()
        }
    }
}
