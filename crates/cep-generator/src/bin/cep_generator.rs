//! Interactive CEP generator.
//!
//! Settings come from `CepSettings`; anything not preset is prompted for on
//! stdin. Logs go to stderr and are filtered with `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use cep_generator::prompt_cli::{self, CliError};
use cep_generator::{CepSettings, RegionCatalog, seeded_rng};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings = CepSettings::load().map_err(|err| CliError::Config {
        message: err.to_string(),
    })?;
    let (_, mut rng) = seeded_rng(settings.seed);

    let outcome = prompt_cli::run(
        &RegionCatalog::brazil(),
        &settings.run_options(),
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut rng,
    )?;
    info!(?outcome, "prompt finished");
    Ok(())
}
