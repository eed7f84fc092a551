//! Generator settings loaded via OrthoConfig.
//!
//! Every field is optional: anything left unset is asked for interactively
//! or falls back to a default.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::prompt_cli::{OutputFormat, RunOptions};

const DEFAULT_COUNT: usize = 1;

/// Settings for the `cep-generator` binary, read from flags and `CEP_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CEP")]
pub struct CepSettings {
    /// Leading digit; skips the digit prompt when set.
    ///
    /// Environment values arrive as numbers, so the digit is held as one and
    /// rendered as a catalog key in [`CepSettings::run_options`].
    pub digit: Option<u8>,
    /// 1-based sub-region number; skips the selection prompt when set.
    pub subregion: Option<usize>,
    /// Seed for the random source; drawn at random when unset.
    pub seed: Option<u64>,
    /// Number of codes to generate for the chosen sub-region.
    pub count: Option<usize>,
    /// Emit generated codes as JSON instead of text.
    #[ortho_config(default = false)]
    pub json: bool,
}

impl CepSettings {
    /// Return the configured code count, falling back to one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Return the selected output format.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Build the options consumed by [`crate::prompt_cli::run`].
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            digit: self.digit.map(|digit| digit.to_string()),
            selection: self.subregion,
            count: self.count(),
            format: self.output_format(),
        }
    }
}
