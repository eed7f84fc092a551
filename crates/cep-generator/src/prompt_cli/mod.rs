//! Interactive prompt flow for generating a CEP.
//!
//! The binary delegates to [`run`] so the whole conversation can be driven
//! from in-memory buffers in tests. Prompts and messages are in Portuguese,
//! matching the labels in the region table.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info};

use crate::catalog::RegionCatalog;
use crate::error::CepError;
use crate::generator::GeneratedCep;

mod error;

pub use error::CliError;

/// Prompt asking for the leading digit.
pub const DIGIT_PROMPT: &str = "Digite o primeiro dígito do CEP (0 a 9): ";

/// Prompt asking for the sub-region number.
pub const SELECTION_PROMPT: &str = "Escolha o número da sub-região desejada: ";

/// Header printed above the numbered sub-region list.
pub const SUBREGIONS_HEADER: &str = "Sub-regiões disponíveis:";

/// Message printed when the digit has no sub-regions.
pub const UNKNOWN_DIGIT_MESSAGE: &str = "Primeiro dígito inválido.";

/// Message printed when the selection is not a listed number.
pub const INVALID_SELECTION_MESSAGE: &str = "Escolha inválida.";

/// Largest number of codes a single run may generate.
pub const MAX_COUNT: usize = 10_000;

/// How generated codes are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `CEP Gerado:` and `Região:` lines per code.
    #[default]
    Text,
    /// A pretty-printed JSON array of generated codes.
    Json,
}

/// Inputs for one pass through the prompt flow.
///
/// Preset values skip the matching prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Leading digit to use instead of prompting.
    pub digit: Option<String>,
    /// 1-based sub-region number to use instead of prompting.
    pub selection: Option<usize>,
    /// Number of codes to generate, in `1..=MAX_COUNT`.
    pub count: usize,
    /// Output format for generated codes.
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            digit: None,
            selection: None,
            count: 1,
            format: OutputFormat::default(),
        }
    }
}

/// How a pass through the prompt flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Codes were generated and written.
    Generated(Vec<GeneratedCep>),
    /// The digit has no sub-regions.
    UnknownDigit {
        /// Digit as entered.
        digit: String,
    },
    /// The selection was not a number in `[1, len]`.
    InvalidSelection {
        /// Selection as entered.
        input: String,
    },
    /// The catalog refused to generate a code for the chosen sub-region.
    Rejected(CepError),
}

/// Runs the prompt flow once.
///
/// Invalid input is reported on `output` and returned as an [`Outcome`];
/// only an out-of-range count and I/O or serialization failures are errors.
///
/// # Errors
///
/// Returns [`CliError::InvalidCount`] before prompting when `count` lies
/// outside `1..=MAX_COUNT`, and another [`CliError`] when reading `input`,
/// writing `output`, or rendering JSON fails.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// use cep_generator::RegionCatalog;
/// use cep_generator::prompt_cli::{Outcome, RunOptions, run};
/// use cep_generator::seeded_rng;
///
/// let mut input = Cursor::new("6\n17\n");
/// let mut output = Vec::new();
/// let (_, mut rng) = seeded_rng(Some(42));
///
/// let outcome = run(
///     &RegionCatalog::brazil(),
///     &RunOptions::default(),
///     &mut input,
///     &mut output,
///     &mut rng,
/// )
/// .expect("prompt flow");
///
/// assert!(matches!(outcome, Outcome::Generated(_)));
/// let text = String::from_utf8(output).expect("utf-8");
/// assert!(text.contains("Região: Rio Branco"));
/// ```
pub fn run<I, O, R>(
    catalog: &RegionCatalog,
    options: &RunOptions,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<Outcome, CliError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    R: Rng + ?Sized,
{
    if !(1..=MAX_COUNT).contains(&options.count) {
        return Err(CliError::InvalidCount {
            count: options.count,
            max: MAX_COUNT,
        });
    }

    let digit = options.digit.as_deref().map_or_else(
        || prompt(input, output, DIGIT_PROMPT),
        |preset| Ok(preset.trim().to_owned()),
    )?;

    let labels = catalog.list_subregions(&digit);
    if labels.is_empty() {
        writeln!(output, "{UNKNOWN_DIGIT_MESSAGE}")?;
        info!(digit = %digit, "unknown leading digit");
        return Ok(Outcome::UnknownDigit { digit });
    }

    writeln!(output, "{SUBREGIONS_HEADER}")?;
    for (number, label) in (1_usize..).zip(&labels) {
        writeln!(output, "{number}. {label}")?;
    }

    let raw_selection = options.selection.map_or_else(
        || prompt(input, output, SELECTION_PROMPT),
        |preset| Ok(preset.to_string()),
    )?;
    let Some(label) = resolve_selection(&labels, &raw_selection) else {
        writeln!(output, "{INVALID_SELECTION_MESSAGE}")?;
        info!(selection = %raw_selection, "invalid sub-region selection");
        return Ok(Outcome::InvalidSelection {
            input: raw_selection,
        });
    };

    let mut generated = Vec::new();
    for _ in 0..options.count {
        match catalog.generate_code(rng, &digit, label) {
            Ok(cep) => generated.push(cep),
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(Outcome::Rejected(err));
            }
        }
    }

    write_generated(output, &generated, options.format)?;
    debug!(count = generated.len(), "wrote generated codes");
    Ok(Outcome::Generated(generated))
}

/// Maps a 1-based selection onto the listed labels.
///
/// # Example
///
/// ```
/// use cep_generator::prompt_cli::resolve_selection;
///
/// let labels = ["SP Litoral", "SP Interior"];
///
/// assert_eq!(resolve_selection(&labels, "2"), Some("SP Interior"));
/// assert_eq!(resolve_selection(&labels, "0"), None);
/// assert_eq!(resolve_selection(&labels, "dois"), None);
/// ```
#[must_use]
pub fn resolve_selection<'a>(labels: &[&'a str], raw: &str) -> Option<&'a str> {
    let number: usize = raw.trim().parse().ok()?;
    let index = number.checked_sub(1)?;
    labels.get(index).copied()
}

fn prompt<I, O>(input: &mut I, output: &mut O, message: &str) -> Result<String, CliError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn write_generated<O>(
    output: &mut O,
    generated: &[GeneratedCep],
    format: OutputFormat,
) -> Result<(), CliError>
where
    O: Write + ?Sized,
{
    match format {
        OutputFormat::Text => {
            for cep in generated {
                writeln!(output, "CEP Gerado: {}", cep.code)?;
                writeln!(output, "Região: {}", cep.label)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(generated)?;
            writeln!(output, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
