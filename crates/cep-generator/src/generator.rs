//! Range sampling and CEP formatting.
//!
//! Sampling is driven by any [`rand::Rng`] handed in by the caller, so a
//! seeded [`ChaCha8Rng`] reproduces the same codes for the same inputs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CepError;

/// Number of digits in a CEP.
pub const CEP_DIGITS: usize = 8;

/// Largest value that fits in an 8-digit CEP.
pub const MAX_CEP_VALUE: u32 = 99_999_999;

/// Position of the `.` separator in the formatted code.
const DOT_POSITION: usize = 2;

/// Position of the `-` separator in the formatted code.
const DASH_POSITION: usize = 5;

/// A generated code together with the sub-region it was drawn from.
///
/// # Example
///
/// ```
/// use cep_generator::GeneratedCep;
///
/// let generated = GeneratedCep {
///     code: "69.910-123".to_owned(),
///     label: "Rio Branco".to_owned(),
/// };
///
/// assert_eq!(generated.value(), Some(69_910_123));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCep {
    /// Code formatted as `DD.DDD-DDD`.
    pub code: String,
    /// Sub-region label the code was generated for.
    pub label: String,
}

impl GeneratedCep {
    /// Returns the 8-digit integer embedded in the formatted code.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        let digits: String = self.code.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != CEP_DIGITS {
            return None;
        }
        digits.parse().ok()
    }
}

/// Draws a value uniformly from the closed interval `[start, end]`.
///
/// Callers pass bounds validated by [`crate::RegionEntry::bounds`]; a
/// degenerate interval collapses to `start`.
#[must_use]
pub fn sample_in_range<R>(rng: &mut R, start: u32, end: u32) -> u32
where
    R: Rng + ?Sized,
{
    if end <= start {
        return start;
    }
    rng.random_range(start..=end)
}

/// Formats a value as a CEP, zero-padded to eight digits.
///
/// # Errors
///
/// Returns [`CepError::ValueOutOfRange`] when the value has more than eight
/// digits.
///
/// # Examples
///
/// ```
/// use cep_generator::format_cep;
///
/// assert_eq!(format_cep(69_910_123).as_deref(), Ok("69.910-123"));
/// assert_eq!(format_cep(1_000_000).as_deref(), Ok("01.000-000"));
/// assert!(format_cep(100_000_000).is_err());
/// ```
pub fn format_cep(value: u32) -> Result<String, CepError> {
    if value > MAX_CEP_VALUE {
        return Err(CepError::ValueOutOfRange { value });
    }

    let digits = format!("{value:08}");
    let mut code = String::with_capacity(CEP_DIGITS + 2);
    for (position, digit) in digits.chars().enumerate() {
        match position {
            DOT_POSITION => code.push('.'),
            DASH_POSITION => code.push('-'),
            _ => {}
        }
        code.push(digit);
    }
    Ok(code)
}

/// Builds the random source used for generation.
///
/// Returns the seed actually used alongside the generator. Without an
/// explicit seed one is drawn from the thread RNG. The resolved seed is
/// logged at `info`, which is enough to replay a run.
///
/// # Example
///
/// ```
/// use cep_generator::seeded_rng;
/// use rand::Rng;
///
/// let (seed, mut first) = seeded_rng(Some(42));
/// let (_, mut second) = seeded_rng(Some(seed));
///
/// assert_eq!(first.random::<u32>(), second.random::<u32>());
/// ```
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> (u64, ChaCha8Rng) {
    let resolved = seed.unwrap_or_else(random_seed);
    info!(seed = resolved, explicit = seed.is_some(), "seeded random source");
    (resolved, ChaCha8Rng::seed_from_u64(resolved))
}

fn random_seed() -> u64 {
    rand::rng().random()
}
