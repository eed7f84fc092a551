//! Error types for CEP lookup and generation.
//!
//! Unknown leading digits are not errors: listing sub-regions for them yields
//! an empty list. The variants here cover the cases where a code cannot be
//! produced at all.

use thiserror::Error;

/// Errors that can occur while resolving a sub-region or producing a code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CepError {
    /// No catalog entry matches the digit and label pair.
    #[error("Subregião inválida para o primeiro dígito fornecido.")]
    InvalidSubregion {
        /// Leading digit supplied by the caller.
        digit: String,
        /// Sub-region label supplied by the caller.
        label: String,
    },

    /// A catalog entry holds a bound that is not an 8-digit number, or its
    /// start lies above its end.
    #[error("malformed CEP range '{range_start}'..='{range_end}' for '{label}'")]
    MalformedRange {
        /// Raw start bound from the table.
        range_start: String,
        /// Raw end bound from the table.
        range_end: String,
        /// Label of the offending entry.
        label: String,
    },

    /// A numeric value has more than eight digits and cannot be a CEP.
    #[error("value {value} does not fit in an 8-digit CEP")]
    ValueOutOfRange {
        /// The rejected value.
        value: u32,
    },
}
