//! Synthetic Brazilian postal code (CEP) generation by region.
//!
//! A static catalog maps each leading digit to an ordered list of
//! sub-regions, each owning an inclusive range of 8-digit codes. Generating
//! a code picks the first sub-region whose label matches, draws a value
//! uniformly from its range, and formats it as `DD.DDD-DDD`.
//!
//! # Overview
//!
//! - Listing sub-regions for a leading digit (unknown digits list nothing)
//! - Seedable generation through any [`rand::Rng`]
//! - An interactive prompt flow in [`prompt_cli`], configured by
//!   [`CepSettings`]
//!
//! # Example
//!
//! ```
//! use cep_generator::{CepError, RegionCatalog, seeded_rng};
//!
//! let catalog = RegionCatalog::brazil();
//! let (_, mut rng) = seeded_rng(Some(2026));
//!
//! let labels = catalog.list_subregions("9");
//! assert_eq!(labels.first(), Some(&"Porto Alegre"));
//!
//! let generated = catalog
//!     .generate_code(&mut rng, "9", "Porto Alegre")
//!     .expect("known sub-region");
//! assert_eq!(generated.code.len(), 10);
//!
//! assert!(matches!(
//!     catalog.generate_code(&mut rng, "0", "does-not-exist"),
//!     Err(CepError::InvalidSubregion { .. })
//! ));
//! ```

mod catalog;
mod error;
mod generator;
pub mod prompt_cli;
mod regions;
mod settings;

pub use catalog::{RegionCatalog, RegionEntry, RegionGroup};
pub use error::CepError;
pub use generator::{
    CEP_DIGITS, GeneratedCep, MAX_CEP_VALUE, format_cep, sample_in_range, seeded_rng,
};
pub use settings::CepSettings;
