//! Region catalog lookups and code generation.
//!
//! The catalog maps a leading digit to an ordered list of range entries. It
//! is a read-only view over a `'static` table, so it is `Copy` and can be
//! shared freely between threads; only the random source passed to
//! [`RegionCatalog::generate_code`] carries mutable state.

use rand::Rng;
use tracing::debug;

use crate::error::CepError;
use crate::generator::{CEP_DIGITS, GeneratedCep, format_cep, sample_in_range};
use crate::regions::BRAZIL;

const NO_ENTRIES: &[RegionEntry] = &[];

/// One sub-region: an inclusive range of 8-digit codes and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    range_start: &'static str,
    range_end: &'static str,
    label: &'static str,
}

impl RegionEntry {
    /// Creates an entry from raw 8-digit bounds and a label.
    ///
    /// Bounds are validated lazily by [`RegionEntry::bounds`].
    #[must_use]
    pub const fn new(
        range_start: &'static str,
        range_end: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            range_start,
            range_end,
            label,
        }
    }

    /// Returns the raw start bound.
    #[must_use]
    pub const fn range_start(&self) -> &'static str {
        self.range_start
    }

    /// Returns the raw end bound.
    #[must_use]
    pub const fn range_end(&self) -> &'static str {
        self.range_end
    }

    /// Returns the sub-region label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Parses both bounds as integers.
    ///
    /// # Errors
    ///
    /// Returns [`CepError::MalformedRange`] if either bound is not exactly
    /// eight ASCII digits or if the start lies above the end.
    ///
    /// # Example
    ///
    /// ```
    /// use cep_generator::RegionEntry;
    ///
    /// let entry = RegionEntry::new("69900000", "69920999", "Rio Branco");
    /// assert_eq!(entry.bounds(), Ok((69_900_000, 69_920_999)));
    /// ```
    pub fn bounds(&self) -> Result<(u32, u32), CepError> {
        let start = parse_bound(self.range_start).ok_or_else(|| self.malformed())?;
        let end = parse_bound(self.range_end).ok_or_else(|| self.malformed())?;
        if start > end {
            return Err(self.malformed());
        }
        Ok((start, end))
    }

    fn malformed(&self) -> CepError {
        CepError::MalformedRange {
            range_start: self.range_start.to_owned(),
            range_end: self.range_end.to_owned(),
            label: self.label.to_owned(),
        }
    }
}

fn parse_bound(raw: &str) -> Option<u32> {
    if raw.len() != CEP_DIGITS || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// The ordered entries registered under one leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGroup {
    digit: &'static str,
    entries: &'static [RegionEntry],
}

impl RegionGroup {
    /// Creates a group for `digit`.
    #[must_use]
    pub const fn new(digit: &'static str, entries: &'static [RegionEntry]) -> Self {
        Self { digit, entries }
    }

    /// Returns the leading digit this group is keyed by.
    #[must_use]
    pub const fn digit(&self) -> &'static str {
        self.digit
    }

    /// Returns the entries in table order.
    #[must_use]
    pub const fn entries(&self) -> &'static [RegionEntry] {
        self.entries
    }
}

/// Read-only mapping from leading digit to sub-region entries.
///
/// # Example
///
/// ```
/// use cep_generator::RegionCatalog;
///
/// let catalog = RegionCatalog::brazil();
///
/// assert_eq!(catalog.list_subregions("1"), vec!["SP Litoral", "SP Interior"]);
/// assert!(catalog.list_subregions("x").is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCatalog {
    groups: &'static [RegionGroup],
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::brazil()
    }
}

impl RegionCatalog {
    /// Wraps a static table of groups.
    #[must_use]
    pub const fn new(groups: &'static [RegionGroup]) -> Self {
        Self { groups }
    }

    /// Returns the built-in Brazilian table.
    #[must_use]
    pub const fn brazil() -> Self {
        Self::new(&BRAZIL)
    }

    /// Returns every group in table order.
    #[must_use]
    pub const fn groups(&self) -> &'static [RegionGroup] {
        self.groups
    }

    /// Returns the catalog keys in table order.
    pub fn digits(&self) -> impl Iterator<Item = &'static str> {
        self.groups.iter().map(RegionGroup::digit)
    }

    /// Returns the entries for `digit`, or an empty slice when the digit is
    /// not in the catalog.
    #[must_use]
    pub fn entries(&self, digit: &str) -> &'static [RegionEntry] {
        self.groups
            .iter()
            .find(|group| group.digit == digit)
            .map_or(NO_ENTRIES, |group| group.entries)
    }

    /// Lists sub-region labels for `digit` in table order.
    ///
    /// Duplicates are kept. An unknown digit yields an empty list rather
    /// than an error.
    #[must_use]
    pub fn list_subregions(&self, digit: &str) -> Vec<&'static str> {
        self.entries(digit).iter().map(RegionEntry::label).collect()
    }

    /// Finds the first entry under `digit` whose label equals `label`
    /// exactly.
    #[must_use]
    pub fn find_entry(&self, digit: &str, label: &str) -> Option<&'static RegionEntry> {
        self.entries(digit).iter().find(|entry| entry.label == label)
    }

    /// Generates a code inside the range of the first entry matching
    /// `digit` and `label`.
    ///
    /// # Errors
    ///
    /// Returns [`CepError::InvalidSubregion`] when no entry matches, and
    /// [`CepError::MalformedRange`] when the matched entry's bounds cannot be
    /// parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use cep_generator::{RegionCatalog, seeded_rng};
    ///
    /// let (_, mut rng) = seeded_rng(Some(42));
    /// let generated = RegionCatalog::brazil()
    ///     .generate_code(&mut rng, "6", "Rio Branco")
    ///     .expect("known sub-region");
    ///
    /// let value = generated.value().expect("8 digits");
    /// assert!((69_900_000..=69_920_999).contains(&value));
    /// assert_eq!(generated.label, "Rio Branco");
    /// ```
    pub fn generate_code<R>(
        &self,
        rng: &mut R,
        digit: &str,
        label: &str,
    ) -> Result<GeneratedCep, CepError>
    where
        R: Rng + ?Sized,
    {
        let entry = self
            .find_entry(digit, label)
            .ok_or_else(|| CepError::InvalidSubregion {
                digit: digit.to_owned(),
                label: label.to_owned(),
            })?;
        let (start, end) = entry.bounds()?;
        let code = format_cep(sample_in_range(rng, start, end))?;

        debug!(digit, label, code = %code, "generated CEP");
        Ok(GeneratedCep {
            code,
            label: label.to_owned(),
        })
    }
}
