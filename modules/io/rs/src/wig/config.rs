use std::collections::HashMap;

use derive_getters::{Dissolve, Getters};

/// Bin width used when nothing else is requested
pub const DEFAULT_BIN_WIDTH: u64 = 200;
/// Expected chromosome length for chromosomes absent from the length mapping
pub const DEFAULT_CHROM_LENGTH: u64 = 250_000_000;
/// Added to every expected chromosome length to get the index size bound
pub const CHROM_LENGTH_MARGIN: u64 = 10_000_000;

/// Parameters of the per-chromosome binned indexes.
#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve)]
pub struct BinnedConfig {
    chrom_lengths: HashMap<String, u64>,
    bin_width: u64,
}

impl Default for BinnedConfig {
    fn default() -> Self {
        Self {
            chrom_lengths: HashMap::new(),
            bin_width: DEFAULT_BIN_WIDTH,
        }
    }
}

impl BinnedConfig {
    pub fn new(chrom_lengths: HashMap<String, u64>, bin_width: u64) -> Self {
        Self {
            chrom_lengths,
            bin_width,
        }
    }

    pub fn with_bin_width(mut self, bin_width: u64) -> Self {
        self.bin_width = bin_width;
        self
    }

    pub fn with_chrom_length(mut self, chrom: impl Into<String>, length: u64) -> Self {
        self.chrom_lengths.insert(chrom.into(), length);
        self
    }

    pub fn with_chrom_lengths<C: Into<String>>(
        mut self,
        lengths: impl IntoIterator<Item = (C, u64)>,
    ) -> Self {
        self.chrom_lengths
            .extend(lengths.into_iter().map(|(chrom, length)| (chrom.into(), length)));
        self
    }

    /// Upper bound on positions for the chromosome index: expected length + fixed margin.
    pub fn size_bound(&self, chrom: &str) -> u64 {
        self.chrom_lengths
            .get(chrom)
            .copied()
            .unwrap_or(DEFAULT_CHROM_LENGTH)
            .saturating_add(CHROM_LENGTH_MARGIN)
    }
}
