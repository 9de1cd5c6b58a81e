use ahash::AHashMap;
use derive_getters::Dissolve;
use itertools::Itertools;

use super::Summary;

/// Ordered per-chromosome signal track: (position, value) pairs grouped by chromosome.
///
/// Points are kept in insertion order and are never re-sorted. The track carries a single `span`
/// value shared by all chromosomes.
#[derive(Clone, PartialEq, Debug, Default, Dissolve)]
pub struct WigTrack {
    span: u64,
    data: AHashMap<String, (Vec<u64>, Vec<f64>)>,
}

impl WigTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_loc(&mut self, chrom: &str, position: u64, value: f64) {
        match self.data.get_mut(chrom) {
            Some((positions, values)) => {
                positions.push(position);
                values.push(value);
            }
            None => {
                self.data
                    .insert(chrom.to_owned(), (vec![position], vec![value]));
            }
        }
    }

    pub fn span(&self) -> u64 {
        self.span
    }

    pub fn set_span(&mut self, span: u64) {
        self.span = span;
    }

    /// Chromosome names in lexicographic order.
    pub fn chroms(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).sorted().collect()
    }

    /// Positions and values stored for the given chromosome.
    pub fn get(&self, chrom: &str) -> Option<(&[u64], &[f64])> {
        self.data
            .get(chrom)
            .map(|(positions, values)| (positions.as_slice(), values.as_slice()))
    }

    /// Total number of points across all chromosomes.
    pub fn len(&self) -> usize {
        self.data.values().map(|(positions, _)| positions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all points as (chromosome, position, value). Chromosomes are visited in
    /// lexicographic order, points inside a chromosome in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64, f64)> + '_ {
        self.data
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .flat_map(|(chrom, (positions, values))| {
                positions
                    .iter()
                    .zip(values.iter())
                    .map(move |(p, v)| (chrom.as_str(), *p, *v))
            })
    }

    /// New track with only the points whose value is >= cutoff. Chromosomes left without points
    /// are dropped.
    pub fn filter(&self, cutoff: f64) -> Self {
        let mut result = Self {
            span: self.span,
            data: AHashMap::new(),
        };
        for (chrom, position, value) in self.iter() {
            if value >= cutoff {
                result.add_loc(chrom, position, value);
            }
        }
        result
    }

    pub fn summary(&self) -> Summary {
        Summary::from_values(
            self.data
                .values()
                .flat_map(|(_, values)| values.iter().copied()),
        )
    }
}
