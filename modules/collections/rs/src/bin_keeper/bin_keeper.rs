use std::collections::BTreeMap;

use eyre::{ensure, Result};

#[derive(Clone, PartialEq, Debug, Default)]
struct Bin {
    positions: Vec<u64>,
    values: Vec<f64>,
}

/// Binned index of (position, value) pairs for a single chromosome.
///
/// Positions are bucketed into fixed-width bins, `[0, bin_width)`, `[bin_width, 2 * bin_width)`,
/// etc., up to the `size_bound` of the chromosome. Range queries only visit the bins overlapping
/// the requested range. Bins are allocated lazily, so a large `size_bound` costs nothing until
/// the bins are populated.
#[derive(Clone, PartialEq, Debug)]
pub struct BinKeeper {
    bin_width: u64,
    size_bound: u64,
    bins: BTreeMap<u64, Bin>,
    len: usize,
}

impl BinKeeper {
    pub fn new(bin_width: u64, size_bound: u64) -> Result<Self> {
        ensure!(bin_width > 0, "Bin width must be positive");
        ensure!(size_bound > 0, "Chromosome size bound must be positive");
        Ok(Self {
            bin_width,
            size_bound,
            bins: BTreeMap::new(),
            len: 0,
        })
    }

    pub fn bin_width(&self) -> u64 {
        self.bin_width
    }

    pub fn size_bound(&self) -> u64 {
        self.size_bound
    }

    /// Total number of bins available for the chromosome
    pub fn bins(&self) -> u64 {
        self.size_bound / self.bin_width + 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn bin_of(&self, position: u64) -> u64 {
        position / self.bin_width
    }

    pub fn add(&mut self, position: u64, value: f64) -> Result<()> {
        ensure!(
            position <= self.size_bound,
            "Position {} is beyond the chromosome size bound {}",
            position,
            self.size_bound
        );

        let index = self.bin_of(position);
        let bin = self.bins.entry(index).or_default();
        bin.positions.push(position);
        bin.values.push(value);
        self.len += 1;
        Ok(())
    }

    /// All points with `start <= position <= end`. Points are ordered by bin, then by insertion
    /// order inside each bin.
    pub fn points_in(&self, start: u64, end: u64) -> impl Iterator<Item = (u64, f64)> + '_ {
        let bins = match start <= end {
            true => Some(self.bin_of(start)..=self.bin_of(end)),
            false => None,
        };

        bins.into_iter()
            .flat_map(move |bins| self.bins.range(bins))
            .flat_map(|(_, bin)| {
                bin.positions
                    .iter()
                    .copied()
                    .zip(bin.values.iter().copied())
            })
            .filter(move |(position, _)| start <= *position && *position <= end)
    }

    pub fn positions_in(&self, start: u64, end: u64) -> Vec<u64> {
        self.points_in(start, end).map(|(p, _)| p).collect()
    }

    pub fn values_in(&self, start: u64, end: u64) -> Vec<f64> {
        self.points_in(start, end).map(|(_, v)| v).collect()
    }

    /// First value stored exactly at the given position.
    pub fn value_at(&self, position: u64) -> Option<f64> {
        self.points_in(position, position).next().map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keeper() -> Result<BinKeeper> {
        let mut keeper = BinKeeper::new(10, 1_000)?;
        for (position, value) in [(1, 0.5), (9, 1.0), (10, 1.5), (25, 2.0), (999, 3.0)] {
            keeper.add(position, value)?;
        }
        Ok(keeper)
    }

    #[test]
    fn test_new() -> Result<()> {
        let keeper = BinKeeper::new(200, 260_000_000)?;
        assert_eq!(keeper.bin_width(), 200);
        assert_eq!(keeper.size_bound(), 260_000_000);
        assert_eq!(keeper.bins(), 1_300_001);
        assert!(keeper.is_empty());

        assert!(BinKeeper::new(0, 100).is_err());
        assert!(BinKeeper::new(10, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_add() -> Result<()> {
        let mut keeper = keeper()?;
        assert_eq!(keeper.len(), 5);
        assert_eq!(keeper.bin_of(9), 0);
        assert_eq!(keeper.bin_of(10), 1);

        // The bound itself is a valid position
        keeper.add(1_000, 4.0)?;
        assert!(keeper.add(1_001, 4.0).is_err());
        assert_eq!(keeper.len(), 6);
        Ok(())
    }

    #[test]
    fn test_range_queries() -> Result<()> {
        let keeper = keeper()?;

        assert_eq!(keeper.positions_in(0, 1_000), [1, 9, 10, 25, 999]);
        assert_eq!(keeper.positions_in(9, 10), [9, 10]);
        assert_eq!(keeper.values_in(5, 30), [1.0, 1.5, 2.0]);
        assert_eq!(
            keeper.points_in(20, 999).collect::<Vec<_>>(),
            [(25, 2.0), (999, 3.0)]
        );

        assert!(keeper.positions_in(11, 24).is_empty());
        assert!(keeper.positions_in(30, 10).is_empty());

        assert_eq!(keeper.value_at(25), Some(2.0));
        assert_eq!(keeper.value_at(26), None);
        Ok(())
    }
}
