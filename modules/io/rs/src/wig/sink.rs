use std::collections::HashMap;

use eyre::{OptionExt, Result};
use wigkit_collections_rs::{BinKeeper, WigTrack};

use super::config::BinnedConfig;
use super::header::Header;
use super::state::DataPoint;

/// Receiver of the parser events. Headers are reported before the data lines they introduce.
pub trait Sink {
    fn header(&mut self, _header: &Header<'_>) -> Result<()> {
        Ok(())
    }

    fn point(&mut self, point: DataPoint<'_>) -> Result<()>;
}

/// Ordered track that accepts points one by one and a single span value at the end of a parse.
pub trait TrackSink {
    fn add_loc(&mut self, chrom: &str, position: u64, value: f64) -> Result<()>;

    fn set_span(&mut self, span: u64);
}

impl TrackSink for WigTrack {
    fn add_loc(&mut self, chrom: &str, position: u64, value: f64) -> Result<()> {
        WigTrack::add_loc(self, chrom, position, value);
        Ok(())
    }

    fn set_span(&mut self, span: u64) {
        WigTrack::set_span(self, span);
    }
}

/// Per-chromosome spatial index
pub trait BinnedIndex {
    fn add(&mut self, position: u64, value: f64) -> Result<()>;
}

impl BinnedIndex for BinKeeper {
    fn add(&mut self, position: u64, value: f64) -> Result<()> {
        BinKeeper::add(self, position, value)
    }
}

/// Creates an empty [BinnedIndex] for a chromosome.
pub trait IndexFactory {
    type Index: BinnedIndex;

    fn create_index(&mut self, chrom: &str, bin_width: u64, size_bound: u64)
        -> Result<Self::Index>;
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BinKeeperFactory;

impl IndexFactory for BinKeeperFactory {
    type Index = BinKeeper;

    fn create_index(&mut self, _: &str, bin_width: u64, size_bound: u64) -> Result<BinKeeper> {
        BinKeeper::new(bin_width, size_bound)
    }
}

/// Sink appending every point to a [TrackSink]. The span is not stamped here: it is known only
/// once the parse is over.
pub struct TrackBuilder<'a, T: ?Sized> {
    track: &'a mut T,
}

impl<'a, T: TrackSink + ?Sized> TrackBuilder<'a, T> {
    pub fn new(track: &'a mut T) -> Self {
        Self { track }
    }
}

impl<T: TrackSink + ?Sized> Sink for TrackBuilder<'_, T> {
    fn point(&mut self, point: DataPoint<'_>) -> Result<()> {
        self.track.add_loc(point.chrom, point.position, point.value)
    }
}

/// Sink routing points into per-chromosome indexes, created on the first header or point that
/// mentions the chromosome.
pub struct IndexBuilder<'a, F: IndexFactory + ?Sized> {
    factory: &'a mut F,
    config: &'a BinnedConfig,
    indexes: HashMap<String, F::Index>,
}

impl<'a, F: IndexFactory + ?Sized> IndexBuilder<'a, F> {
    pub fn new(factory: &'a mut F, config: &'a BinnedConfig) -> Self {
        Self {
            factory,
            config,
            indexes: HashMap::new(),
        }
    }

    fn index(&mut self, chrom: &str) -> Result<&mut F::Index> {
        if !self.indexes.contains_key(chrom) {
            let bin_width = *self.config.bin_width();
            let size_bound = self.config.size_bound(chrom);
            log::debug!(
                "Creating index for {chrom}: bin width {bin_width}, size bound {size_bound}"
            );

            let index = self.factory.create_index(chrom, bin_width, size_bound)?;
            self.indexes.insert(chrom.to_owned(), index);
        }
        self.indexes
            .get_mut(chrom)
            .ok_or_eyre("Index was not registered")
    }

    pub fn finish(self) -> HashMap<String, F::Index> {
        self.indexes
    }
}

impl<F: IndexFactory + ?Sized> Sink for IndexBuilder<'_, F> {
    fn header(&mut self, header: &Header<'_>) -> Result<()> {
        self.index(header.chrom)?;
        Ok(())
    }

    fn point(&mut self, point: DataPoint<'_>) -> Result<()> {
        self.index(point.chrom)?.add(point.position, point.value)
    }
}

/// Sink forwarding points to a closure.
pub(crate) struct PointFn<F>(pub F);

impl<F> Sink for PointFn<F>
where
    F: FnMut(DataPoint<'_>) -> Result<()>,
{
    fn point(&mut self, point: DataPoint<'_>) -> Result<()> {
        (self.0)(point)
    }
}
