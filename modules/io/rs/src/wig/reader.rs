use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use derive_getters::Dissolve;
use eyre::{ensure, Result, WrapErr};
use wigkit_collections_rs::{BinKeeper, WigTrack};

use super::config::BinnedConfig;
use super::parser::{self, ParseSummary};
use super::sink::{
    BinKeeperFactory, IndexBuilder, IndexFactory, PointFn, Sink, TrackBuilder, TrackSink,
};
use super::state::DataPoint;
use crate::LineSource;

/// WIG reader that can build an ordered track or per-chromosome binned indexes.
///
/// Every pass reads the source to the end and rewinds it, so the same reader can be used for
/// several builds in a row:
/// ```no_run
/// # fn main() -> eyre::Result<()> {
/// use wigkit_io_rs::wig::{BinnedConfig, Reader};
///
/// let mut reader = Reader::from_path("sample.wig")?;
/// let track = reader.build_track()?;
/// let indexes = reader.build_bin_keepers(&BinnedConfig::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Dissolve)]
pub struct Reader<S> {
    source: S,
}

impl Reader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        ensure!(path.exists(), "File {} does not exist", path.display());

        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open WIG file {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<S: LineSource> Reader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run a full pass over the source and rewind it afterwards. The rewind is attempted even if
    /// the pass fails, the parsing error takes precedence over the rewind error.
    pub fn parse<K: Sink + ?Sized>(&mut self, sink: &mut K) -> Result<ParseSummary> {
        let result = parser::parse(&mut self.source, sink);
        let rewind = self
            .source
            .rewind()
            .wrap_err("Failed to rewind the WIG source");

        let summary = result?;
        rewind?;

        log::debug!(
            "Parsed {} WIG lines: {} points, {} skipped",
            summary.lines(),
            summary.points(),
            summary.skipped().len()
        );
        Ok(summary)
    }

    /// Run a full pass, calling `f` for every data point.
    pub fn for_each_point<F>(&mut self, f: F) -> Result<ParseSummary>
    where
        F: FnMut(DataPoint<'_>) -> Result<()>,
    {
        self.parse(&mut PointFn(f))
    }

    /// Append all points to the given track and stamp it with the span of the last section.
    pub fn build_track_into<T: TrackSink + ?Sized>(
        &mut self,
        track: &mut T,
    ) -> Result<ParseSummary> {
        let summary = self.parse(&mut TrackBuilder::new(track))?;
        track.set_span(*summary.span());
        Ok(summary)
    }

    pub fn build_track(&mut self) -> Result<WigTrack> {
        let mut track = WigTrack::new();
        self.build_track_into(&mut track)?;
        Ok(track)
    }

    /// Build one index per chromosome with the given factory.
    pub fn build_indexes<F: IndexFactory + ?Sized>(
        &mut self,
        factory: &mut F,
        config: &BinnedConfig,
    ) -> Result<HashMap<String, F::Index>> {
        let mut builder = IndexBuilder::new(factory, config);
        self.parse(&mut builder)?;
        Ok(builder.finish())
    }

    pub fn build_bin_keepers(
        &mut self,
        config: &BinnedConfig,
    ) -> Result<HashMap<String, BinKeeper>> {
        self.build_indexes(&mut BinKeeperFactory, config)
    }
}
