// Format description: https://genome.ucsc.edu/goldenPath/help/wiggle.html
//
// Supported dialect (as written by tiling-array and peak-calling tools):
// - `track ...`, `browser ...` and `# ...` lines are metadata and are skipped
// - `variableStep chrom=<name> [span=<bp>]` is followed by `<position> <value>` lines
// - `fixedStep chrom=<name> start=<pos> step=<bp> [span=<bp>]` is followed by `<value>` lines;
//   positions are start, start + step, start + 2 * step, ...
//
// Positions must be sorted within each chromosome, this is not validated.
// Key-value pairs are looked up by their last occurrence in the header line.

mod config;
mod error;
pub mod header;
mod line;
mod parser;
mod reader;
mod sink;
mod state;

pub use config::{BinnedConfig, CHROM_LENGTH_MARGIN, DEFAULT_BIN_WIDTH, DEFAULT_CHROM_LENGTH};
pub use error::Error;
pub use header::{Header, Step};
pub use line::{classify, LineKind};
pub use parser::{parse, ParseSummary, SkippedLine};
pub use reader::Reader;
pub use sink::{
    BinKeeperFactory, BinnedIndex, IndexBuilder, IndexFactory, Sink, TrackBuilder, TrackSink,
};
pub use state::{DataPoint, Mode, State, UNKNOWN_CHROM};
