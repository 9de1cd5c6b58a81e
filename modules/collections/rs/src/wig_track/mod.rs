pub use summary::Summary;
pub use wig_track::WigTrack;

mod summary;
#[allow(clippy::module_inception)]
mod wig_track;
