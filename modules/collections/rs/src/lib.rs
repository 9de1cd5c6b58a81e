pub mod bin_keeper;
pub mod wig_track;

pub use bin_keeper::BinKeeper;
pub use wig_track::{Summary, WigTrack};
