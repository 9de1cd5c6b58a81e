pub use bin_keeper::BinKeeper;

#[allow(clippy::module_inception)]
mod bin_keeper;
