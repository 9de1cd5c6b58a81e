pub mod wig;
mod traits;

pub use traits::LineSource;
