//! Public capitalization API

mod capitalizer;
mod options;


pub use capitalizer::{Capitalizer, CapitalizerBuilder};
pub use options::Options;
