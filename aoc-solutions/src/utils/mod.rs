//! Helpers shared between puzzle solutions

pub mod dp_cache;
pub mod parse;
pub mod time_grid;
