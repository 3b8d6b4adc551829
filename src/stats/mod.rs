//! Stats module - Category counting

mod counter;

pub use counter::{CategoryCounter, CountTable, DISPLAY_SCALE};
