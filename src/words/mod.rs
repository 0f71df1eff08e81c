//! Number-to-words conversion for printed amounts

pub mod indian;

pub use indian::*;
