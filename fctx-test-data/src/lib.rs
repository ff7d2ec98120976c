//! test data shared between the fctx crates.

pub mod glyphs;
pub mod paths;
