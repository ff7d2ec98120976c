//! Common scalar data types used in fctx packed paths and fonts.
//!
//! Every field in the format is a little-endian 16-bit value: command codes,
//! counts and offsets are plain integers, coordinates and metrics are
//! fixed-point numbers with four fractional bits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod command;
mod fixed;


pub use command::{PathCommand, Verb};
pub use fixed::{Fixed12Dot4, UFixed12Dot4, FIXED_POINT_SCALE};
