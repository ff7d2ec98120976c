//! Compiling paths and fonts into the packed fctx format.
//!
//! The fctx renderer draws from a compact binary form of path data: every
//! command is a two byte code followed by two byte fixed-point coordinates,
//! and elliptical arcs are replaced by cubic curves ahead of time.
//!
//! A single path is packed with [`encode_path`]:
//!
//! ```
//! use fctx_types::PathCommand;
//!
//! let packed = write_fctx::encode_path(&[
//!     PathCommand::move_to(10.0, 10.0),
//!     PathCommand::line_to(20.0, 10.0),
//!     PathCommand::ClosePath,
//! ])
//! .unwrap();
//! assert_eq!(&packed[..6], &[b'M', 0, 160, 0, 160, 0]);
//! ```
//!
//! and a whole font with [`pack_font`], which scales every glyph to a 72
//! unit em square and builds the glyph table and its unicode range index.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod arc;
mod cursor;
mod error;
mod font;
mod glyph;
mod path;
mod unicode;
pub mod write;

pub use arc::EndpointArc;
pub use cursor::Cursor;
pub use error::{EncodeError, Error};
pub use font::{
    em_scale, pack_font, FontHeader, FontMetrics, FontSource, GlyphRecord, GlyphTable,
    GlyphTableBuilder, PackedFont, UnicodeRangeEntry, TARGET_UNITS_PER_EM,
};
pub use glyph::{pack_glyph, Discard, EncodedGlyph, GlyphOutcome, GlyphSource};
pub use path::{commands_from_bezpath, encode_commands, encode_path, PathEncoder};
pub use unicode::{entry_point_for_label, UnicodeRange, LIGATURES};
pub use write::{dump, FctxWrite, FieldWriter};

pub extern crate fctx_types as types;
