//! Building packed fonts.
//!
//! A packed font is laid out as:
//!
//! ```text
//! header (10 bytes) | range index (4 * R) | glyph table (6 * G) | path data
//! ```
//!
//! The range index lists the contiguous runs of code points that have a
//! glyph, in ascending order. The glyph table has one entry per code point
//! in those runs, in the same order; each entry locates its outline in the
//! path data that follows.

use std::collections::BTreeMap;

use fctx_types::{Fixed12Dot4, UFixed12Dot4};

use crate::{
    error::Error,
    glyph::{pack_glyph, EncodedGlyph, GlyphOutcome, GlyphSource},
    unicode::UnicodeRange,
    write::{dump, FctxWrite, FieldWriter},
};

/// Fonts with a larger em square are scaled down to this many units.
pub const TARGET_UNITS_PER_EM: f64 = 72.0;

/// The factor applied to every coordinate and metric of a font.
pub fn em_scale(units_per_em: f64) -> f64 {
    if units_per_em > TARGET_UNITS_PER_EM {
        TARGET_UNITS_PER_EM / units_per_em
    } else {
        1.0
    }
}

/// A font as described by its source.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSource {
    pub units_per_em: f64,
    pub ascent: f64,
    pub descent: f64,
    /// The code points to include, e.g. `U+0020-007E`.
    pub unicode_range: String,
    /// The advance of glyphs that do not declare their own.
    pub horiz_adv_x: Option<f64>,
    pub glyphs: Vec<GlyphSource>,
}

/// The font-wide values needed to pack a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub range: UnicodeRange,
    pub em_scale: f64,
    pub default_advance: Option<f64>,
}

impl FontMetrics {
    pub fn new(source: &FontSource) -> Result<Self, Error> {
        Ok(FontMetrics {
            range: UnicodeRange::parse(&source.unicode_range)?,
            em_scale: em_scale(source.units_per_em),
            default_advance: source.horiz_adv_x,
        })
    }

    fn scale_metric(&self, name: &'static str, value: f64) -> Result<Fixed12Dot4, Error> {
        Fixed12Dot4::checked_from_f64(value * self.em_scale)
            .ok_or(Error::MetricOutOfRange { name, value })
    }
}

/// The first ten bytes of a packed font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontHeader {
    pub units_per_em: Fixed12Dot4,
    pub ascent: Fixed12Dot4,
    pub descent: Fixed12Dot4,
    pub range_count: u16,
    pub glyph_count: u16,
}

impl FontHeader {
    pub const RAW_BYTE_LEN: usize = 10;
}

impl FctxWrite for FontHeader {
    fn write_into(&self, writer: &mut FieldWriter) {
        self.units_per_em.write_into(writer);
        self.ascent.write_into(writer);
        self.descent.write_into(writer);
        self.range_count.write_into(writer);
        self.glyph_count.write_into(writer);
    }
}

/// A run of consecutive code points that all have a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnicodeRangeEntry {
    pub begin: u16,
    /// Exclusive.
    pub end: u16,
}

impl UnicodeRangeEntry {
    pub const RAW_BYTE_LEN: usize = 4;

    pub fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

impl FctxWrite for UnicodeRangeEntry {
    fn write_into(&self, writer: &mut FieldWriter) {
        self.begin.write_into(writer);
        self.end.write_into(writer);
    }
}

/// One entry in the glyph table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphRecord {
    /// Not written; implied by the record's position in the table.
    pub entry_point: u16,
    pub offset: u16,
    pub length: u16,
    pub advance: UFixed12Dot4,
}

impl GlyphRecord {
    pub const RAW_BYTE_LEN: usize = 6;
}

impl FctxWrite for GlyphRecord {
    fn write_into(&self, writer: &mut FieldWriter) {
        self.offset.write_into(writer);
        self.length.write_into(writer);
        self.advance.write_into(writer);
    }
}

/// The glyph table and range index of a font, with their path data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphTable {
    pub ranges: Vec<UnicodeRangeEntry>,
    pub glyphs: Vec<GlyphRecord>,
    pub path_data: Vec<u8>,
}

/// Collects encoded glyphs, keyed by entry point.
#[derive(Clone, Debug, Default)]
pub struct GlyphTableBuilder {
    glyphs: BTreeMap<u16, EncodedGlyph>,
}

impl GlyphTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a glyph, replacing any earlier glyph with the same entry point.
    ///
    /// Returns the replaced glyph.
    pub fn add_glyph(&mut self, glyph: EncodedGlyph) -> Option<EncodedGlyph> {
        let entry_point = glyph.entry_point;
        let prev = self.glyphs.insert(entry_point, glyph);
        if prev.is_some() {
            log::warn!("duplicate glyph for U+{entry_point:04X}, keeping the last one");
        }
        prev
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Lay out the glyph table in ascending entry point order.
    pub fn build(self) -> Result<GlyphTable, Error> {
        let mut table = GlyphTable::default();
        let mut run: Option<(u32, u32)> = None;
        for (entry_point, glyph) in self.glyphs {
            let cp = entry_point as u32;
            run = match run {
                Some((begin, end)) if end == cp => Some((begin, cp + 1)),
                Some((begin, end)) => {
                    table.ranges.push(range_entry(begin, end)?);
                    Some((cp, cp + 1))
                }
                None => Some((cp, cp + 1)),
            };

            let offset = table.path_data.len();
            let offset: u16 = offset
                .try_into()
                .map_err(|_| Error::PathDataOverflow { offset })?;
            table.glyphs.push(GlyphRecord {
                entry_point,
                offset,
                // guaranteed by the path encoder
                length: glyph.path_data.len() as u16,
                advance: glyph.advance,
            });
            table.path_data.extend_from_slice(&glyph.path_data);
        }
        if let Some((begin, end)) = run {
            table.ranges.push(range_entry(begin, end)?);
        }
        for range in &table.ranges {
            log::info!(
                "range U+{:04X}-{:04X}: {} glyphs",
                range.begin,
                range.end - 1,
                range.len()
            );
        }
        Ok(table)
    }
}

fn range_entry(begin: u32, end: u32) -> Result<UnicodeRangeEntry, Error> {
    let end16 = u16::try_from(end).map_err(|_| Error::RangeEndOverflow { end })?;
    Ok(UnicodeRangeEntry {
        begin: begin as u16,
        end: end16,
    })
}

/// A font, ready to be written out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackedFont {
    pub header: FontHeader,
    pub ranges: Vec<UnicodeRangeEntry>,
    pub glyphs: Vec<GlyphRecord>,
    pub path_data: Vec<u8>,
    /// The number of glyphs whose outline could not be encoded.
    pub error_count: usize,
}

impl PackedFont {
    /// The binary representation of this font.
    pub fn to_bytes(&self) -> Vec<u8> {
        dump(self)
    }

    /// The record for the glyph of this code point, if it exists.
    pub fn glyph(&self, entry_point: u16) -> Option<&GlyphRecord> {
        self.glyphs
            .binary_search_by_key(&entry_point, |record| record.entry_point)
            .ok()
            .map(|idx| &self.glyphs[idx])
    }

    /// The packed outline of a glyph.
    pub fn glyph_path(&self, record: &GlyphRecord) -> Option<&[u8]> {
        let start = record.offset as usize;
        self.path_data.get(start..start + record.length as usize)
    }
}

impl FctxWrite for PackedFont {
    fn write_into(&self, writer: &mut FieldWriter) {
        self.header.write_into(writer);
        self.ranges.write_into(writer);
        self.glyphs.write_into(writer);
        writer.write_slice(&self.path_data);
    }
}

/// Pack every glyph of a font.
///
/// Glyphs that have no entry point or that fall outside the declared unicode
/// range are skipped. A glyph whose outline cannot be encoded is kept with an
/// empty path and counted in [`PackedFont::error_count`].
pub fn pack_font(source: &FontSource) -> Result<PackedFont, Error> {
    let metrics = FontMetrics::new(source)?;
    let units_per_em = metrics.scale_metric("units-per-em", source.units_per_em)?;
    let ascent = metrics.scale_metric("ascent", source.ascent)?;
    let descent = metrics.scale_metric("descent", source.descent)?;
    log::info!(
        "packing {} glyphs in {}, em-scale {}",
        source.glyphs.len(),
        metrics.range,
        metrics.em_scale
    );

    let outcomes = pack_glyphs(&source.glyphs, &metrics)?;
    let mut error_count = 0;
    let mut builder = GlyphTableBuilder::new();
    for outcome in outcomes {
        error_count += outcome.is_failed() as usize;
        if let Some(glyph) = outcome.into_glyph() {
            builder.add_glyph(glyph);
        }
    }
    if error_count > 0 {
        log::warn!("{error_count} glyphs failed to encode and have empty outlines");
    }

    let GlyphTable {
        ranges,
        glyphs,
        path_data,
    } = builder.build()?;
    // both are bounded by the number of distinct u16 entry points
    let header = FontHeader {
        units_per_em,
        ascent,
        descent,
        range_count: ranges.len() as u16,
        glyph_count: glyphs.len() as u16,
    };
    log::info!(
        "header {} bytes, range index {} bytes, glyph table {} bytes, path data {} bytes",
        FontHeader::RAW_BYTE_LEN,
        ranges.len() * UnicodeRangeEntry::RAW_BYTE_LEN,
        glyphs.len() * GlyphRecord::RAW_BYTE_LEN,
        path_data.len()
    );
    Ok(PackedFont {
        header,
        ranges,
        glyphs,
        path_data,
        error_count,
    })
}

#[cfg(feature = "rayon")]
fn pack_glyphs(glyphs: &[GlyphSource], metrics: &FontMetrics) -> Result<Vec<GlyphOutcome>, Error> {
    use rayon::prelude::*;
    glyphs
        .par_iter()
        .map(|glyph| pack_glyph(glyph, metrics))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn pack_glyphs(glyphs: &[GlyphSource], metrics: &FontMetrics) -> Result<Vec<GlyphOutcome>, Error> {
    glyphs
        .iter()
        .map(|glyph| pack_glyph(glyph, metrics))
        .collect()
}
