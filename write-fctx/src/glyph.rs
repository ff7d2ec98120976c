//! Packing individual glyphs.

use fctx_types::{PathCommand, UFixed12Dot4};

use crate::{
    error::{EncodeError, Error},
    font::FontMetrics,
    path::encode_commands,
    unicode::entry_point_for_label,
};

/// A glyph as described by the source font.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphSource {
    /// The character (or ligature) this glyph draws.
    pub unicode: Option<String>,
    /// Only used for logging.
    pub name: Option<String>,
    /// The advance width, in font units.
    pub horiz_adv_x: Option<f64>,
    pub commands: Vec<PathCommand>,
}

impl GlyphSource {
    pub fn new(unicode: impl Into<String>, commands: impl Into<Vec<PathCommand>>) -> Self {
        GlyphSource {
            unicode: Some(unicode.into()),
            commands: commands.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_advance(mut self, horiz_adv_x: f64) -> Self {
        self.horiz_adv_x = Some(horiz_adv_x);
        self
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A glyph ready to be added to the glyph table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedGlyph {
    pub entry_point: u16,
    pub advance: UFixed12Dot4,
    /// The packed outline; never longer than `u16::MAX` bytes.
    pub path_data: Vec<u8>,
}

/// Why a glyph was left out of the font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discard {
    /// The glyph's unicode label does not name a single code point.
    NoEntryPoint,
    /// The entry point is outside the font's declared unicode range.
    OutOfRange(u16),
}

/// The result of packing one glyph.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphOutcome {
    Packed(EncodedGlyph),
    /// The outline could not be encoded; the glyph has an empty path.
    Failed {
        glyph: EncodedGlyph,
        error: EncodeError,
    },
    Discarded(Discard),
}

impl GlyphOutcome {
    /// The glyph to add to the table, if any.
    pub fn into_glyph(self) -> Option<EncodedGlyph> {
        match self {
            GlyphOutcome::Packed(glyph) | GlyphOutcome::Failed { glyph, .. } => Some(glyph),
            GlyphOutcome::Discarded(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, GlyphOutcome::Failed { .. })
    }
}

/// Pack a single glyph with the metrics of its font.
///
/// Problems with the outline are not fatal: the glyph is returned with an
/// empty path as [`GlyphOutcome::Failed`]. An error is only returned if the
/// glyph's advance width cannot be stored.
pub fn pack_glyph(glyph: &GlyphSource, metrics: &FontMetrics) -> Result<GlyphOutcome, Error> {
    let name = glyph.display_name();
    let Some(entry_point) = entry_point_for_label(glyph.unicode.as_deref()) else {
        log::info!("skipping glyph ({name}): no entry point for {:?}", glyph.unicode);
        return Ok(GlyphOutcome::Discarded(Discard::NoEntryPoint));
    };
    if !metrics.range.contains(entry_point.into()) {
        log::info!(
            "skipping U+{entry_point:04X} ({name}): outside {}",
            metrics.range
        );
        return Ok(GlyphOutcome::Discarded(Discard::OutOfRange(entry_point)));
    }

    let advance = scale_advance(entry_point, glyph.horiz_adv_x, metrics)?;
    let label = glyph.unicode.as_deref().unwrap_or_default();
    match encode_commands(&glyph.commands, metrics.em_scale) {
        Ok(path_data) => {
            log::info!(
                "U+{entry_point:04X} {label:>3} ({name}) {} bytes",
                path_data.len()
            );
            Ok(GlyphOutcome::Packed(EncodedGlyph {
                entry_point,
                advance,
                path_data,
            }))
        }
        Err(error) => {
            log::error!("U+{entry_point:04X} {label:>3} ({name}) failed to encode: {error}");
            Ok(GlyphOutcome::Failed {
                glyph: EncodedGlyph {
                    entry_point,
                    advance,
                    path_data: Vec::new(),
                },
                error,
            })
        }
    }
}

fn scale_advance(
    entry_point: u16,
    horiz_adv_x: Option<f64>,
    metrics: &FontMetrics,
) -> Result<UFixed12Dot4, Error> {
    let Some(value) = horiz_adv_x.or(metrics.default_advance) else {
        log::debug!("U+{entry_point:04X} has no advance width, using 0");
        return Ok(UFixed12Dot4::ZERO);
    };
    UFixed12Dot4::checked_from_f64(value * metrics.em_scale)
        .ok_or(Error::AdvanceOutOfRange { entry_point, value })
}

#[cfg(test)]
mod tests {
    use fctx_test_data::glyphs;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::unicode::UnicodeRange;

    fn metrics(range: &str) -> FontMetrics {
        FontMetrics {
            range: UnicodeRange::parse(range).unwrap(),
            em_scale: 0.072,
            default_advance: Some(500.0),
        }
    }

    #[test]
    fn packs_glyph() {
        let _ = env_logger::builder().is_test(true).try_init();
        let glyph = GlyphSource::new("A", glyphs::LATIN_CAPITAL_A)
            .with_name("A")
            .with_advance(600.0);
        let outcome = pack_glyph(&glyph, &metrics("U+0020-007E")).unwrap();
        let GlyphOutcome::Packed(packed) = outcome else {
            panic!("expected a packed glyph, found {outcome:?}");
        };
        assert_eq!(0x41, packed.entry_point);
        // 600 * 0.072 = 43.2
        assert_eq!(UFixed12Dot4::from_bits(691), packed.advance);
        assert_eq!(20, packed.path_data.len());
        // L 300 700 -> 21.6, 50.4
        assert_eq!(&[0x4c, 0x00, 0x5a, 0x01, 0x26, 0x03], &packed.path_data[6..12]);
    }

    #[test]
    fn ligature_entry_point() {
        let glyph = GlyphSource::new("fi", glyphs::LIGATURE_FI);
        let outcome = pack_glyph(&glyph, &metrics("U+0020-FFFF")).unwrap();
        assert_eq!(0xFB01, outcome.into_glyph().unwrap().entry_point);
    }

    #[test]
    fn default_advance() {
        let glyph = GlyphSource::new("D", glyphs::LATIN_CAPITAL_D);
        let packed = pack_glyph(&glyph, &metrics("U+0041-005A"))
            .unwrap()
            .into_glyph()
            .unwrap();
        // 500 * 0.072 = 36
        assert_eq!(UFixed12Dot4::from_bits(576), packed.advance);
    }

    #[test]
    fn missing_advance_is_zero() {
        let mut metrics = metrics("U+0041-005A");
        metrics.default_advance = None;
        let glyph = GlyphSource::new("D", glyphs::LATIN_CAPITAL_D);
        let packed = pack_glyph(&glyph, &metrics).unwrap().into_glyph().unwrap();
        assert_eq!(UFixed12Dot4::ZERO, packed.advance);
    }

    #[test]
    fn discards() {
        let metrics = metrics("U+0041-0043");
        let outside = GlyphSource::new("D", glyphs::LATIN_CAPITAL_D);
        assert_eq!(
            GlyphOutcome::Discarded(Discard::OutOfRange(0x44)),
            pack_glyph(&outside, &metrics).unwrap()
        );
        let unnamed = GlyphSource {
            commands: glyphs::LATIN_CAPITAL_A.to_vec(),
            ..Default::default()
        };
        assert_eq!(
            GlyphOutcome::Discarded(Discard::NoEntryPoint),
            pack_glyph(&unnamed, &metrics).unwrap()
        );
        let multi = GlyphSource::new("AB", glyphs::LATIN_CAPITAL_A);
        assert_eq!(
            GlyphOutcome::Discarded(Discard::NoEntryPoint),
            pack_glyph(&multi, &metrics).unwrap()
        );
    }

    #[test]
    fn failed_glyph_keeps_entry() {
        let _ = env_logger::builder().is_test(true).try_init();
        let glyph = GlyphSource::new("B", glyphs::OVERSIZED).with_name("broken");
        let outcome = pack_glyph(&glyph, &metrics("U+0041-0043")).unwrap();
        assert!(outcome.is_failed());
        let GlyphOutcome::Failed { glyph, error } = outcome else {
            unreachable!()
        };
        assert!(glyph.path_data.is_empty());
        assert_eq!(0x42, glyph.entry_point);
        assert!(matches!(error, EncodeError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn advance_out_of_range() {
        let glyph = GlyphSource::new("A", glyphs::LATIN_CAPITAL_A).with_advance(100_000.0);
        assert_eq!(
            Err(Error::AdvanceOutOfRange {
                entry_point: 0x41,
                value: 100_000.0
            }),
            pack_glyph(&glyph, &metrics("U+0041-0043"))
        );
    }
}
