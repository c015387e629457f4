//! ASCII rendering of decoded images.

use std::io::Write;

use crate::decode::BmpImage;
use crate::error::BmpError;

/// Glyph written for pixels darker than the threshold.
pub const DARK_GLYPH: &str = "# ";
/// Glyph written for pixels at or above the threshold.
pub const LIGHT_GLYPH: &str = ". ";
/// Default luminance cutoff (3 * 128, the midpoint of the B+G+R sum).
pub const DEFAULT_THRESHOLD: u16 = 384;

/// Renders a decoded image as two-character ASCII glyphs.
///
/// Each pixel becomes [`DARK_GLYPH`] when its B + G + R sum falls below
/// the threshold and [`LIGHT_GLYPH`] otherwise. Rows are written top to
/// bottom, each followed by a newline.
#[derive(Clone, Copy, Debug)]
pub struct AsciiRenderer {
    threshold: u16,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AsciiRenderer {
    /// A renderer with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer with a custom luminance cutoff (useful range 0..=765).
    pub fn with_threshold(threshold: u16) -> Self {
        Self { threshold }
    }

    /// Write the whole image to `out`.
    pub fn render<W: Write>(&self, image: &BmpImage, out: &mut W) -> Result<(), BmpError> {
        for y in 0..image.height() {
            for x in 0..image.width() {
                let glyph = if image.pixel(x, y)?.luminance() < self.threshold {
                    DARK_GLYPH
                } else {
                    LIGHT_GLYPH
                };
                out.write_all(glyph.as_bytes())?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}
