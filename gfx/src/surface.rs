//! The packed-pixel framebuffer.
//!
//! 320x200 pixels, 2 bits per pixel, 4 pixels per byte with pixel 0 in the
//! two most significant bits. Rows are split across two banks, see
//! [`Interleave`].

use serde::{Deserialize, Serialize};
use serde_with::{Bytes, serde_as};

use crate::bitwise::{Bits, lane_bits};
use crate::color::Color;
use crate::error::{GfxError, Result, check_below};

pub use self::interleave::Interleave;

mod interleave;

/// Display width in pixels.
pub const WIDTH: usize = 320;

/// Display height in pixels.
pub const HEIGHT: usize = 200;

pub const PIXELS_PER_BYTE: usize = 4;

/// Bytes in one display row.
pub const ROW_BYTES: usize = WIDTH / PIXELS_PER_BYTE;

/// Tile columns across the display (2 bytes each).
pub const COLUMNS: usize = 40;

/// Tile rows down the display (8 pixels each).
pub const TILE_ROWS: usize = 25;

#[serde_as]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    layout: Interleave,
    #[serde_as(as = "Bytes")]
    bytes: Vec<u8>,
}

impl Surface {
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(Interleave::STANDARD)
    }

    #[must_use]
    pub fn with_layout(layout: Interleave) -> Self {
        Self {
            layout,
            bytes: vec![0; layout.size()],
        }
    }

    #[must_use]
    pub const fn layout(&self) -> &Interleave {
        &self.layout
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Sets every byte of both banks to color 0.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// The bytes of logical display row `row`.
    pub fn row(&self, row: usize) -> Result<&[u8]> {
        let range = self.row_range(row)?;
        self.bytes
            .get(range)
            .ok_or_else(|| GfxError::out_of_bounds("row", row, self.layout.rows()))
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [u8]> {
        let range = self.row_range(row)?;
        let rows = self.layout.rows();
        self.bytes
            .get_mut(range)
            .ok_or_else(|| GfxError::out_of_bounds("row", row, rows))
    }

    /// Decodes the palette index of one pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Result<Color> {
        check_below("x", x, WIDTH)?;
        let byte = self.row(y)?[x / PIXELS_PER_BYTE];
        let lane = (x % PIXELS_PER_BYTE) as u8;

        Color::try_from(byte.get_bits(lane_bits(lane)))
    }

    /// Sets a single pixel, leaving the other three lanes of its byte alone.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        check_below("x", x, WIDTH)?;
        let lane = (x % PIXELS_PER_BYTE) as u8;
        self.row_mut(y)?[x / PIXELS_PER_BYTE].set_bits(lane_bits(lane), color.index());

        Ok(())
    }

    fn row_range(&self, row: usize) -> Result<std::ops::Range<usize>> {
        let start = self.layout.row_offset(row)?;
        Ok(start..start + ROW_BYTES)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("layout", &self.layout)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
