//! Tile blitter.
//!
//! Columns are 8 pixels (2 bytes) wide. The `y` argument of the public entry
//! points follows the display's text convention: values below 25 are tile
//! rows and get scaled to pixel rows, anything else is already a pixel row.

use super::Canvas;
use crate::color::Color;
use crate::error::{Result, check_below, check_span};
use crate::surface::{COLUMNS, HEIGHT, TILE_ROWS};
use crate::tile::{BlitMode, TILE_HEIGHT, Tile};

/// Resolves a blit `y` argument to a pixel row.
#[must_use]
pub const fn pixel_row(y: u8) -> usize {
    let y = y as usize;
    if y < TILE_ROWS { y * TILE_HEIGHT } else { y }
}

impl Canvas<'_> {
    /// Writes atlas tile `tile` at column `x`, row `y`.
    pub fn blit_tile(&mut self, tile: u8, x: u8, y: u8, mode: BlitMode) -> Result<()> {
        self.put_tile(tile, usize::from(x), pixel_row(y), mode)
    }

    /// Mask-mode blit of a character glyph, optionally in reverse video.
    pub fn blit_char(&mut self, tile: u8, x: u8, y: u8, color: Color, inverse: bool) -> Result<()> {
        self.put_char(tile, usize::from(x), pixel_row(y), color, inverse)
    }

    pub(crate) fn put_tile(
        &mut self,
        index: u8,
        column: usize,
        pixel_row: usize,
        mode: BlitMode,
    ) -> Result<()> {
        self.put_tile_rows(index, column, pixel_row, TILE_HEIGHT, mode)
    }

    /// Like [`Self::put_tile`] but only the first `rows` rows of the glyph.
    pub(crate) fn put_tile_rows(
        &mut self,
        index: u8,
        column: usize,
        pixel_row: usize,
        rows: usize,
        mode: BlitMode,
    ) -> Result<()> {
        let tile = *self.atlas.tile(index);
        self.write_tile(&tile, column, pixel_row, rows.min(TILE_HEIGHT), mode)
    }

    pub(crate) fn put_char(
        &mut self,
        index: u8,
        column: usize,
        pixel_row: usize,
        color: Color,
        inverse: bool,
    ) -> Result<()> {
        let tile = self.atlas.tile(index);
        let tile = if inverse { tile.inverted() } else { *tile };
        self.write_tile(&tile, column, pixel_row, TILE_HEIGHT, BlitMode::Mask(color))
    }

    fn write_tile(
        &mut self,
        tile: &Tile,
        column: usize,
        pixel_row: usize,
        rows: usize,
        mode: BlitMode,
    ) -> Result<()> {
        check_below("column", column, COLUMNS)?;
        if rows == 0 {
            return Ok(());
        }
        check_span("tile bottom row", pixel_row, rows, HEIGHT)?;

        let offset = column * 2;
        for r in 0..rows {
            let [left, right] = tile.row(r);
            let line = self.surface.row_mut(pixel_row + r)?;
            line[offset] = mode.apply(left);
            line[offset + 1] = mode.apply(right);
        }

        Ok(())
    }
}
