//! Per-cell game-field glyphs.
//!
//! Cell glyphs are pre-colored and written in direct mode at the cell's pixel
//! position; they never go through the tile-row scaling of the public blit.

use serde::{Deserialize, Serialize};

use crate::board::RendererContext;
use crate::board::layout::FIELD_CELLS;
use crate::canvas::Canvas;
use crate::error::{GfxError, Result, check_below};
use crate::tile::{BlitMode, glyphs};

/// Cells in one playfield.
pub const CELLS: usize = (FIELD_CELLS * FIELD_CELLS) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Hit = 1,
    Miss = 2,
}

impl Cell {
    /// Glyph for the cell, `None` for water that was never shot at.
    #[must_use]
    pub const fn glyph(self, blink: bool) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Hit if blink => Some(glyphs::FIELD_HIT_ALT),
            Self::Hit => Some(glyphs::FIELD_HIT),
            Self::Miss => Some(glyphs::FIELD_MISS),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = GfxError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Hit),
            2 => Ok(Self::Miss),
            _ => Err(GfxError::out_of_bounds("cell", value.into(), 3)),
        }
    }
}

/// The 10x10 cells of one quadrant, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameField(Vec<Cell>);

impl GameField {
    #[must_use]
    pub fn new() -> Self {
        Self(vec![Cell::Empty; CELLS])
    }

    /// Decodes raw game bytes (0 empty, 1 hit, 2 miss).
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() != CELLS {
            return Err(GfxError::LengthMismatch {
                what: "field",
                len: raw.len(),
                expected: CELLS,
            });
        }
        raw.iter()
            .map(|&b| Cell::try_from(b))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn get(&self, position: usize) -> Result<Cell> {
        check_below("cell position", position, CELLS)?;
        Ok(self.0[position])
    }

    pub fn set(&mut self, position: usize, cell: Cell) -> Result<()> {
        check_below("cell position", position, CELLS)?;
        self.0[position] = cell;
        Ok(())
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws every non-empty cell of `field` on `quadrant`'s playfield.
pub fn render_field(
    ctx: &RendererContext,
    canvas: &mut Canvas,
    quadrant: usize,
    field: &GameField,
) -> Result<()> {
    let layout = ctx.quadrant(quadrant)?;

    for (position, cell) in field.cells().iter().enumerate() {
        if let Some(glyph) = cell.glyph(false) {
            let at = layout.cell(position)?;
            canvas.put_tile(glyph, at.x, at.y, BlitMode::Direct)?;
        }
    }

    Ok(())
}

/// Redraws one cell; with `blink` set a hit shows its alternate glyph.
pub fn update_field_cell(
    ctx: &RendererContext,
    canvas: &mut Canvas,
    quadrant: usize,
    field: &GameField,
    position: usize,
    blink: bool,
) -> Result<()> {
    let layout = ctx.quadrant(quadrant)?;
    let cell = field.get(position)?;

    let Some(glyph) = cell.glyph(blink) else {
        return Ok(());
    };

    let at = layout.cell(position)?;
    tracing::trace!("quadrant {quadrant} cell {position}: {cell:?} -> glyph {glyph:#04x}");
    canvas.put_tile(glyph, at.x, at.y, BlitMode::Direct)
}
