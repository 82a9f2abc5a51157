use serde::{Deserialize, Serialize};

use crate::board::RendererContext;
use crate::board::layout::FIELD_CELLS;
use crate::canvas::Canvas;
use crate::error::{GfxError, Result, check_below};
use crate::field::CELLS;
use crate::tile::{BlitMode, glyphs};

const ROW: usize = FIELD_CELLS as usize;

/// Encoded positions above this value are vertical ships.
const VERTICAL_BASE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Stern at the anchor, bow to the right.
    Horizontal,
    /// Stern at the anchor, bow further down.
    Vertical,
}

impl Orientation {
    /// Stern, middle section and bow glyphs.
    const fn glyphs(self) -> [u8; 3] {
        match self {
            Self::Horizontal => [glyphs::SHIP_STERN, glyphs::SHIP_MID, glyphs::SHIP_BOW],
            Self::Vertical => [glyphs::SHIP_STERN_V, glyphs::SHIP_MID_V, glyphs::SHIP_BOW_V],
        }
    }

    /// Position step between two sections.
    const fn step(self) -> usize {
        match self {
            Self::Horizontal => 1,
            Self::Vertical => ROW,
        }
    }
}

/// A ship anchored on a playfield cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    size: u8,
    position: u8,
    orientation: Orientation,
}

impl Ship {
    pub const MIN_SIZE: u8 = 2;
    pub const MAX_SIZE: u8 = 5;

    /// A ship of `size` cells whose stern is at `position`.
    ///
    /// Fails unless the whole ship lies on the 10x10 grid.
    pub fn new(size: u8, position: u8, orientation: Orientation) -> Result<Self> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(GfxError::out_of_bounds(
                "ship size",
                size.into(),
                usize::from(Self::MAX_SIZE) + 1,
            ));
        }
        check_below("ship position", position.into(), CELLS)?;

        let position_usize = usize::from(position);
        let (start, limit) = match orientation {
            Orientation::Horizontal => (position_usize % ROW, ROW),
            Orientation::Vertical => (position_usize / ROW, ROW),
        };
        check_below("ship end", start + usize::from(size) - 1, limit)?;

        Ok(Self {
            size,
            position,
            orientation,
        })
    }

    /// Decodes the game's packed position, where vertical ships are stored
    /// as `position + 100`.
    pub fn from_encoded(size: u8, encoded: u8) -> Result<Self> {
        if encoded >= VERTICAL_BASE {
            Self::new(size, encoded - VERTICAL_BASE, Orientation::Vertical)
        } else {
            Self::new(size, encoded, Orientation::Horizontal)
        }
    }

    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Every cell of the ship with its glyph, stern first.
    pub fn sections(&self) -> impl Iterator<Item = (usize, u8)> {
        let [stern, mid, bow] = self.orientation.glyphs();
        let last = usize::from(self.size) - 1;
        let start = usize::from(self.position);
        let step = self.orientation.step();

        (0..=last).map(move |i| {
            let glyph = match i {
                0 => stern,
                i if i == last => bow,
                _ => mid,
            };
            (start + i * step, glyph)
        })
    }
}

/// Draws `ship` on `quadrant`'s playfield; a `hidden` ship is painted over
/// with blank water.
pub fn draw_ship(
    ctx: &RendererContext,
    canvas: &mut Canvas,
    quadrant: usize,
    ship: &Ship,
    hidden: bool,
) -> Result<()> {
    let layout = ctx.quadrant(quadrant)?;
    tracing::debug!("quadrant {quadrant}: {ship:?} (hidden: {hidden})");

    for (position, glyph) in ship.sections() {
        let glyph = if hidden { glyphs::FIELD_BLANK } else { glyph };
        let at = layout.cell(position)?;
        canvas.put_tile(glyph, at.x, at.y, BlitMode::Direct)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use crate::tile::{Tile, TileAtlas};
    use pretty_assertions::assert_eq;

    fn numbered_atlas() -> TileAtlas {
        let mut atlas = TileAtlas::blank();
        for i in 0..=255_u8 {
            atlas.set_tile(i, Tile([i; 16]));
        }
        atlas
    }

    #[test]
    fn sections() {
        let ship = Ship::new(4, 12, Orientation::Horizontal).unwrap();
        assert_eq!(
            ship.sections().collect::<Vec<_>>(),
            vec![(12, 0x12), (13, 0x13), (14, 0x13), (15, 0x14)]
        );

        let ship = Ship::from_encoded(2, 155).unwrap();
        assert_eq!(ship.orientation(), Orientation::Vertical);
        assert_eq!(ship.sections().collect::<Vec<_>>(), vec![(55, 0x15), (65, 0x17)]);
    }

    #[test]
    fn ships_stay_on_the_grid() {
        assert!(Ship::new(5, 5, Orientation::Horizontal).is_ok());
        assert!(Ship::new(5, 6, Orientation::Horizontal).is_err());
        assert!(Ship::new(3, 79, Orientation::Vertical).is_ok());
        assert!(Ship::new(3, 89, Orientation::Vertical).is_err());
        assert!(Ship::new(1, 0, Orientation::Horizontal).is_err());
        assert!(Ship::new(6, 0, Orientation::Horizontal).is_err());
        assert!(Ship::from_encoded(2, 200).is_err());
    }

    #[test]
    fn drawn_and_hidden() {
        let atlas = numbered_atlas();
        let ctx = RendererContext::for_players(2).unwrap();
        let ship = Ship::new(3, 0, Orientation::Vertical).unwrap();
        let mut surface = Surface::new();
        let mut canvas = Canvas::new(&mut surface, &atlas);

        draw_ship(&ctx, &mut canvas, 1, &ship, false).unwrap();
        // Quadrant 1 with two players starts at column 15, row 10.
        let column: Vec<u8> = [10, 18, 26]
            .iter()
            .map(|&y| surface.row(y).unwrap()[30])
            .collect();
        assert_eq!(column, vec![0x15, 0x16, 0x17]);

        let mut canvas = Canvas::new(&mut surface, &atlas);
        draw_ship(&ctx, &mut canvas, 1, &ship, true).unwrap();
        assert_eq!(surface.row(18).unwrap()[30], glyphs::FIELD_BLANK);
    }
}
