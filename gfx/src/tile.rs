//! 8x8 glyphs and the 256-entry atlas they come from.
//!
//! A tile row is two bytes in the same 2bpp packing as the surface, so a
//! glyph can be copied to video memory without any conversion.

use serde::{Deserialize, Serialize};

use crate::bitwise::{Bits, lane_bits};
use crate::color::Color;
use crate::error::{GfxError, Result};

/// Bytes in one tile (8 rows of 2 bytes).
pub const TILE_BYTES: usize = 16;

/// Pixel rows in one tile.
pub const TILE_HEIGHT: usize = 8;

/// Entries in an atlas.
pub const ATLAS_TILES: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile(pub [u8; TILE_BYTES]);

impl Tile {
    /// Packs a glyph from the color of each of its 8x8 pixels.
    #[must_use]
    pub fn from_fn(color_at: impl Fn(usize, usize) -> Color) -> Self {
        let mut bytes = [0; TILE_BYTES];
        for y in 0..TILE_HEIGHT {
            for x in 0..8 {
                let byte = &mut bytes[y * 2 + x / 4];
                byte.set_bits(lane_bits((x % 4) as u8), color_at(x, y).index());
            }
        }
        Self(bytes)
    }

    /// The two packed bytes of row `row` (0-7).
    #[must_use]
    pub fn row(&self, row: usize) -> [u8; 2] {
        [self.0[row * 2], self.0[row * 2 + 1]]
    }

    /// Reverse video: every bit pair flipped.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self(self.0.map(|b| b ^ 0xFF))
    }
}

impl TryFrom<&[u8]> for Tile {
    type Error = GfxError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| GfxError::MalformedTile { len: bytes.len() })
    }
}

/// How a tile's bytes reach the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlitMode {
    /// The tile is a shape; each written byte is ANDed with the color's lane
    /// mask so only that color survives.
    Mask(Color),
    /// The tile is pre-colored and copied verbatim.
    Direct,
}

impl BlitMode {
    #[must_use]
    pub const fn apply(self, byte: u8) -> u8 {
        match self {
            Self::Mask(color) => byte & color.replicated(),
            Self::Direct => byte,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct TileAtlas {
    tiles: Box<[Tile; ATLAS_TILES]>,
}

impl TileAtlas {
    /// An atlas of empty tiles.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            tiles: Box::new([Tile::default(); ATLAS_TILES]),
        }
    }

    /// Splits raw atlas data (256 tiles of 16 bytes, in index order).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ATLAS_TILES * TILE_BYTES {
            return Err(GfxError::MalformedTile { len: bytes.len() });
        }

        let mut atlas = Self::blank();
        for (slot, chunk) in atlas.tiles.iter_mut().zip(bytes.chunks_exact(TILE_BYTES)) {
            *slot = Tile::try_from(chunk)?;
        }

        Ok(atlas)
    }

    #[must_use]
    pub fn tile(&self, index: u8) -> &Tile {
        &self.tiles[usize::from(index)]
    }

    pub fn set_tile(&mut self, index: u8, tile: Tile) {
        self.tiles[usize::from(index)] = tile;
    }
}

impl Default for TileAtlas {
    fn default() -> Self {
        Self::blank()
    }
}

impl std::fmt::Debug for TileAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileAtlas").finish_non_exhaustive()
    }
}

/// Atlas indices the board is drawn with.
///
/// `0x00-0x1F` holds basic glyphs, `0x20-0x6F` board furniture and the
/// character set (a glyph for a printable character sits at its ASCII code).
pub mod glyphs {
    /// Left edge next to a left-hand drawer.
    pub const INNER_EDGE_LEFT: u8 = 0x01;
    pub const FAR_EDGE_LEFT: u8 = 0x02;
    pub const FAR_EDGE_RIGHT: u8 = 0x03;
    pub const INNER_EDGE_RIGHT: u8 = 0x04;

    /// Added to the far-edge glyphs for the shorter single-player variant.
    pub const SHORT_EDGE_DELTA: u8 = 4;

    pub const DRAWER_CORNER_LEFT: u8 = 0x0C;
    pub const DRAWER_CORNER_RIGHT: u8 = 0x0D;

    /// Added to a top drawer corner for the matching bottom corner.
    pub const DRAWER_BOTTOM_DELTA: u8 = 2;

    pub const DRAWER_SIDE: u8 = 0x10;
    pub const DRAWER_RIM: u8 = 0x11;

    pub const SHIP_STERN: u8 = 0x12;
    pub const SHIP_MID: u8 = 0x13;
    pub const SHIP_BOW: u8 = 0x14;
    pub const SHIP_STERN_V: u8 = 0x15;
    pub const SHIP_MID_V: u8 = 0x16;
    pub const SHIP_BOW_V: u8 = 0x17;

    pub const FIELD_BLANK: u8 = 0x18;
    pub const FIELD_HIT: u8 = 0x19;
    pub const FIELD_MISS: u8 = 0x1A;
    pub const FIELD_HIT_ALT: u8 = 0x1B;

    pub const ACTIVE_MARKER: u8 = 0x1E;

    pub const SPACE: u8 = 0x20;

    pub const OUTER_EDGE_RIGHT: u8 = 0x22;
    pub const OUTER_EDGE_LEFT: u8 = 0x23;
    pub const DRAWER_JOINT_LEFT: u8 = 0x24;
    pub const DRAWER_JOINT_RIGHT: u8 = 0x25;
    pub const FAR_EDGE_STRIP: u8 = 0x29;

    pub const BADGE_TOP_LEFT: u8 = 0x5C;
    pub const BADGE_TOP_RIGHT: u8 = 0x5D;
    pub const BADGE_BOTTOM_LEFT: u8 = 0x5E;
    pub const BADGE_BOTTOM_RIGHT: u8 = 0x5F;

    /// Added to board furniture of the quadrant whose player is active.
    pub const HIGHLIGHT_DELTA: u8 = 0x80;

    /// Glyph for a character: lowercase folds to uppercase, anything outside
    /// printable ASCII shows as `?`.
    #[must_use]
    pub const fn for_char(c: char) -> u8 {
        let c = c.to_ascii_uppercase();
        if c.is_ascii_graphic() || c == ' ' {
            c as u8
        } else {
            b'?'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered_atlas_bytes() -> Vec<u8> {
        (0..ATLAS_TILES)
            .flat_map(|i| [i as u8; TILE_BYTES])
            .collect()
    }

    #[test]
    fn atlas_from_bytes() {
        let atlas = TileAtlas::from_bytes(&numbered_atlas_bytes()).unwrap();
        assert_eq!(atlas.tile(0x19).0, [0x19; 16]);
        assert_eq!(atlas.tile(0xFF).row(7), [0xFF, 0xFF]);
    }

    #[test]
    fn atlas_rejects_short_data() {
        let mut bytes = numbered_atlas_bytes();
        bytes.pop();

        assert_eq!(
            TileAtlas::from_bytes(&bytes).unwrap_err(),
            GfxError::MalformedTile { len: 4095 }
        );
    }

    #[test]
    fn tile_rejects_wrong_length() {
        assert!(Tile::try_from(&[0_u8; 15][..]).is_err());
        assert!(Tile::try_from(&[0_u8; 16][..]).is_ok());
    }

    #[test]
    fn blit_modes() {
        assert_eq!(BlitMode::Mask(Color::Primary).apply(0xFF), 0x55);
        assert_eq!(BlitMode::Mask(Color::Secondary).apply(0b11_01_10_00), 0b10_00_10_00);
        assert_eq!(BlitMode::Mask(Color::Background).apply(0xFF), 0x00);
        assert_eq!(BlitMode::Direct.apply(0x5A), 0x5A);
    }

    #[test]
    fn inverted_tile() {
        let tile = Tile([0x0F; 16]);
        assert_eq!(tile.inverted().0, [0xF0; 16]);
    }

    #[test]
    fn packed_from_pixels() {
        let tile = Tile::from_fn(|x, y| match (x, y) {
            (0, 0) => Color::Foreground,
            (5, 0) => Color::Secondary,
            (7, 7) => Color::Primary,
            _ => Color::Background,
        });

        assert_eq!(tile.row(0), [0b1100_0000, 0b0010_0000]);
        assert_eq!(tile.row(7), [0, 0b0000_0001]);
    }

    #[test]
    fn char_glyphs() {
        assert_eq!(glyphs::for_char('a'), b'A');
        assert_eq!(glyphs::for_char('Z'), b'Z');
        assert_eq!(glyphs::for_char(' '), glyphs::SPACE);
        assert_eq!(glyphs::for_char('é'), b'?');
    }
}
