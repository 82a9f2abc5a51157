//! Drawing primitives over a [`Surface`].
//!
//! A [`Canvas`] pairs the surface with the atlas glyphs are taken from. The
//! primitives are split by concern:
//!
//! - [`blit`]: 8x8 tiles in mask or direct mode, plus reverse-video chars
//! - [`rect`]: solid rectangles with sub-byte edge merging
//! - [`text`]: strings, icons and glyph runs built on top of the blitter
//!
//! None of them computes a byte offset on its own: rows are always resolved
//! by the surface's [`Interleave`](crate::surface::Interleave).

use crate::surface::Surface;
use crate::tile::TileAtlas;

pub mod blit;
pub mod rect;
pub mod text;

pub struct Canvas<'a> {
    surface: &'a mut Surface,
    atlas: &'a TileAtlas,
}

impl<'a> Canvas<'a> {
    pub const fn new(surface: &'a mut Surface, atlas: &'a TileAtlas) -> Self {
        Self { surface, atlas }
    }

    #[must_use]
    pub const fn surface(&self) -> &Surface {
        self.surface
    }

    #[must_use]
    pub const fn atlas(&self) -> &TileAtlas {
        self.atlas
    }

    pub(crate) const fn surface_mut(&mut self) -> &mut Surface {
        self.surface
    }
}
