//! The display facade.
//!
//! [`Screen`] owns the surface, the atlas and the renderer context, and
//! forwards every drawing operation to the free-standing functions of the
//! crate. Mode switching and palette setup are left to a [`DisplayMode`]
//! collaborator, frame pacing to a [`FrameSync`].

use crate::board::{self, RendererContext};
use crate::canvas::Canvas;
use crate::color::{Color, Palette};
use crate::error::Result;
use crate::field::{self, GameField};
use crate::ship::{self, Ship};
use crate::surface::Surface;
use crate::sync::FrameSync;
use crate::tile::{BlitMode, TileAtlas};

/// Switches the output device in and out of the 4-color graphics mode.
pub trait DisplayMode {
    /// Enters the graphics mode and installs `palette`.
    fn enter(&mut self, palette: &Palette) -> Result<()>;

    /// Goes back to whatever mode was active before [`Self::enter`].
    fn restore(&mut self);
}

/// A display mode with no device behind it; the surface is only ever read
/// back by the host.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headless {
    palette: Option<Palette>,
}

impl Headless {
    /// The palette installed by the last [`DisplayMode::enter`], if still active.
    #[must_use]
    pub const fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }
}

impl DisplayMode for Headless {
    fn enter(&mut self, palette: &Palette) -> Result<()> {
        self.palette = Some(*palette);
        Ok(())
    }

    fn restore(&mut self) {
        self.palette = None;
    }
}

pub struct Screen<M: DisplayMode, S: FrameSync> {
    surface: Surface,
    atlas: TileAtlas,
    ctx: RendererContext,
    palette: Palette,
    mode: M,
    sync: S,
    active: bool,
}

impl<M: DisplayMode, S: FrameSync> Screen<M, S> {
    pub fn new(atlas: TileAtlas, palette: Palette, mode: M, sync: S) -> Self {
        Self {
            surface: Surface::new(),
            atlas,
            ctx: RendererContext::default(),
            palette,
            mode,
            sync,
            active: false,
        }
    }

    /// Enters the graphics mode with this screen's palette.
    pub fn initialize_display(&mut self) -> Result<()> {
        self.mode.enter(&self.palette)?;
        self.active = true;
        tracing::info!(
            "display initialized, palette {}",
            self.palette
                .0
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );

        Ok(())
    }

    /// Restores the previous display mode. Also done on drop.
    pub fn shutdown(&mut self) {
        if self.active {
            self.mode.restore();
            self.active = false;
            tracing::info!("display mode restored");
        }
    }

    /// Waits for a frame boundary, then clears both banks.
    pub fn reset_surface(&mut self) -> Result<()> {
        self.sync.wait_for_frame()?;
        self.surface.clear();
        tracing::debug!("surface cleared");

        Ok(())
    }

    pub fn wait_vertical_sync(&mut self) -> Result<()> {
        self.sync.wait_for_frame()
    }

    pub fn blit_tile(&mut self, tile: u8, x: u8, y: u8, mode: BlitMode) -> Result<()> {
        self.canvas().blit_tile(tile, x, y, mode)
    }

    pub fn blit_char(&mut self, tile: u8, x: u8, y: u8, color: Color, inverse: bool) -> Result<()> {
        self.canvas().blit_char(tile, x, y, color, inverse)
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) -> Result<()> {
        self.canvas().fill_rect(x, y, w, h, color)
    }

    pub fn draw_board(&mut self, player_count: usize) -> Result<()> {
        let mut canvas = Canvas::new(&mut self.surface, &self.atlas);
        board::draw_board(&mut self.ctx, &mut canvas, player_count)
    }

    pub fn draw_player_name(&mut self, quadrant: usize, name: &str, active: bool) -> Result<()> {
        let mut canvas = Canvas::new(&mut self.surface, &self.atlas);
        board::draw_player_name(&mut self.ctx, &mut canvas, quadrant, name, active)
    }

    pub fn render_field(&mut self, quadrant: usize, cells: &GameField) -> Result<()> {
        let mut canvas = Canvas::new(&mut self.surface, &self.atlas);
        field::render_field(&self.ctx, &mut canvas, quadrant, cells)
    }

    pub fn update_field_cell(
        &mut self,
        quadrant: usize,
        cells: &GameField,
        position: usize,
        blink: bool,
    ) -> Result<()> {
        let mut canvas = Canvas::new(&mut self.surface, &self.atlas);
        field::update_field_cell(&self.ctx, &mut canvas, quadrant, cells, position, blink)
    }

    pub fn draw_ship(&mut self, quadrant: usize, ship: &Ship, hidden: bool) -> Result<()> {
        let mut canvas = Canvas::new(&mut self.surface, &self.atlas);
        ship::draw_ship(&self.ctx, &mut canvas, quadrant, ship, hidden)
    }

    pub fn draw_text(&mut self, x: u8, y: u8, s: &str) -> Result<()> {
        self.canvas().draw_text(x, y, s)
    }

    pub fn draw_text_alt(&mut self, x: u8, y: u8, s: &str) -> Result<()> {
        self.canvas().draw_text_alt(x, y, s)
    }

    pub fn draw_icon(&mut self, x: u8, y: u8, icon: u8) -> Result<()> {
        self.canvas().draw_icon(x, y, icon)
    }

    pub fn draw_line(&mut self, x: u8, y: u8, w: u8) -> Result<()> {
        self.canvas().draw_line(x, y, w)
    }

    pub fn draw_space(&mut self, x: u8, y: u8, w: u8) -> Result<()> {
        self.canvas().draw_space(x, y, w)
    }

    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub const fn context(&self) -> &RendererContext {
        &self.ctx
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn mode(&self) -> &M {
        &self.mode
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.surface, &self.atlas)
    }
}

impl<M: DisplayMode, S: FrameSync> Drop for Screen<M, S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GfxError;
    use crate::field::Cell;
    use crate::tile::{Tile, glyphs};
    use pretty_assertions::assert_eq;
    use std::cell::Cell as Counter;
    use std::rc::Rc;

    /// Counts frame waits; fails every wait once `fail` is set.
    #[derive(Default, Clone)]
    struct CountingSync {
        waits: Rc<Counter<usize>>,
        fail: bool,
    }

    impl FrameSync for CountingSync {
        fn wait_for_frame(&mut self) -> Result<()> {
            self.waits.set(self.waits.get() + 1);
            if self.fail {
                Err(GfxError::SyncTimeout {
                    waited: std::time::Duration::ZERO,
                })
            } else {
                Ok(())
            }
        }
    }

    /// Records restores through a shared flag so they can be seen after drop.
    struct Recorder {
        restored: Rc<Counter<bool>>,
    }

    impl DisplayMode for Recorder {
        fn enter(&mut self, _palette: &Palette) -> Result<()> {
            Ok(())
        }

        fn restore(&mut self) {
            self.restored.set(true);
        }
    }

    fn screen(sync: CountingSync) -> Screen<Headless, CountingSync> {
        let mut atlas = TileAtlas::blank();
        atlas.set_tile(glyphs::FIELD_HIT, Tile([0x19; 16]));
        Screen::new(atlas, Palette::default(), Headless::default(), sync)
    }

    #[test]
    fn initialize_installs_palette() {
        let mut screen = screen(CountingSync::default());
        screen.initialize_display().unwrap();

        assert!(screen.is_active());
        assert_eq!(screen.mode().palette(), Some(&Palette::default()));

        screen.shutdown();
        assert_eq!(screen.mode().palette(), None);
    }

    #[test]
    fn reset_waits_for_a_frame_first() {
        let sync = CountingSync::default();
        let waits = Rc::clone(&sync.waits);
        let mut screen = screen(sync);
        screen.fill_rect(0, 0, 4, 1, Color::Secondary).unwrap();

        screen.reset_surface().unwrap();

        assert_eq!(waits.get(), 1);
        assert!(screen.surface().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn failed_sync_leaves_surface_alone() {
        let mut screen = screen(CountingSync {
            fail: true,
            ..CountingSync::default()
        });
        screen.fill_rect(0, 0, 4, 1, Color::Secondary).unwrap();

        assert!(screen.reset_surface().is_err());
        assert_eq!(screen.surface().row(0).unwrap()[0], 0xAA);
    }

    #[test]
    fn drop_restores_mode() {
        let restored = Rc::new(Counter::new(false));
        {
            let mut screen = Screen::new(
                TileAtlas::blank(),
                Palette::default(),
                Recorder {
                    restored: Rc::clone(&restored),
                },
                CountingSync::default(),
            );
            screen.initialize_display().unwrap();
        }

        assert!(restored.get());
    }

    #[test]
    fn game_flow() {
        let mut screen = screen(CountingSync::default());
        screen.initialize_display().unwrap();
        screen.reset_surface().unwrap();
        screen.draw_board(2).unwrap();
        screen.draw_player_name(0, "ann", true).unwrap();
        screen.draw_player_name(1, "bob", false).unwrap();

        let mut cells = GameField::new();
        cells.set(37, Cell::Hit).unwrap();
        screen.update_field_cell(0, &cells, 37, false).unwrap();

        assert_eq!(screen.context().player_count(), 2);
        assert_eq!(screen.context().label(1).unwrap().name, "BOB");
        assert_eq!(screen.surface().row(122).unwrap()[44], 0x19);
        assert!(screen.update_field_cell(2, &cells, 37, false).is_err());
    }
}
