//! # Viewer Session
//!
//! Holds the [`Screen`] and the little bit of game state the viewer needs to
//! exercise it: player names, whose turn it is, the shots fired on every
//! quadrant and the blink phase of hit markers.
//!
//! There are no game rules here. Clicking a cell simply marks it, the way
//! the game logic would after resolving a shot.

use std::time::{Duration, Instant};

use gfx::board::{MAX_PLAYERS, check_player_count};
use gfx::field::CELLS;
use gfx::{Cell, FrameSync, GameField, GfxError, Headless, Screen, Ship};

/// Time a hit marker stays in one blink phase.
pub const BLINK_PERIOD: Duration = Duration::from_millis(400);

/// A fleet in the game's packed encoding (`position + 100` is vertical).
const DEMO_FLEET: [(u8, u8); 5] = [(5, 1), (4, 130), (3, 164), (3, 77), (2, 119)];

pub type ViewerScreen = Screen<Headless, Box<dyn FrameSync>>;

/// The kind of shot a click resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Hit,
    Miss,
}

pub struct Session {
    screen: ViewerScreen,
    names: [String; MAX_PLAYERS],
    player_count: usize,
    active: usize,
    fields: [GameField; MAX_PLAYERS],
    fleet_visible: bool,
    blink: bool,
    last_blink: Instant,
}

impl Session {
    /// Fails unless `player_count` is in 1..=4.
    pub fn new(screen: ViewerScreen, player_count: usize, names: &[String]) -> gfx::Result<Self> {
        check_player_count(player_count)?;

        let names = std::array::from_fn(|i| {
            names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("player {}", i + 1))
        });

        Ok(Self {
            screen,
            names,
            player_count,
            active: 0,
            fields: Default::default(),
            fleet_visible: false,
            blink: false,
            last_blink: Instant::now(),
        })
    }

    /// Enters the display mode and draws the first board.
    pub fn start(&mut self) -> gfx::Result<()> {
        self.screen.initialize_display()?;
        self.new_game(self.player_count)
    }

    /// Clears every shot and redraws the whole board for `player_count` players.
    pub fn new_game(&mut self, player_count: usize) -> gfx::Result<()> {
        check_player_count(player_count)?;
        self.screen.reset_surface()?;
        self.screen.draw_board(player_count)?;

        self.player_count = player_count;
        self.active = 0;
        self.fields = Default::default();
        for quadrant in 0..player_count {
            self.draw_name(quadrant)?;
        }
        if self.fleet_visible {
            self.draw_fleet(false)?;
        }

        tracing::info!("new game with {player_count} players");
        Ok(())
    }

    /// Hands the turn to the next player.
    pub fn next_turn(&mut self) -> gfx::Result<()> {
        let previous = self.active;
        self.active = (self.active + 1) % self.player_count;

        self.draw_name(previous)?;
        self.draw_name(self.active)
    }

    /// Marks an empty cell; already resolved cells keep their state.
    pub fn shoot(&mut self, quadrant: usize, position: usize, shot: Shot) -> gfx::Result<()> {
        if quadrant >= self.player_count {
            return Err(GfxError::OutOfBounds {
                what: "quadrant",
                value: quadrant,
                limit: self.player_count,
            });
        }

        let field = &mut self.fields[quadrant];
        if field.get(position)? != Cell::Empty {
            return Ok(());
        }

        field.set(
            position,
            match shot {
                Shot::Hit => Cell::Hit,
                Shot::Miss => Cell::Miss,
            },
        )?;
        self.screen
            .update_field_cell(quadrant, &self.fields[quadrant], position, self.blink)
    }

    /// Advances the blink phase and redraws hit markers when it flips.
    pub fn tick(&mut self, now: Instant) -> gfx::Result<()> {
        if now.duration_since(self.last_blink) < BLINK_PERIOD {
            return Ok(());
        }
        self.last_blink = now;
        self.blink = !self.blink;

        for quadrant in 0..self.player_count {
            let field = &self.fields[quadrant];
            for position in 0..CELLS {
                if field.get(position)? == Cell::Hit {
                    self.screen
                        .update_field_cell(quadrant, field, position, self.blink)?;
                }
            }
        }

        Ok(())
    }

    /// Shows or hides the demo fleet on the first quadrant.
    pub fn set_fleet_visible(&mut self, visible: bool) -> gfx::Result<()> {
        if visible == self.fleet_visible {
            return Ok(());
        }
        self.fleet_visible = visible;
        self.draw_fleet(!visible)?;

        // Hiding paints over shots too; put them back.
        self.screen.render_field(0, &self.fields[0])
    }

    pub fn rename(&mut self, quadrant: usize, name: String) -> gfx::Result<()> {
        self.names[quadrant] = name;
        if quadrant < self.player_count {
            self.draw_name(quadrant)?;
        }
        Ok(())
    }

    /// Quadrant and cell position under a surface pixel, if any.
    #[must_use]
    pub fn hit_test(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        let ctx = self.screen.context();
        (0..ctx.player_count()).find_map(|quadrant| {
            let origin = ctx.quadrant(quadrant).ok()?.cell(0).ok()?;
            let column = (x / 8).checked_sub(origin.x)?;
            let row = y.checked_sub(origin.y)? / 8;

            (column < 10 && row < 10).then_some((quadrant, row * 10 + column))
        })
    }

    #[must_use]
    pub const fn screen(&self) -> &ViewerScreen {
        &self.screen
    }

    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn name(&self, quadrant: usize) -> &str {
        &self.names[quadrant]
    }

    #[must_use]
    pub const fn fleet_visible(&self) -> bool {
        self.fleet_visible
    }

    fn draw_name(&mut self, quadrant: usize) -> gfx::Result<()> {
        let active = quadrant == self.active;
        self.screen
            .draw_player_name(quadrant, &self.names[quadrant], active)
    }

    fn draw_fleet(&mut self, hidden: bool) -> gfx::Result<()> {
        for (size, encoded) in DEMO_FLEET {
            let ship = Ship::from_encoded(size, encoded)?;
            self.screen.draw_ship(0, &ship, hidden)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfx::{Palette, TileAtlas};
    use pretty_assertions::assert_eq;

    struct NoWait;

    impl FrameSync for NoWait {
        fn wait_for_frame(&mut self) -> gfx::Result<()> {
            Ok(())
        }
    }

    fn screen() -> ViewerScreen {
        Screen::new(
            crate::atlas::placeholder(),
            Palette::default(),
            Headless::default(),
            Box::new(NoWait) as Box<dyn FrameSync>,
        )
    }

    fn session(players: usize) -> Session {
        let screen = screen();
        let mut session = Session::new(screen, players, &["ann".to_owned()]).unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn names_default_per_quadrant() {
        let session = session(2);
        assert_eq!(session.name(0), "ann");
        assert_eq!(session.name(1), "player 2");
        assert_eq!(session.screen().context().label(1).unwrap().name, "PLAYER 2");
    }

    #[test]
    fn turns_rotate() {
        let mut session = session(3);
        session.next_turn().unwrap();
        session.next_turn().unwrap();
        session.next_turn().unwrap();

        assert_eq!(session.active(), 0);
        assert!(session.screen().context().label(0).unwrap().active);
        assert!(!session.screen().context().label(2).unwrap().active);
    }

    #[test]
    fn hit_test_maps_pixels_to_cells() {
        let session = session(2);

        // Quadrant 0 with two players starts at column 15, row 98.
        assert_eq!(session.hit_test(15 * 8, 98), Some((0, 0)));
        assert_eq!(session.hit_test(22 * 8 + 3, 98 + 3 * 8 + 7), Some((0, 37)));
        assert_eq!(session.hit_test(25 * 8, 98), None);
        assert_eq!(session.hit_test(0, 0), None);
    }

    #[test]
    fn shots_outside_the_game_are_rejected() {
        let mut session = session(2);
        assert!(session.shoot(2, 0, Shot::Hit).is_err());
        assert!(session.shoot(0, 100, Shot::Hit).is_err());
    }

    #[test]
    fn shots_only_land_on_empty_cells() {
        let mut session = session(2);
        session.shoot(1, 5, Shot::Miss).unwrap();
        session.shoot(1, 5, Shot::Hit).unwrap();

        assert_eq!(session.fields[1].get(5).unwrap(), Cell::Miss);
    }

    #[test]
    fn blink_flips_after_the_period() {
        let mut session = session(1);
        session.shoot(0, 0, Shot::Hit).unwrap();

        let later = session.last_blink + BLINK_PERIOD;
        session.tick(later).unwrap();
        assert!(session.blink);

        session.tick(later + Duration::from_millis(1)).unwrap();
        assert!(session.blink);
    }

    #[test]
    fn fleet_on_a_blank_atlas() {
        let screen = Screen::new(
            TileAtlas::blank(),
            Palette::default(),
            Headless::default(),
            Box::new(NoWait) as Box<dyn FrameSync>,
        );
        let mut session = Session::new(screen, 4, &[]).unwrap();
        session.start().unwrap();
        session.set_fleet_visible(true).unwrap();

        assert!(session.fleet_visible());
    }

    #[test]
    fn player_count_is_checked_up_front() {
        assert!(Session::new(screen(), 0, &[]).is_err());
        assert!(Session::new(screen(), 5, &[]).is_err());
    }

    #[test]
    fn bad_new_game_keeps_the_board() {
        let mut session = session(2);
        let before = session.screen().surface().as_bytes().to_vec();

        assert!(session.new_game(0).is_err());
        assert!(session.new_game(5).is_err());

        assert_eq!(session.screen().surface().as_bytes().to_vec(), before);
        assert_eq!(session.player_count(), 2);
        session.next_turn().unwrap();
        assert_eq!(session.active(), 1);
    }
}
