//! Board composition: borders, drawers, name badges.
//!
//! [`draw_board`] paints the static furniture of every active quadrant from
//! the tables in [`layout`]; [`draw_player_name`] repaints the badge of a
//! single quadrant whenever its label or turn state changes.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{GfxError, Result};
use crate::tile::{BlitMode, glyphs};

pub use self::layout::{
    BadgeSide, DrawerSide, EdgeStyle, MAX_PLAYERS, Placement, QuadrantLayout, Rect,
    check_player_count, drawer_side, field_offset,
};

pub mod layout;

/// Glyphs available for a player name (the first badge column holds the
/// turn marker).
pub const NAME_GLYPHS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLabel {
    pub name: String,
    pub active: bool,
}

/// Rendering state shared by the board and field calls of one game.
///
/// Created empty, (re)initialized by [`draw_board`]. Until then no quadrant
/// is active and every per-quadrant call is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererContext {
    field_offset: u8,
    player_count: usize,
    labels: [Option<PlayerLabel>; MAX_PLAYERS],
}

impl RendererContext {
    pub fn for_players(player_count: usize) -> Result<Self> {
        check_player_count(player_count)?;

        Ok(Self {
            field_offset: field_offset(player_count),
            player_count,
            labels: Default::default(),
        })
    }

    #[must_use]
    pub const fn field_offset(&self) -> u8 {
        self.field_offset
    }

    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.player_count
    }

    /// Layout of an active quadrant.
    pub fn quadrant(&self, index: usize) -> Result<QuadrantLayout> {
        if index >= self.player_count {
            return Err(GfxError::out_of_bounds("quadrant", index, self.player_count));
        }
        QuadrantLayout::resolve(index, self.player_count)
    }

    /// The label last drawn on a quadrant's badge.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&PlayerLabel> {
        self.labels.get(index).and_then(Option::as_ref)
    }
}

/// Paints the furniture of every quadrant for a new game of `player_count`
/// players and resets `ctx` for it.
pub fn draw_board(ctx: &mut RendererContext, canvas: &mut Canvas, player_count: usize) -> Result<()> {
    let next = RendererContext::for_players(player_count)?;
    tracing::debug!(
        "drawing board for {player_count} players, field offset {}",
        next.field_offset
    );

    for index in 0..player_count {
        let quadrant = next.quadrant(index)?;
        compose(canvas, &quadrant)?;
    }

    *ctx = next;
    Ok(())
}

fn compose(canvas: &mut Canvas, quadrant: &QuadrantLayout) -> Result<()> {
    for rect in quadrant.fills()? {
        canvas.fill_rect(rect.x, rect.y, rect.w, rect.h, rect.color)?;
    }

    for p in quadrant.placements(0)? {
        canvas.put_tile_rows(
            p.tile,
            p.column,
            p.pixel_row,
            p.rows,
            BlitMode::Mask(Color::Foreground),
        )?;
    }

    Ok(())
}

/// Repaints the badge of `quadrant` with `name`.
///
/// The active player's badge uses the highlighted corner glyphs, a bright
/// fill, a turn marker and a reverse-video name; the others get the base
/// glyphs, a dark fill and the name in color 1.
pub fn draw_player_name(
    ctx: &mut RendererContext,
    canvas: &mut Canvas,
    quadrant: usize,
    name: &str,
    active: bool,
) -> Result<()> {
    let layout = ctx.quadrant(quadrant)?;
    let label = fit_name(name);
    tracing::debug!("badge {quadrant}: {label:?} (active: {active})");

    let (highlight, fill, text, marker) = if active {
        (
            glyphs::HIGHLIGHT_DELTA,
            Color::Foreground,
            Color::Foreground,
            glyphs::ACTIVE_MARKER,
        )
    } else {
        (0, Color::Background, Color::Primary, glyphs::SPACE)
    };

    for rect in layout.badge_fills(fill)? {
        canvas.fill_rect(rect.x, rect.y, rect.w, rect.h, rect.color)?;
    }
    for p in layout.badge_corners(highlight)? {
        canvas.put_tile(p.tile, p.column, p.pixel_row, BlitMode::Mask(Color::Foreground))?;
    }

    let start = layout.badge_cell(0)?;
    canvas.put_char(marker, start.x, start.y, text, active)?;
    canvas.put_text(start.x + 1, start.y, &label, |_| text, active)?;

    ctx.labels[quadrant] = Some(PlayerLabel {
        name: label.trim_end().to_owned(),
        active,
    });

    Ok(())
}

/// Upper-cases, truncates and space-pads a name to the badge width.
fn fit_name(name: &str) -> String {
    let mut label: String = name
        .chars()
        .take(NAME_GLYPHS)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let len = label.chars().count();
    label.extend(std::iter::repeat_n(' ', NAME_GLYPHS - len));
    label
}
