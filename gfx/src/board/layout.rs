//! Declarative board layout.
//!
//! Every quadrant is drawn from the same tables. Positions are relative to
//! the top-left corner of the quadrant's playfield: `x` in tile columns (the
//! playfield spans columns `0..10`), `y` in pixel rows (rows `0..80`).
//!
//! Drawer tables are written for a drawer on the left of the playfield and
//! mirrored around the playfield for a right-hand drawer:
//!
//! ```text
//!   left drawer                                 right drawer
//!   col -5 -4..-2 -1  0 ........ 9  10          -1  0 ........ 9  10  11..13  14
//!   side  drawer  jnt [ playfield ] outer       outer[ playfield ] jnt drawer side
//! ```
//!
//! The name badge and the far edge do not depend on the drawer side; the
//! badge goes above the playfield for the top quadrants and below it for the
//! bottom ones, and the far edge is on the opposite side.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GfxError, Result};
use crate::point::Point;
use crate::tile::{TILE_HEIGHT, glyphs};

/// Playfield width and height in cells.
pub const FIELD_CELLS: i16 = 10;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: i16 = FIELD_CELLS * 8;

pub const MAX_PLAYERS: usize = 4;

/// Columns the layout shifts right by when there is room for it.
pub const WIDE_FIELD_OFFSET: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawerSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeSide {
    Above,
    Below,
}

/// Far-edge decoration variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeStyle {
    /// Full 8-row edge.
    Full,
    /// Single-player edge: alternate glyphs, 5 rows lower, 3 rows high.
    Short,
}

impl EdgeStyle {
    const fn glyph_delta(self) -> u8 {
        match self {
            Self::Full => 0,
            Self::Short => glyphs::SHORT_EDGE_DELTA,
        }
    }

    const fn y_offset(self) -> i16 {
        match self {
            Self::Full => 0,
            Self::Short => 5,
        }
    }

    const fn height(self) -> usize {
        match self {
            Self::Full => TILE_HEIGHT,
            Self::Short => 3,
        }
    }
}

/// Playfield origin and badge side of every quadrant, before the field offset.
const QUADRANTS: [(Point<i16>, BadgeSide); MAX_PLAYERS] = [
    (Point::new(9, 98), BadgeSide::Below),
    (Point::new(9, 10), BadgeSide::Above),
    (Point::new(21, 10), BadgeSide::Above),
    (Point::new(21, 98), BadgeSide::Below),
];

/// Horizontal field offset for a player count.
#[must_use]
pub const fn field_offset(player_count: usize) -> u8 {
    if player_count > 2 {
        0
    } else {
        WIDE_FIELD_OFFSET
    }
}

/// Quadrant 0 always keeps its drawer on the left. With two players the
/// second board mirrors the first; with three or four the right-hand column
/// of boards (index 2 and 3) does.
#[must_use]
pub const fn drawer_side(index: usize, player_count: usize) -> DrawerSide {
    if index > 1 || (player_count == 2 && index == 1) {
        DrawerSide::Right
    } else {
        DrawerSide::Left
    }
}

/// Rejects player counts outside 1..=4.
pub fn check_player_count(player_count: usize) -> Result<()> {
    if (1..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(GfxError::out_of_bounds(
            "player count",
            player_count,
            MAX_PLAYERS + 1,
        ))
    }
}

/// A glyph with its mirrored counterpart for right-hand drawers.
#[derive(Debug, Clone, Copy)]
struct Glyph {
    left: u8,
    right: u8,
}

impl Glyph {
    const fn same(index: u8) -> Self {
        Self {
            left: index,
            right: index,
        }
    }

    const fn mirrored(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    const fn pick(self, side: DrawerSide) -> u8 {
        match side {
            DrawerSide::Left => self.left,
            DrawerSide::Right => self.right,
        }
    }
}

/// A run of identical glyphs going right (`dx = 1`) or down (`dy = 8`).
#[derive(Debug, Clone, Copy)]
struct Run {
    glyph: Glyph,
    at: Point<i16>,
    step: Point<i16>,
    count: i16,
}

impl Run {
    const fn one(glyph: Glyph, x: i16, y: i16) -> Self {
        Self::across(glyph, x, y, 1)
    }

    const fn across(glyph: Glyph, x: i16, y: i16, count: i16) -> Self {
        Self {
            glyph,
            at: Point::new(x, y),
            step: Point::new(1, 0),
            count,
        }
    }

    const fn down(glyph: Glyph, x: i16, y: i16, count: i16) -> Self {
        Self {
            glyph,
            at: Point::new(x, y),
            step: Point::new(0, 8),
            count,
        }
    }
}

const RIM: Glyph = Glyph::same(glyphs::DRAWER_RIM);
const SIDE: Glyph = Glyph::same(glyphs::DRAWER_SIDE);
const CORNER_TOP: Glyph = Glyph::mirrored(glyphs::DRAWER_CORNER_LEFT, glyphs::DRAWER_CORNER_RIGHT);
const CORNER_BOTTOM: Glyph = Glyph::mirrored(
    glyphs::DRAWER_CORNER_LEFT + glyphs::DRAWER_BOTTOM_DELTA,
    glyphs::DRAWER_CORNER_RIGHT + glyphs::DRAWER_BOTTOM_DELTA,
);
const JOINT: Glyph = Glyph::mirrored(glyphs::DRAWER_JOINT_LEFT, glyphs::DRAWER_JOINT_RIGHT);
const INNER: Glyph = Glyph::mirrored(glyphs::INNER_EDGE_LEFT, glyphs::INNER_EDGE_RIGHT);
const OUTER: Glyph = Glyph::mirrored(glyphs::OUTER_EDGE_LEFT, glyphs::OUTER_EDGE_RIGHT);

/// Last glyph row of the drawer, flush with the bottom of the playfield.
const DRAWER_BOTTOM: i16 = FIELD_HEIGHT - 8;

/// Drawer and side edges, written for a left-hand drawer.
const DRAWER: [Run; 9] = [
    Run::across(RIM, -4, 0, 3),
    Run::across(RIM, -4, DRAWER_BOTTOM, 3),
    Run::one(CORNER_TOP, -5, 0),
    Run::one(CORNER_BOTTOM, -5, DRAWER_BOTTOM),
    Run::down(SIDE, -5, 8, 8),
    Run::one(JOINT, -1, 0),
    Run::one(JOINT, -1, DRAWER_BOTTOM),
    Run::down(INNER, -1, 8, 8),
    Run::down(OUTER, FIELD_CELLS, 0, FIELD_CELLS),
];

/// A pixel rectangle relative to the playfield origin (`x` in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub x: i16,
    pub y: i16,
    pub w: u16,
    pub h: u16,
    pub color: Color,
}

impl Fill {
    const fn new(x: i16, y: i16, w: u16, h: u16, color: Color) -> Self {
        Self { x, y, w, h, color }
    }

    /// Reflects the rectangle around the playfield's vertical axis.
    const fn mirror(self) -> Self {
        Self {
            x: FIELD_CELLS * 8 - self.x - self.w as i16,
            ..self
        }
    }
}

/// Color the playfield water is filled with.
pub const FIELD_COLOR: Color = Color::Primary;

/// Playfield and drawer interior, written for a left-hand drawer.
const FIELD_FILLS: [Fill; 2] = [
    Fill::new(0, 0, 80, 80, FIELD_COLOR),
    Fill::new(-32, 8, 24, 64, Color::Primary),
];

/// A glyph resolved to absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tile: u8,
    pub column: usize,
    pub pixel_row: usize,
    pub rows: usize,
}

/// A rectangle resolved to absolute screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
    pub color: Color,
}

/// Rows of the name badge relative to the playfield origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeGeometry {
    /// First row of the fill, the label and the corner glyphs.
    pub text_row: i16,
    pub border_row: i16,
    pub corners: (u8, u8),
}

impl BadgeGeometry {
    pub const FILL_HEIGHT: u16 = 9;

    #[must_use]
    pub const fn for_side(side: BadgeSide) -> Self {
        match side {
            BadgeSide::Above => Self {
                text_row: -(Self::FILL_HEIGHT as i16),
                border_row: -(Self::FILL_HEIGHT as i16) - 1,
                corners: (glyphs::BADGE_TOP_LEFT, glyphs::BADGE_TOP_RIGHT),
            },
            BadgeSide::Below => Self {
                text_row: FIELD_HEIGHT,
                border_row: FIELD_HEIGHT + Self::FILL_HEIGHT as i16,
                corners: (glyphs::BADGE_BOTTOM_LEFT, glyphs::BADGE_BOTTOM_RIGHT),
            },
        }
    }

    /// Fill, border line and the two border corner dots.
    const fn fills(self, fill: Color) -> [Fill; 4] {
        [
            Fill::new(0, self.text_row, 80, Self::FILL_HEIGHT, fill),
            Fill::new(0, self.border_row, 80, 1, Color::Primary),
            Fill::new(-1, self.border_row, 1, 1, Color::Secondary),
            Fill::new(80, self.border_row, 1, 1, Color::Secondary),
        ]
    }
}

/// Everything needed to draw one quadrant for a given player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantLayout {
    pub index: usize,
    /// Playfield top-left: tile column and pixel row.
    pub origin: (i16, i16),
    pub drawer: DrawerSide,
    pub badge: BadgeSide,
    pub far_edge: Option<EdgeStyle>,
}

impl QuadrantLayout {
    pub fn resolve(index: usize, player_count: usize) -> Result<Self> {
        check_player_count(player_count)?;
        if index >= player_count {
            return Err(GfxError::out_of_bounds("quadrant", index, player_count));
        }

        let (origin, badge) = QUADRANTS[index];
        let origin = origin + Point::new(i16::from(field_offset(player_count)), 0);

        let far_edge = if player_count == 1 {
            Some(EdgeStyle::Short)
        } else if index > 0 {
            Some(EdgeStyle::Full)
        } else {
            None
        };

        Ok(Self {
            index,
            origin: (origin.x, origin.y),
            drawer: drawer_side(index, player_count),
            badge,
            far_edge,
        })
    }

    const fn origin_point(&self) -> Point<i16> {
        Point::new(self.origin.0, self.origin.1)
    }

    #[must_use]
    pub const fn badge_geometry(&self) -> BadgeGeometry {
        BadgeGeometry::for_side(self.badge)
    }

    /// Screen column and pixel row of a playfield cell (0-99, row-major).
    pub fn cell(&self, position: usize) -> Result<Point<usize>> {
        crate::error::check_below("cell position", position, 100)?;
        let row = (position / 10) as i16;
        let column = (position % 10) as i16;

        (self.origin_point() + Point::new(column, row * 8)).to_screen()
    }

    /// Screen column and pixel row of a badge column (0-9) on the text row.
    pub fn badge_cell(&self, column: i16) -> Result<Point<usize>> {
        let badge = self.badge_geometry();
        (self.origin_point() + Point::new(column, badge.text_row)).to_screen()
    }

    /// Glyphs of the drawer, the side edges, the badge corners and the far edge.
    pub fn placements(&self, highlight: u8) -> Result<Vec<Placement>> {
        let mut out = Vec::new();

        for run in DRAWER {
            for i in 0..run.count {
                let at = Point::new(run.at.x + run.step.x * i, run.at.y + run.step.y * i);
                out.push(self.place(run.glyph.pick(self.drawer), self.mirror(at), TILE_HEIGHT)?);
            }
        }

        out.extend(self.badge_corners(highlight)?);

        if let Some(style) = self.far_edge {
            let row = match self.badge {
                BadgeSide::Above => FIELD_HEIGHT,
                BadgeSide::Below => -8,
            } + style.y_offset();
            let delta = style.glyph_delta();
            let height = style.height();

            out.push(self.place(glyphs::FAR_EDGE_LEFT + delta, Point::new(-1, row), height)?);
            for column in 0..FIELD_CELLS {
                out.push(self.place(glyphs::FAR_EDGE_STRIP + delta, Point::new(column, row), height)?);
            }
            out.push(self.place(glyphs::FAR_EDGE_RIGHT + delta, Point::new(FIELD_CELLS, row), height)?);
        }

        Ok(out)
    }

    /// The two glyphs flanking the badge, shifted by `highlight`.
    pub fn badge_corners(&self, highlight: u8) -> Result<[Placement; 2]> {
        let badge = self.badge_geometry();
        let (left, right) = badge.corners;

        Ok([
            self.place(left.wrapping_add(highlight), Point::new(-1, badge.text_row), TILE_HEIGHT)?,
            self.place(
                right.wrapping_add(highlight),
                Point::new(FIELD_CELLS, badge.text_row),
                TILE_HEIGHT,
            )?,
        ])
    }

    /// Playfield, drawer interior and badge rectangles.
    pub fn fills(&self) -> Result<Vec<Rect>> {
        let mut out = Vec::new();
        for fill in FIELD_FILLS {
            let fill = match self.drawer {
                DrawerSide::Left => fill,
                DrawerSide::Right => fill.mirror(),
            };
            out.push(self.resolve_fill(fill)?);
        }
        out.extend(self.badge_fills(Color::Foreground)?);

        Ok(out)
    }

    /// Badge rectangles with the given fill color.
    pub fn badge_fills(&self, fill: Color) -> Result<[Rect; 4]> {
        let [a, b, c, d] = self.badge_geometry().fills(fill);
        Ok([
            self.resolve_fill(a)?,
            self.resolve_fill(b)?,
            self.resolve_fill(c)?,
            self.resolve_fill(d)?,
        ])
    }

    const fn mirror(&self, at: Point<i16>) -> Point<i16> {
        match self.drawer {
            DrawerSide::Left => at,
            DrawerSide::Right => Point::new(FIELD_CELLS - 1 - at.x, at.y),
        }
    }

    fn place(&self, tile: u8, at: Point<i16>, rows: usize) -> Result<Placement> {
        let screen = (self.origin_point() + at).to_screen()?;
        Ok(Placement {
            tile,
            column: screen.x,
            pixel_row: screen.y,
            rows,
        })
    }

    fn resolve_fill(&self, fill: Fill) -> Result<Rect> {
        let origin = self.origin_point();
        let at = Point::new(origin.x * 8 + fill.x, origin.y + fill.y).to_screen()?;

        Ok(Rect {
            x: at.x,
            y: at.y,
            w: fill.w.into(),
            h: fill.h.into(),
            color: fill.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drawer_orientation_per_player_count() {
        use DrawerSide::{Left, Right};

        let sides = |n: usize| -> Vec<DrawerSide> {
            (0..n)
                .map(|i| QuadrantLayout::resolve(i, n).unwrap().drawer)
                .collect()
        };

        assert_eq!(sides(1), vec![Left]);
        assert_eq!(sides(2), vec![Left, Right]);
        assert_eq!(sides(3), vec![Left, Left, Right]);
        assert_eq!(sides(4), vec![Left, Left, Right, Right]);
    }

    #[test]
    fn field_offset_depends_on_player_count() {
        assert_eq!(field_offset(1), 6);
        assert_eq!(field_offset(2), 6);
        assert_eq!(field_offset(3), 0);
        assert_eq!(QuadrantLayout::resolve(1, 2).unwrap().origin, (15, 10));
        assert_eq!(QuadrantLayout::resolve(3, 4).unwrap().origin, (21, 98));
    }

    #[test]
    fn invalid_counts_and_indices() {
        assert!(QuadrantLayout::resolve(0, 0).is_err());
        assert!(QuadrantLayout::resolve(0, 5).is_err());
        assert!(QuadrantLayout::resolve(2, 2).is_err());
    }

    #[test]
    fn far_edge_styles() {
        assert_eq!(QuadrantLayout::resolve(0, 1).unwrap().far_edge, Some(EdgeStyle::Short));
        assert_eq!(QuadrantLayout::resolve(0, 3).unwrap().far_edge, None);
        assert_eq!(QuadrantLayout::resolve(2, 3).unwrap().far_edge, Some(EdgeStyle::Full));
    }

    #[test]
    fn right_drawer_is_a_mirror_of_the_left_one() {
        let left = QuadrantLayout::resolve(1, 4).unwrap();
        let right = QuadrantLayout::resolve(2, 4).unwrap();

        let drawer_columns = |q: &QuadrantLayout| -> Vec<i16> {
            let mut cols: Vec<i16> = q
                .placements(0)
                .unwrap()
                .iter()
                .filter(|p| p.tile == glyphs::DRAWER_RIM)
                .map(|p| p.column as i16 - q.origin.0)
                .collect();
            cols.sort_unstable();
            cols.dedup();
            cols
        };

        assert_eq!(drawer_columns(&left), vec![-4, -3, -2]);
        assert_eq!(drawer_columns(&right), vec![11, 12, 13]);

        let right_corner = right
            .placements(0)
            .unwrap()
            .into_iter()
            .find(|p| p.tile == glyphs::DRAWER_CORNER_RIGHT)
            .unwrap();
        assert_eq!((right_corner.column, right_corner.pixel_row), (21 + 14, 10));

        let drawer_fill = right.fills().unwrap()[1];
        assert_eq!((drawer_fill.x, drawer_fill.w), ((21 + 11) * 8, 24));
    }

    #[test]
    fn badge_sides() {
        let top = QuadrantLayout::resolve(1, 2).unwrap();
        let bottom = QuadrantLayout::resolve(0, 2).unwrap();

        let [fill, border, ..] = top.badge_fills(Color::Foreground).unwrap();
        assert_eq!((fill.y, fill.h, border.y), (1, 9, 0));

        let [fill, border, ..] = bottom.badge_fills(Color::Foreground).unwrap();
        assert_eq!((fill.y, fill.h, border.y), (178, 9, 187));

        let corners = bottom.badge_corners(glyphs::HIGHLIGHT_DELTA).unwrap();
        assert_eq!(corners[0].tile, glyphs::BADGE_BOTTOM_LEFT + 0x80);
        assert_eq!((corners[1].column, corners[1].pixel_row), (25, 178));
    }

    #[test]
    fn every_layout_stays_on_screen() {
        for n in 1..=MAX_PLAYERS {
            for i in 0..n {
                let q = QuadrantLayout::resolve(i, n).unwrap();
                for p in q.placements(glyphs::HIGHLIGHT_DELTA).unwrap() {
                    assert!(p.column < 40, "{p:?}");
                    assert!(p.pixel_row + p.rows <= 200, "{p:?}");
                }
                for r in q.fills().unwrap() {
                    assert!(r.x + r.w <= 320 && r.y + r.h <= 200, "{r:?}");
                }
            }
        }
    }

    #[test]
    fn single_player_edge_is_short() {
        let q = QuadrantLayout::resolve(0, 1).unwrap();
        let strip: Vec<Placement> = q
            .placements(0)
            .unwrap()
            .into_iter()
            .filter(|p| p.tile == glyphs::FAR_EDGE_STRIP + glyphs::SHORT_EDGE_DELTA)
            .collect();

        assert_eq!(strip.len(), 10);
        assert!(strip.iter().all(|p| p.pixel_row == 95 && p.rows == 3));
    }

    #[test]
    fn cells() {
        let q = QuadrantLayout::resolve(0, 2).unwrap();
        assert_eq!(q.cell(0).unwrap(), Point::new(15, 98));
        assert_eq!(q.cell(37).unwrap(), Point::new(22, 122));
        assert!(q.cell(100).is_err());
    }
}
