//! Built-in atlas for running the viewer without the game's glyph data.
//!
//! Board furniture is drawn as plain bars and corners, field and ship glyphs
//! are pre-colored, and the character set is a 3x5 font stretched to 6x5.

use gfx::tile::glyphs;
use gfx::{Color, Tile, TileAtlas};

/// Rows of a 3x5 glyph, bit 2 is the leftmost pixel.
const FONT: [(u8, [u8; 5]); 40] = [
    (b'A', [0b010, 0b101, 0b111, 0b101, 0b101]),
    (b'B', [0b110, 0b101, 0b110, 0b101, 0b110]),
    (b'C', [0b011, 0b100, 0b100, 0b100, 0b011]),
    (b'D', [0b110, 0b101, 0b101, 0b101, 0b110]),
    (b'E', [0b111, 0b100, 0b110, 0b100, 0b111]),
    (b'F', [0b111, 0b100, 0b110, 0b100, 0b100]),
    (b'G', [0b011, 0b100, 0b101, 0b101, 0b011]),
    (b'H', [0b101, 0b101, 0b111, 0b101, 0b101]),
    (b'I', [0b111, 0b010, 0b010, 0b010, 0b111]),
    (b'J', [0b001, 0b001, 0b001, 0b101, 0b010]),
    (b'K', [0b101, 0b101, 0b110, 0b101, 0b101]),
    (b'L', [0b100, 0b100, 0b100, 0b100, 0b111]),
    (b'M', [0b101, 0b111, 0b111, 0b101, 0b101]),
    (b'N', [0b110, 0b101, 0b101, 0b101, 0b101]),
    (b'O', [0b010, 0b101, 0b101, 0b101, 0b010]),
    (b'P', [0b110, 0b101, 0b110, 0b100, 0b100]),
    (b'Q', [0b010, 0b101, 0b101, 0b110, 0b011]),
    (b'R', [0b110, 0b101, 0b110, 0b101, 0b101]),
    (b'S', [0b011, 0b100, 0b010, 0b001, 0b110]),
    (b'T', [0b111, 0b010, 0b010, 0b010, 0b010]),
    (b'U', [0b101, 0b101, 0b101, 0b101, 0b111]),
    (b'V', [0b101, 0b101, 0b101, 0b101, 0b010]),
    (b'W', [0b101, 0b101, 0b111, 0b111, 0b101]),
    (b'X', [0b101, 0b101, 0b010, 0b101, 0b101]),
    (b'Y', [0b101, 0b101, 0b010, 0b010, 0b010]),
    (b'Z', [0b111, 0b001, 0b010, 0b100, 0b111]),
    (b'0', [0b111, 0b101, 0b101, 0b101, 0b111]),
    (b'1', [0b010, 0b110, 0b010, 0b010, 0b111]),
    (b'2', [0b110, 0b001, 0b010, 0b100, 0b111]),
    (b'3', [0b110, 0b001, 0b010, 0b001, 0b110]),
    (b'4', [0b101, 0b101, 0b111, 0b001, 0b001]),
    (b'5', [0b111, 0b100, 0b110, 0b001, 0b110]),
    (b'6', [0b011, 0b100, 0b111, 0b101, 0b111]),
    (b'7', [0b111, 0b001, 0b010, 0b010, 0b010]),
    (b'8', [0b111, 0b101, 0b111, 0b101, 0b111]),
    (b'9', [0b111, 0b101, 0b111, 0b001, 0b110]),
    (b'?', [0b110, 0b001, 0b010, 0b000, 0b010]),
    (b'!', [0b010, 0b010, 0b010, 0b000, 0b010]),
    (b'.', [0b000, 0b000, 0b000, 0b000, 0b010]),
    (b':', [0b000, 0b010, 0b000, 0b010, 0b000]),
];

const fn on(lit: bool) -> Color {
    if lit { Color::Foreground } else { Color::Background }
}

fn shape(lit: impl Fn(usize, usize) -> bool) -> Tile {
    Tile::from_fn(|x, y| on(lit(x, y)))
}

/// A pre-colored glyph on water.
fn on_water(mark: impl Fn(usize, usize) -> Option<Color>) -> Tile {
    Tile::from_fn(|x, y| mark(x, y).unwrap_or(Color::Primary))
}

fn font_glyph(rows: [u8; 5]) -> Tile {
    shape(|x, y| {
        let column = x.saturating_sub(1) / 2;
        (1..6).contains(&y) && (1..7).contains(&x) && rows[y - 1] & (0b100 >> column) != 0
    })
}

fn ship(horizontal: bool, part: usize) -> Tile {
    on_water(|x, y| {
        // Along and across the ship's axis.
        let (along, across) = if horizontal { (x, y) } else { (y, x) };
        let hull = match part {
            0 => along >= 1 && (2..6).contains(&across),
            2 => {
                along <= 6
                    && (2..6).contains(&across)
                    && along.abs_diff(3) + across.abs_diff(3) < 6
            }
            _ => (2..6).contains(&across),
        };
        hull.then_some(Color::Foreground)
    })
}

/// The atlas used when no glyph file is given.
#[must_use]
pub fn placeholder() -> TileAtlas {
    let mut atlas = TileAtlas::blank();
    let mut set = |index: u8, tile: Tile| atlas.set_tile(index, tile);

    for (c, rows) in FONT {
        set(c, font_glyph(rows));
    }

    let bar_left = |x: usize, _: usize| x < 2;
    let bar_right = |x: usize, _: usize| x >= 6;
    let bar_mid = |x: usize, _: usize| (3..5).contains(&x);
    let rim = |_: usize, y: usize| (3..5).contains(&y);

    set(glyphs::INNER_EDGE_LEFT, shape(bar_right));
    set(glyphs::INNER_EDGE_RIGHT, shape(bar_left));
    set(glyphs::OUTER_EDGE_LEFT, shape(bar_left));
    set(glyphs::OUTER_EDGE_RIGHT, shape(bar_right));
    set(glyphs::DRAWER_SIDE, shape(bar_mid));
    set(glyphs::DRAWER_RIM, shape(rim));

    // Corners join the rim with the drawer side.
    set(
        glyphs::DRAWER_CORNER_LEFT,
        shape(|x, y| (rim(x, y) && x >= 3) || (bar_mid(x, y) && y >= 3)),
    );
    set(
        glyphs::DRAWER_CORNER_RIGHT,
        shape(|x, y| (rim(x, y) && x <= 4) || (bar_mid(x, y) && y >= 3)),
    );
    set(
        glyphs::DRAWER_CORNER_LEFT + glyphs::DRAWER_BOTTOM_DELTA,
        shape(|x, y| (rim(x, y) && x >= 3) || (bar_mid(x, y) && y <= 4)),
    );
    set(
        glyphs::DRAWER_CORNER_RIGHT + glyphs::DRAWER_BOTTOM_DELTA,
        shape(|x, y| (rim(x, y) && x <= 4) || (bar_mid(x, y) && y <= 4)),
    );
    set(glyphs::DRAWER_JOINT_LEFT, shape(|x, y| bar_right(x, y) || rim(x, y)));
    set(glyphs::DRAWER_JOINT_RIGHT, shape(|x, y| bar_left(x, y) || rim(x, y)));

    for delta in [0, glyphs::SHORT_EDGE_DELTA] {
        let strip = move |_: usize, y: usize| {
            if delta == 0 {
                (3..5).contains(&y)
            } else {
                y == 1
            }
        };
        set(glyphs::FAR_EDGE_STRIP + delta, shape(strip));
        set(glyphs::FAR_EDGE_LEFT + delta, shape(move |x, y| strip(x, y) && x >= 4));
        set(glyphs::FAR_EDGE_RIGHT + delta, shape(move |x, y| strip(x, y) && x <= 3));
    }

    // Badge caps, rounded; the highlighted ones are solid.
    let cap = |x: usize, y: usize, toward_field: bool| {
        let dx = if toward_field { 7 - x } else { x };
        (1..8).contains(&y) && dx + 2 >= y.abs_diff(4) * 2
    };
    for (index, toward_field) in [
        (glyphs::BADGE_TOP_LEFT, true),
        (glyphs::BADGE_BOTTOM_LEFT, true),
        (glyphs::BADGE_TOP_RIGHT, false),
        (glyphs::BADGE_BOTTOM_RIGHT, false),
    ] {
        set(index, shape(move |x, y| cap(x, y, toward_field)));
        set(index + glyphs::HIGHLIGHT_DELTA, shape(|_, _| true));
    }

    set(
        glyphs::ACTIVE_MARKER,
        shape(|x, y| (1..7).contains(&x) && y.abs_diff(4) * 2 <= 6 - x),
    );

    set(glyphs::FIELD_BLANK, on_water(|_, _| None));
    let cross = |x: usize, y: usize| x == y || x == 7 - y;
    set(
        glyphs::FIELD_HIT,
        on_water(|x, y| cross(x, y).then_some(Color::Secondary)),
    );
    set(
        glyphs::FIELD_HIT_ALT,
        on_water(|x, y| cross(x, y).then_some(Color::Foreground)),
    );
    set(
        glyphs::FIELD_MISS,
        on_water(|x, y| ((3..5).contains(&x) && (3..5).contains(&y)).then_some(Color::Foreground)),
    );

    for (part, (horizontal, vertical)) in [
        (glyphs::SHIP_STERN, glyphs::SHIP_STERN_V),
        (glyphs::SHIP_MID, glyphs::SHIP_MID_V),
        (glyphs::SHIP_BOW, glyphs::SHIP_BOW_V),
    ]
    .into_iter()
    .enumerate()
    {
        set(horizontal, ship(true, part));
        set(vertical, ship(false, part));
    }

    atlas
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn letters_and_water() {
        let atlas = placeholder();

        // Top stroke of 'T' covers font columns 0-2, pixels 1-6.
        assert_eq!(atlas.tile(b'T').row(1), [0b0011_1111, 0b1111_1100]);
        assert_eq!(atlas.tile(glyphs::FIELD_BLANK).0, [0x55; 16]);
        assert_eq!(atlas.tile(glyphs::SPACE).0, [0; 16]);
    }

    #[test]
    fn highlighted_caps_differ() {
        let atlas = placeholder();
        for base in [glyphs::BADGE_TOP_LEFT, glyphs::BADGE_BOTTOM_RIGHT] {
            assert_ne!(atlas.tile(base), atlas.tile(base + glyphs::HIGHLIGHT_DELTA));
        }
    }
}
