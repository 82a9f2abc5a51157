//! Rectangle filler.
//!
//! Rectangles are given in pixels. A row of the rectangle covers a run of
//! bytes; the bytes strictly inside the run are overwritten with the fill
//! byte, the first and last ones are merged through an edge mask so the
//! pixels outside the run keep their color:
//!
//! ```text
//!   x = 3, w = 5            byte 0          byte 1          byte 2
//!                       | . . . # |     | # # # # |     | . . . . |
//!   left mask  (start 3)  00 00 00 11
//!   right mask (end 3)                    11 11 11 11
//! ```

use super::Canvas;
use crate::color::Color;
use crate::error::{Result, check_span};
use crate::surface::{HEIGHT, WIDTH};

/// Lanes from `start_pixel` to the end of the byte.
const fn left_mask(start_pixel: usize) -> u8 {
    0xFF >> (start_pixel * 2)
}

/// Lanes from the start of the byte up to and including `end_pixel`.
const fn right_mask(end_pixel: usize) -> u8 {
    0xFF << ((3 - end_pixel) * 2)
}

const fn merge(old: u8, fill: u8, mask: u8) -> u8 {
    (old & !mask) | (fill & mask)
}

impl Canvas<'_> {
    /// Fills `w` x `h` pixels starting at (`x`, `y`) with `color`.
    ///
    /// An empty rectangle is a no-op; one that crosses the display edge is
    /// rejected before anything is written.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) -> Result<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        check_span("rect right edge", x, w, WIDTH)?;
        check_span("rect bottom edge", y, h, HEIGHT)?;

        let fill = color.replicated();
        let last = x + w - 1;
        let start_byte = x >> 2;
        let end_byte = last >> 2;
        let start_pixel = x & 3;
        let end_pixel = last & 3;

        for row in y..y + h {
            let line = self.surface.row_mut(row)?;

            if start_byte == end_byte {
                let mask = left_mask(start_pixel) & right_mask(end_pixel);
                line[start_byte] = merge(line[start_byte], fill, mask);
                continue;
            }

            line[start_byte] = merge(line[start_byte], fill, left_mask(start_pixel));
            line[start_byte + 1..end_byte].fill(fill);
            line[end_byte] = merge(line[end_byte], fill, right_mask(end_pixel));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GfxError;
    use crate::surface::Surface;
    use crate::tile::TileAtlas;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn noisy_surface(rng: &mut StdRng) -> Surface {
        let mut surface = Surface::new();
        for row in 0..HEIGHT {
            rng.fill(surface.row_mut(row).unwrap());
        }
        surface
    }

    /// Checks every pixel: `color` inside the rectangle, `before` outside.
    fn assert_filled(before: &Surface, after: &Surface, rect: (usize, usize, usize, usize), color: Color) {
        let (x, y, w, h) = rect;
        for py in 0..HEIGHT {
            for px in 0..WIDTH {
                let inside = (x..x + w).contains(&px) && (y..y + h).contains(&py);
                let expected = if inside {
                    color
                } else {
                    before.pixel(px, py).unwrap()
                };
                assert_eq!(after.pixel(px, py).unwrap(), expected, "pixel ({px}, {py}) of {rect:?}");
            }
        }
    }

    #[test]
    fn masks() {
        assert_eq!(left_mask(0), 0xFF);
        assert_eq!(left_mask(3), 0b0000_0011);
        assert_eq!(right_mask(0), 0b1100_0000);
        assert_eq!(right_mask(3), 0xFF);
        assert_eq!(left_mask(1) & right_mask(2), 0b0011_1100);
    }

    #[test]
    fn first_row_with_color_2() {
        let atlas = TileAtlas::blank();
        let mut surface = Surface::new();
        let mut canvas = Canvas::new(&mut surface, &atlas);

        canvas.fill_rect(0, 0, 320, 1, Color::Secondary).unwrap();

        assert_eq!(surface.row(0).unwrap().to_vec(), vec![0xAA; 80]);
        assert!(surface.row(1).unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn aligned_rect() {
        let mut rng = StdRng::seed_from_u64(1);
        let atlas = TileAtlas::blank();
        let before = noisy_surface(&mut rng);
        let mut after = before.clone();

        Canvas::new(&mut after, &atlas)
            .fill_rect(8, 10, 16, 4, Color::Primary)
            .unwrap();

        assert_filled(&before, &after, (8, 10, 16, 4), Color::Primary);
    }

    #[test]
    fn unaligned_rect_straddling_two_bytes() {
        let mut rng = StdRng::seed_from_u64(2);
        let atlas = TileAtlas::blank();
        let before = noisy_surface(&mut rng);
        let mut after = before.clone();

        Canvas::new(&mut after, &atlas)
            .fill_rect(3, 0, 5, 3, Color::Foreground)
            .unwrap();

        assert_filled(&before, &after, (3, 0, 5, 3), Color::Foreground);
    }

    #[test]
    fn inside_a_single_byte() {
        let mut rng = StdRng::seed_from_u64(3);
        let atlas = TileAtlas::blank();
        let before = noisy_surface(&mut rng);
        let mut after = before.clone();

        Canvas::new(&mut after, &atlas)
            .fill_rect(9, 5, 2, 7, Color::Background)
            .unwrap();

        assert_filled(&before, &after, (9, 5, 2, 7), Color::Background);
    }

    #[test]
    fn random_rects_and_idempotence() {
        let mut rng = StdRng::seed_from_u64(4);
        let atlas = TileAtlas::blank();

        for _ in 0..25 {
            let x = rng.gen_range(0..WIDTH);
            let y = rng.gen_range(0..HEIGHT);
            let w = rng.gen_range(1..=WIDTH - x);
            let h = rng.gen_range(1..=HEIGHT - y);
            let color = Color::ALL[rng.gen_range(0..4)];

            let before = noisy_surface(&mut rng);
            let mut once = before.clone();
            Canvas::new(&mut once, &atlas).fill_rect(x, y, w, h, color).unwrap();
            assert_filled(&before, &once, (x, y, w, h), color);

            let mut twice = once.clone();
            Canvas::new(&mut twice, &atlas).fill_rect(x, y, w, h, color).unwrap();
            assert_eq!(twice.as_bytes(), once.as_bytes());
        }
    }

    #[test]
    fn rejects_rects_past_the_edge() {
        let atlas = TileAtlas::blank();
        let mut surface = Surface::new();
        let mut canvas = Canvas::new(&mut surface, &atlas);

        assert!(canvas.fill_rect(300, 0, 21, 1, Color::Foreground).is_err());
        assert!(canvas.fill_rect(0, 199, 1, 2, Color::Foreground).is_err());
        assert!(canvas.fill_rect(0, 0, 0, 50, Color::Foreground).is_ok());
        assert!(surface.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn huge_sizes_are_rejected_not_wrapped() {
        let atlas = TileAtlas::blank();
        let mut surface = Surface::new();
        let mut canvas = Canvas::new(&mut surface, &atlas);

        assert_eq!(
            canvas
                .fill_rect(10, 0, usize::MAX, 1, Color::Foreground)
                .unwrap_err(),
            GfxError::out_of_bounds("rect right edge", usize::MAX, WIDTH)
        );
        assert!(canvas.fill_rect(0, 10, 1, usize::MAX, Color::Foreground).is_err());
        assert!(canvas.fill_rect(usize::MAX, usize::MAX, 1, 1, Color::Foreground).is_err());
        assert!(surface.as_bytes().iter().all(|&b| b == 0));
    }
}
