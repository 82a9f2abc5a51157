use super::Canvas;
use super::blit::pixel_row;
use crate::color::Color;
use crate::error::{Result, check_span};
use crate::surface::COLUMNS;
use crate::tile::{BlitMode, glyphs};

impl Canvas<'_> {
    /// Draws `s` left to right from column `x` in the foreground color.
    pub fn draw_text(&mut self, x: u8, y: u8, s: &str) -> Result<()> {
        self.put_text(usize::from(x), pixel_row(y), s, |_| Color::Foreground, false)
    }

    /// Like [`Self::draw_text`], but only letters are drawn in the foreground
    /// color; digits and punctuation use color 1.
    pub fn draw_text_alt(&mut self, x: u8, y: u8, s: &str) -> Result<()> {
        self.put_text(
            usize::from(x),
            pixel_row(y),
            s,
            |c| {
                if c.is_ascii_alphabetic() {
                    Color::Foreground
                } else {
                    Color::Primary
                }
            },
            false,
        )
    }

    pub fn draw_icon(&mut self, x: u8, y: u8, icon: u8) -> Result<()> {
        self.blit_tile(icon, x, y, BlitMode::Mask(Color::Foreground))
    }

    /// A horizontal run of `w` blank field glyphs.
    pub fn draw_line(&mut self, x: u8, y: u8, w: u8) -> Result<()> {
        self.put_run(glyphs::FIELD_BLANK, usize::from(x), pixel_row(y), usize::from(w))
    }

    /// A horizontal run of `w` spaces.
    pub fn draw_space(&mut self, x: u8, y: u8, w: u8) -> Result<()> {
        self.put_run(glyphs::SPACE, usize::from(x), pixel_row(y), usize::from(w))
    }

    /// Text at a pixel row, each char colored by `color_of`.
    pub(crate) fn put_text(
        &mut self,
        column: usize,
        pixel_row: usize,
        s: &str,
        color_of: impl Fn(char) -> Color,
        inverse: bool,
    ) -> Result<()> {
        let len = s.chars().count();
        if len > 0 {
            check_span("text end column", column, len, COLUMNS)?;
        }

        for (i, c) in s.chars().enumerate() {
            self.put_char(glyphs::for_char(c), column + i, pixel_row, color_of(c), inverse)?;
        }

        Ok(())
    }

    pub(crate) fn put_run(&mut self, index: u8, column: usize, pixel_row: usize, w: usize) -> Result<()> {
        if w > 0 {
            check_span("run end column", column, w, COLUMNS)?;
        }

        for c in column..column + w {
            self.put_tile(index, c, pixel_row, BlitMode::Mask(Color::Foreground))?;
        }

        Ok(())
    }
}
