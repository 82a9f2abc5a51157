use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{GfxError, Result};

/// One of the four palette indices of the packed display.
///
/// Index 0 is the background and index 3 the foreground by convention; what
/// they look like is up to the palette handed to the display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[default]
    Background = 0,
    Primary = 1,
    Secondary = 2,
    Foreground = 3,
}

impl Color {
    pub const ALL: [Self; 4] = [
        Self::Background,
        Self::Primary,
        Self::Secondary,
        Self::Foreground,
    ];

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The color replicated into all four 2-bit lanes of a byte.
    ///
    /// This is both the fill byte used by rectangles and the AND mask used by
    /// mask-mode blits: `0x00`, `0x55`, `0xAA`, `0xFF`.
    #[must_use]
    pub const fn replicated(self) -> u8 {
        let c = self as u8;
        (c << 6) | (c << 4) | (c << 2) | c
    }
}

impl TryFrom<u8> for Color {
    type Error = GfxError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Background),
            1 => Ok(Self::Primary),
            2 => Ok(Self::Secondary),
            3 => Ok(Self::Foreground),
            _ => Err(GfxError::out_of_bounds("color", value.into(), 4)),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.index()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.red, self.green, self.blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.red, color.green, color.blue]
    }
}

/// Mapping from palette index to displayed color, installed by the display
/// mode before the first draw call and stable for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(pub [Rgb; 4]);

impl Palette {
    #[must_use]
    pub const fn rgb(&self, color: Color) -> Rgb {
        self.0[color as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self([
            colors::BLACK,
            colors::LIGHT_GREEN,
            colors::DARK_RED,
            colors::WHITE,
        ])
    }
}

pub mod colors {
    use crate::color::Rgb;

    pub const BLACK: Rgb = Rgb::from_rgb(0, 0, 0);
    pub const LIGHT_GREEN: Rgb = Rgb::from_rgb(85, 255, 85);
    pub const DARK_RED: Rgb = Rgb::from_rgb(170, 0, 0);
    pub const WHITE: Rgb = Rgb::from_rgb(255, 255, 255);
}
