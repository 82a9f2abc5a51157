//! Row addressing for the interleaved framebuffer.
//!
//! The display scans even rows out of the first bank and odd rows out of the
//! second one:
//!
//! ```text
//! row 0   -> bank 0 + 0 * stride
//! row 1   -> bank 1 + 0 * stride
//! row 2   -> bank 0 + 1 * stride
//! row 3   -> bank 1 + 1 * stride
//! ...
//! row 199 -> bank 1 + 99 * stride
//! ```
//!
//! [`Interleave::row_offset`] is the only place where this shuffle is known;
//! everything else talks in logical rows.

use serde::{Deserialize, Serialize};

use super::{HEIGHT, ROW_BYTES};
use crate::error::{GfxError, Result, check_below};

/// Geometry of an interleaved two-bank framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interleave {
    stride: usize,
    bank_size: usize,
    rows: usize,
}

impl Interleave {
    /// 320x200 at 2bpp with the banks packed back to back (16000 bytes).
    pub const STANDARD: Self = Self {
        stride: 80,
        bank_size: 8000,
        rows: 200,
    };

    /// Same geometry with the second bank starting at 0x2000, the way video
    /// memory is laid out on the real adapter.
    pub const HARDWARE: Self = Self {
        stride: 80,
        bank_size: 0x2000,
        rows: 200,
    };

    /// Builds a custom layout for the 320x200 surface.
    ///
    /// The stride must hold a full 80-byte row, there must be exactly 200
    /// rows and each bank must hold its 100 half rows.
    pub fn new(stride: usize, bank_size: usize, rows: usize) -> Result<Self> {
        if stride < ROW_BYTES {
            return Err(GfxError::Layout(format!(
                "stride of {stride} bytes is shorter than a {ROW_BYTES}-byte row"
            )));
        }
        if rows != HEIGHT {
            return Err(GfxError::Layout(format!(
                "{rows} rows, the surface has {HEIGHT}"
            )));
        }
        let needed = rows.div_ceil(2) * stride;
        if needed > bank_size {
            return Err(GfxError::Layout(format!(
                "bank of {bank_size} bytes cannot hold {needed}"
            )));
        }

        Ok(Self {
            stride,
            bank_size,
            rows,
        })
    }

    /// Byte offset of the first byte of logical `row`.
    pub fn row_offset(&self, row: usize) -> Result<usize> {
        check_below("row", row, self.rows)?;

        let offset = (row >> 1) * self.stride;
        Ok(if row & 1 == 1 {
            offset + self.bank_size
        } else {
            offset
        })
    }

    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub const fn bank_size(&self) -> usize {
        self.bank_size
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total bytes spanned by both banks.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bank_size * 2
    }
}

impl Default for Interleave {
    fn default() -> Self {
        Self::STANDARD
    }
}
