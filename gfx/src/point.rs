use std::ops;

use crate::error::{GfxError, Result};

/// A position on the board grid: `x` in tile columns, `y` in pixel rows.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point<i16> {
    /// Converts to unsigned screen coordinates, rejecting anything left of
    /// column 0 or above row 0.
    pub fn to_screen(self) -> Result<Point<usize>> {
        let x = usize::try_from(self.x).map_err(|_| {
            GfxError::out_of_bounds("negative column", self.x.unsigned_abs().into(), 0)
        })?;
        let y = usize::try_from(self.y).map_err(|_| {
            GfxError::out_of_bounds("negative pixel row", self.y.unsigned_abs().into(), 0)
        })?;

        Ok(Point::new(x, y))
    }
}

impl<T> ops::Add<Self> for Point<T>
where
    T: ops::Add<Output = T>,
{
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn test_point() {
        let p = Point { x: 10_i16, y: 98 };

        assert_eq!(p + Point::new(-1, -8), Point::new(9, 90));
        assert_eq!(p.to_screen().unwrap(), Point::new(10_usize, 98));
        assert!(Point::new(-1_i16, 0).to_screen().is_err());
    }
}
