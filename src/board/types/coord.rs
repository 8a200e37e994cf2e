//! Grid coordinates.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 8;

/// A position on the 8x8 grid, or a 2D vector in pixel/tile space.
///
/// `x` is the column and `y` the row. Row 0 is black's home rank, row 7 is
/// white's, so `Coordinate::new(4, 6)` is e2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Build an on-board coordinate, rejecting anything outside `[0,7]`.
    pub fn on_board(x: i32, y: i32) -> Result<Self, CoordinateError> {
        let c = Coordinate::new(x, y);
        if c.in_bounds() {
            Ok(c)
        } else {
            Err(CoordinateError::OutOfBounds { x, y })
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.y as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.x as usize
    }

    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Step by `(dx, dy)`, returning `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let next = Coordinate::new(self.x + dx, self.y + dy);
        next.in_bounds().then_some(next)
    }

    /// Algebraic notation, e.g. `e2` for `(4, 6)`. Off-board coordinates
    /// come out as `(x, y)`.
    #[must_use]
    pub fn to_algebraic(self) -> String {
        if !self.in_bounds() {
            return format!("({}, {})", self.x, self.y);
        }
        format!("{}{}", (b'a' + self.x as u8) as char, BOARD_SIZE - self.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

/// Floor division on both axes (pixel to tile conversion).
impl Div<i32> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn div(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x.div_euclid(rhs), self.y.div_euclid(rhs))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let x = match bytes[0] {
            b @ b'a'..=b'h' => i32::from(b - b'a'),
            _ => return Err(invalid()),
        };
        let y = match bytes[1] {
            b @ b'1'..=b'8' => BOARD_SIZE - i32::from(b - b'0'),
            _ => return Err(invalid()),
        };
        Ok(Coordinate::new(x, y))
    }
}
