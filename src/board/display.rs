use std::fmt;

use super::grid::Grid;
use super::state::Board;
use super::types::{Color, Coordinate, BOARD_SIZE};

impl fmt::Display for Grid {
    /// Text diagram, black's home rank on top; uppercase is white.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let c = match self.get(Coordinate::new(col, row)) {
                    None => '.',
                    Some(id) if id.color == Color::White => id.kind.to_char().to_ascii_uppercase(),
                    Some(id) => id.kind.to_char(),
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        for color in Color::BOTH {
            if self.is_checked(color) {
                writeln!(f, "{color} is in check")?;
            }
        }
        write!(f, "captured: {}", self.captured.len())
    }
}
