//! Coordinates, identities, the starting grid and screen geometry.

use super::sq;
use crate::board::{
    BoardConfig, BoardError, Color, ConfigError, Coordinate, CoordinateError, Grid, PieceId,
    PieceType,
};

#[test]
fn test_algebraic_notation() {
    assert_eq!(sq("a8"), Coordinate::new(0, 0));
    assert_eq!(sq("e2"), Coordinate::new(4, 6));
    assert_eq!(sq("h1"), Coordinate::new(7, 7));
    assert_eq!(Coordinate::new(2, 5).to_string(), "c3");
    assert_eq!(sq("e2").row(), 6);
    assert_eq!(sq("e2").col(), 4);

    assert_eq!(
        "i1".parse::<Coordinate>().unwrap_err(),
        CoordinateError::InvalidNotation {
            notation: "i1".to_string()
        }
    );
    assert!("e9".parse::<Coordinate>().is_err());
    assert!("e".parse::<Coordinate>().is_err());
}

#[test]
fn test_off_board_text_form() {
    assert_eq!(Coordinate::new(-1, 0).to_algebraic(), "(-1, 0)");
    assert_eq!(Coordinate::new(3, 8).to_string(), "(3, 8)");
    assert_eq!(Coordinate::new(7, 0).to_algebraic(), "h8");
}

#[test]
fn test_vector_arithmetic() {
    let a = Coordinate::new(3, 4);
    let b = Coordinate::new(1, -2);
    assert_eq!(a + b, Coordinate::new(4, 2));
    assert_eq!(a - b, Coordinate::new(2, 6));
    assert_eq!(a * 3, Coordinate::new(9, 12));
    assert_eq!(Coordinate::new(-1, 130) / 64, Coordinate::new(-1, 2));
}

#[test]
fn test_offset_never_leaves_board() {
    assert_eq!(sq("a1").offset(-1, 0), None);
    assert_eq!(sq("h8").offset(0, -1), None);
    assert_eq!(sq("a1").offset(1, -1), Some(sq("b2")));
    assert_eq!(
        Coordinate::on_board(8, 0).unwrap_err(),
        CoordinateError::OutOfBounds { x: 8, y: 0 }
    );
}

#[test]
fn test_uid_encoding() {
    let white_king = PieceId::new(1, Color::White, PieceType::King);
    assert_eq!(white_king.uid(), 126);
    assert_eq!(PieceId::from_uid(126).unwrap(), white_king);
    assert_eq!(
        PieceId::from_uid(811).unwrap(),
        PieceId::new(8, Color::Black, PieceType::Pawn)
    );
    assert_eq!(PieceId::from_uid(0), Err(BoardError::InvalidUid { uid: 0 }));
    assert_eq!(PieceId::from_uid(131), Err(BoardError::InvalidUid { uid: 131 }));
    assert_eq!(PieceId::from_uid(127), Err(BoardError::InvalidUid { uid: 127 }));
}

#[test]
fn test_starting_grid_layout() {
    let uids = Grid::starting().to_uids();
    assert_eq!(uids[0], [112, 113, 114, 115, 116, 214, 213, 212]);
    assert_eq!(uids[1], [111, 211, 311, 411, 511, 611, 711, 811]);
    for row in &uids[2..6] {
        assert_eq!(*row, [0; 8]);
    }
    assert_eq!(uids[6], [121, 221, 321, 421, 521, 621, 721, 821]);
    assert_eq!(uids[7], [122, 123, 124, 125, 126, 224, 223, 222]);
}

#[test]
fn test_grid_queries() {
    let grid = Grid::starting();
    assert_eq!(grid.iter().count(), 32);
    assert_eq!(grid.pieces_of(Color::White).count(), 16);
    assert_eq!(grid.king(Color::White), Some(sq("e1")));
    assert_eq!(grid.king(Color::Black), Some(sq("e8")));
    assert_eq!(grid.color_at(sq("d7")), Some(Color::Black));
    assert_eq!(grid.get(Coordinate::new(-1, 3)), None);
    assert_eq!(
        grid.find(PieceId::new(2, Color::White, PieceType::Knight)),
        Some(sq("g1"))
    );
}

#[test]
fn test_grid_text_diagram() {
    let text = Grid::starting().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert_eq!(lines[8], "   a b c d e f g h");
}

#[test]
fn test_px_to_grid_default_geometry() {
    let config = BoardConfig::default();
    assert_eq!(config.top_left(), Coordinate::new(64, 64));
    assert_eq!(config.cell_size(), 64);

    assert_eq!(config.px_to_grid(Coordinate::new(64, 64)), Some(sq("a8")));
    assert_eq!(config.px_to_grid(Coordinate::new(127, 127)), Some(sq("a8")));
    assert_eq!(config.px_to_grid(Coordinate::new(128, 64)), Some(sq("b8")));
    assert_eq!(
        config.px_to_grid(Coordinate::new(64 + 4 * 64 + 10, 64 + 6 * 64 + 5)),
        Some(sq("e2"))
    );
    assert_eq!(config.px_to_grid(Coordinate::new(10, 10)), None);
    assert_eq!(config.px_to_grid(Coordinate::new(63, 100)), None);
    assert_eq!(config.px_to_grid(Coordinate::new(64 + 8 * 64, 64)), None);
}

#[test]
fn test_grid_to_px_inverts_px_to_grid() {
    let config = BoardConfig::new(16, Coordinate::new(2, 3), 4).unwrap();
    for cell in [sq("a8"), sq("e4"), sq("h1")] {
        let px = config.grid_to_px(cell);
        assert_eq!(config.px_to_grid(px), Some(cell));
        assert_eq!(
            config.px_to_grid(px + Coordinate::new(config.cell_size() - 1, 0)),
            Some(cell)
        );
    }
}

#[test]
fn test_malformed_config_fails_fast() {
    assert_eq!(
        BoardConfig::new(0, Coordinate::new(1, 1), 0).unwrap_err(),
        ConfigError::InvalidTileSize { size: 0 }
    );
    assert_eq!(
        BoardConfig::new(32, Coordinate::new(1, 1), -1).unwrap_err(),
        ConfigError::InvalidPadding { padding: -1 }
    );
}
