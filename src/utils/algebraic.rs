//! Conversion between algebraic square names and board coordinates.
//!
//! Files map to columns left to right and ranks count up from White's side,
//! so "a8" is (0, 0) and "h1" is (7, 7).

use crate::board::chess_types::Square;
use crate::errors::ChessError;

/// Parse a two-character square name such as "e4".
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessError> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidAlgebraic(text.to_string()));
    };
    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_string()));
    }
    let col = (file as u8 - b'a') as i8;
    let row = 7 - (rank as u8 - b'1') as i8;
    Ok(Square::new(row, col))
}

/// Render a square as its algebraic name, rejecting off-board coordinates.
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if !square.in_bounds() {
        return Err(ChessError::OutOfBounds {
            row: square.row,
            col: square.col,
        });
    }
    let file = (b'a' + square.col as u8) as char;
    let rank = (b'1' + (7 - square.row) as u8) as char;
    Ok(format!("{file}{rank}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::board::chess_types::Square;
    use crate::errors::ChessError;

    #[test]
    fn corners_map_to_the_expected_coordinates() {
        assert_eq!(
            algebraic_to_square("a8").expect("valid square"),
            Square::new(0, 0)
        );
        assert_eq!(
            algebraic_to_square("h1").expect("valid square"),
            Square::new(7, 7)
        );
        assert_eq!(
            algebraic_to_square("e4").expect("valid square"),
            Square::new(4, 4)
        );
    }

    #[test]
    fn parsing_is_case_insensitive_on_the_file() {
        assert_eq!(
            algebraic_to_square("E2").expect("valid square"),
            Square::new(6, 4)
        );
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e44", "i4", "a0", "a9", "44"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraic(bad.to_string()))
            );
        }
    }

    #[test]
    fn rendering_rejects_off_board_squares() {
        assert_eq!(
            square_to_algebraic(Square::new(-1, 0)),
            Err(ChessError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            square_to_algebraic(Square::new(3, 8)),
            Err(ChessError::OutOfBounds { row: 3, col: 8 })
        );
    }

    #[test]
    fn round_trips_every_square() {
        for row in 0..8i8 {
            for col in 0..8i8 {
                let square = Square::new(row, col);
                let name = square_to_algebraic(square).expect("in bounds");
                assert_eq!(algebraic_to_square(&name).expect("valid name"), square);
            }
        }
    }
}
