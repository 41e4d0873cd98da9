//! ASCII board rendering for logs and debugging.

use crate::board::board::Board;
use crate::board::chess_types::Square;

const FILE_LABELS: &str = "  a b c d e f g h\n";

/// Render the board from White's side: rank 8 on top, files labelled along
/// the top and bottom edges, empty squares drawn as dots.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');
        for col in 0..8i8 {
            let symbol = board
                .piece_at(Square::new(row, col))
                .map(|piece| piece.symbol())
                .unwrap_or('.');
            out.push(symbol);
            out.push(' ');
        }
        out.push(rank);
        out.push('\n');
    }
    out.push_str(FILE_LABELS);
    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board::board::Board;

    #[test]
    fn starting_position_renders_with_black_on_top() {
        let rendered = render_board(&Board::new());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[2], "7 p p p p p p p p 7");
        assert_eq!(lines[3], "6 . . . . . . . . 6");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn empty_board_is_all_dots() {
        let rendered = render_board(&Board::empty());
        for rank in 1..=8 {
            assert!(rendered.contains(&format!("{rank} . . . . . . . . {rank}")));
        }
    }
}
