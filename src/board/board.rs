//! The 8x8 board model and sole authority on move legality.
//!
//! `Board` owns the grid, the moved-square set that backs castling rights,
//! and the en-passant target window. It consults the per-piece geometric
//! rules for raw movement and layers check-safety, the castling state
//! machine, en passant, and auto-promotion on top. It is a plain value type:
//! the search clones it wholesale to explore hypothetical moves.

use std::collections::BTreeSet;

use log::trace;

use crate::board::chess_types::{
    CastleSide, ChessMove, Color, GameStatus, Piece, PieceKind, Square,
};
use crate::errors::ChessError;
use crate::rules::{king_rules, pawn_rules, piece_rules};
use crate::search::board_scoring::MaterialScorer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    /// Squares whose occupant has at some point moved away. Keyed by square,
    /// not piece identity, and squares never leave the set; consulted only
    /// for castling rights.
    moved_squares: BTreeSet<Square>,
    /// Square capturable en passant, set by a double pawn advance and
    /// cleared at the start of handling the very next move.
    en_passant_target: Option<Square>,
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for col in 0..8i8 {
            board.place_piece(Square::new(6, col), Piece::new(PieceKind::Pawn, Color::White));
            board.place_piece(Square::new(1, col), Piece::new(PieceKind::Pawn, Color::Black));
        }

        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.place_piece(Square::new(7, col), Piece::new(*kind, Color::White));
            board.place_piece(Square::new(0, col), Piece::new(*kind, Color::Black));
        }
        board
    }

    /// Empty board for external position builders (FEN loaders, tests).
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            moved_squares: BTreeSet::new(),
            en_passant_target: None,
        }
    }

    // --- State accessors for callers and external serializers ---

    /// Piece on `square`, or `None` when empty or out of range.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize]
    }

    /// Put `piece` on `square`, replacing any occupant. Out-of-range
    /// coordinates are ignored.
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        if square.in_bounds() {
            self.grid[square.row as usize][square.col as usize] = Some(piece);
        }
    }

    /// Clear `square`, returning the removed piece.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, square: Square) {
        self.en_passant_target = Some(square);
    }

    pub fn clear_en_passant_target(&mut self) {
        self.en_passant_target = None;
    }

    /// Whether the occupant of `square` has ever moved away from it.
    #[inline]
    pub fn has_square_moved(&self, square: Square) -> bool {
        self.moved_squares.contains(&square)
    }

    /// Record that the piece on `square` moved. Squares never leave the set.
    pub fn mark_square_moved(&mut self, square: Square) {
        self.moved_squares.insert(square);
    }

    /// Locate the king of `color`. `None` on malformed boards.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8i8 {
            for col in 0..8i8 {
                let square = Square::new(row, col);
                if self.piece_at(square) == Some(Piece::new(PieceKind::King, color)) {
                    return Some(square);
                }
            }
        }
        None
    }

    // --- Check and attack queries ---

    /// True when some piece of `by` has a geometrically valid move ending at
    /// `square`. Check-safety is deliberately ignored here so the scan never
    /// recurses.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        if !square.in_bounds() {
            return false;
        }
        for row in 0..8i8 {
            for col in 0..8i8 {
                let from = Square::new(row, col);
                match self.piece_at(from) {
                    Some(piece) if piece.color == by => {
                        if piece_rules::is_geometrically_valid(piece, from, square, self) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// A side is in check when its king's square is attacked. A missing king
    /// yields `false` rather than an error.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_square) => self.is_square_attacked(king_square, color.opposite()),
            None => false,
        }
    }

    // --- Legality ---

    /// Full legality test: bounds, occupancy, geometry (castling shape
    /// delegated to the castling state machine), and king safety via a
    /// cloned-board simulation.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        if !from.in_bounds() || !to.in_bounds() {
            return false;
        }
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if matches!(self.piece_at(to), Some(target) if target.color == piece.color) {
            return false;
        }

        if piece.kind == PieceKind::King && king_rules::is_castling_shape(piece.color, from, to) {
            return self.can_castle(piece.color, king_rules::castle_side_of(from, to));
        }

        if !piece_rules::is_geometrically_valid(piece, from, to, self) {
            return false;
        }

        self.move_keeps_own_king_safe(from, to, piece.color)
    }

    /// Every legal destination for the piece on `from`, scanned row-major.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut destinations = Vec::new();
        for row in 0..8i8 {
            for col in 0..8i8 {
                let to = Square::new(row, col);
                if self.is_legal_move(from, to) {
                    destinations.push(to);
                }
            }
        }
        destinations
    }

    /// Whether `color` has any legal move at all.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        for row in 0..8i8 {
            for col in 0..8i8 {
                let from = Square::new(row, col);
                match self.piece_at(from) {
                    Some(piece) if piece.color == color => {
                        if !self.legal_destinations(from).is_empty() {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Terminal-state summary for the side to move, recomputed on demand.
    pub fn status(&self, side_to_move: Color) -> GameStatus {
        if self.is_in_check(side_to_move) {
            if !self.has_legal_moves(side_to_move) {
                return GameStatus::Checkmate;
            }
            return GameStatus::Ongoing;
        }
        if !self.has_legal_moves(side_to_move) {
            return GameStatus::Stalemate;
        }
        GameStatus::Ongoing
    }

    // --- Castling state machine ---

    /// Castling eligibility, derived on every query from the moved-square
    /// set and current occupancy rather than stored flags.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let king_home = king_rules::king_home_square(color);
        let rook_home = king_rules::rook_home_square(color, side);
        if self.has_square_moved(king_home) || self.has_square_moved(rook_home) {
            return false;
        }
        if self.is_in_check(color) {
            return false;
        }

        let row = color.home_row();
        let (low, high) = if rook_home.col < king_home.col {
            (rook_home.col, king_home.col)
        } else {
            (king_home.col, rook_home.col)
        };
        for col in (low + 1)..high {
            if self.piece_at(Square::new(row, col)).is_some() {
                return false;
            }
        }

        let king_dest = king_rules::king_castle_destination(color, side);
        let enemy = color.opposite();
        !self.is_square_attacked(king_home, enemy) && !self.is_square_attacked(king_dest, enemy)
    }

    pub fn perform_castling(&mut self, color: Color, side: CastleSide) -> Result<(), ChessError> {
        if !self.can_castle(color, side) {
            return Err(ChessError::CastlingNotAllowed { color, side });
        }
        self.castle_unchecked(color, side);
        Ok(())
    }

    fn castle_unchecked(&mut self, color: Color, side: CastleSide) {
        let king_home = king_rules::king_home_square(color);
        let rook_home = king_rules::rook_home_square(color, side);
        self.relocate(king_home, king_rules::king_castle_destination(color, side));
        self.relocate(rook_home, king_rules::rook_castle_destination(color, side));
        self.mark_square_moved(king_home);
        self.mark_square_moved(rook_home);
        trace!("castled {color:?} {side:?}");
    }

    // --- En passant ---

    /// En-passant eligibility for the pawn on `from` capturing into `to`.
    pub fn can_en_passant(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some(piece) if piece.kind == PieceKind::Pawn => {
                pawn_rules::is_en_passant_capture(piece.color, from, to, self)
            }
            _ => false,
        }
    }

    pub fn perform_en_passant(&mut self, from: Square, to: Square) -> Result<(), ChessError> {
        if !self.can_en_passant(from, to) {
            return Err(ChessError::EnPassantNotAllowed { from, to });
        }
        self.en_passant_unchecked(from, to);
        Ok(())
    }

    fn en_passant_unchecked(&mut self, from: Square, to: Square) {
        self.relocate(from, to);
        // The bypassed pawn sits on the origin's rank, destination's file.
        self.remove_piece(Square::new(from.row, to.col));
        self.en_passant_target = None;
        trace!("en passant capture {from}{to}");
    }

    // --- Move application ---

    /// Validated single entry point for callers: rejects the move with a
    /// taxonomy error before any state changes, then runs the application
    /// protocol.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), ChessError> {
        for square in [from, to] {
            if !square.in_bounds() {
                return Err(ChessError::OutOfBounds {
                    row: square.row,
                    col: square.col,
                });
            }
        }
        if self.piece_at(from).is_none() {
            return Err(ChessError::EmptySquare(from));
        }
        if !self.is_legal_move(from, to) {
            return Err(ChessError::IllegalMove { from, to });
        }
        self.execute_move(from, to);
        Ok(())
    }

    /// Move application protocol without validation; callers must have
    /// established legality (the search uses this on clones of positions
    /// whose moves were already enumerated as legal).
    ///
    /// Order matters: en passant first, then the en-passant window update,
    /// then castling, then promotion or plain relocation.
    pub fn execute_move(&mut self, from: Square, to: Square) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };

        if piece.kind == PieceKind::Pawn {
            if pawn_rules::is_en_passant_capture(piece.color, from, to, self) {
                self.en_passant_unchecked(from, to);
                return;
            }
            if from.col == to.col && (to.row - from.row).abs() == 2 {
                self.en_passant_target = Some(Square::new((from.row + to.row) / 2, from.col));
            } else {
                self.en_passant_target = None;
            }
        } else {
            self.en_passant_target = None;
        }

        if piece.kind == PieceKind::King && king_rules::is_castling_shape(piece.color, from, to) {
            self.castle_unchecked(piece.color, king_rules::castle_side_of(from, to));
            return;
        }

        self.mark_square_moved(from);

        if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
            self.remove_piece(from);
            self.place_piece(to, Piece::new(PieceKind::Queen, piece.color));
            trace!("promoted pawn on {to} to a queen");
            return;
        }

        self.relocate(from, to);
    }

    /// Convenience wrapper over [`Board::apply_move`].
    pub fn apply(&mut self, chess_move: ChessMove) -> Result<(), ChessError> {
        self.apply_move(chess_move.from, chess_move.to)
    }

    /// Direct promotion of the piece on `square`, for callers exposing an
    /// under-promotion choice. Kinds a pawn cannot promote to fall back to a
    /// queen.
    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) {
        let Some(piece) = self.piece_at(square) else {
            return;
        };
        let promoted = match kind {
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => kind,
            PieceKind::Pawn | PieceKind::King => PieceKind::Queen,
        };
        self.place_piece(square, Piece::new(promoted, piece.color));
    }

    // --- Evaluation ---

    /// Static material balance, White-positive.
    pub fn evaluate_position(&self) -> i32 {
        MaterialScorer::material_balance_white_minus_black(self)
    }

    // --- Internals ---

    /// Raw relocation, overwriting (and discarding) any piece on `to`.
    fn relocate(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.remove_piece(from) {
            self.place_piece(to, piece);
        }
    }

    /// Simulate the move on a clone by raw relocation and test whether the
    /// mover's king ends up attacked. Bookkeeping (moved-set, en passant) is
    /// not updated in the simulation; only occupancy matters for check.
    fn move_keeps_own_king_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let mut probe = self.clone();
        probe.relocate(from, to);
        !probe.is_in_check(color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::board::chess_types::{
        CastleSide, Color, GameStatus, Piece, PieceKind, Square,
    };
    use crate::errors::ChessError;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::new();
        for color in [Color::White, Color::Black] {
            assert!(!board.is_in_check(color));
            assert!(!board.is_checkmate(color));
            assert!(!board.is_stalemate(color));
            assert_eq!(board.status(color), GameStatus::Ongoing);
        }
        assert_eq!(board.find_king(Color::White), Some(sq(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(sq(0, 4)));
        assert_eq!(board.evaluate_position(), 0);
    }

    #[test]
    fn missing_king_never_panics_and_reads_as_safe() {
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
        // No pieces at all means no legal moves either.
        assert!(board.is_stalemate(Color::White));
    }

    #[test]
    fn apply_move_rejects_with_taxonomy_errors() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(sq(-1, 0), sq(0, 0)),
            Err(ChessError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            board.apply_move(sq(4, 4), sq(5, 4)),
            Err(ChessError::EmptySquare(sq(4, 4)))
        );
        // Rook through its own pawn.
        assert_eq!(
            board.apply_move(sq(7, 0), sq(4, 0)),
            Err(ChessError::IllegalMove {
                from: sq(7, 0),
                to: sq(4, 0)
            })
        );
        // Nothing changed.
        assert_eq!(board, Board::new());
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut board = Board::new();
        board.apply_move(sq(6, 5), sq(5, 5)).expect("f2f3");
        board.apply_move(sq(1, 4), sq(3, 4)).expect("e7e5");
        board.apply_move(sq(6, 6), sq(4, 6)).expect("g2g4");
        board.apply_move(sq(0, 3), sq(4, 7)).expect("Qd8h4");

        assert!(board.is_in_check(Color::White));
        assert!(board.is_checkmate(Color::White));
        assert!(!board.is_stalemate(Color::White));
        assert_eq!(board.status(Color::White), GameStatus::Checkmate);
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn en_passant_window_opens_and_closes() {
        let mut board = Board::new();
        board.apply_move(sq(6, 7), sq(5, 7)).expect("h2h3");
        board.apply_move(sq(1, 3), sq(3, 3)).expect("d7d5");
        board.apply_move(sq(5, 7), sq(4, 7)).expect("h3h4");
        board.apply_move(sq(3, 3), sq(4, 3)).expect("d5d4");
        board.apply_move(sq(6, 4), sq(4, 4)).expect("e2e4");

        // White's double advance past the black d4 pawn opened the window.
        assert_eq!(board.en_passant_target(), Some(sq(5, 4)));
        assert!(board.can_en_passant(sq(4, 3), sq(5, 4)));
        assert!(board.is_legal_move(sq(4, 3), sq(5, 4)));

        // Any other move closes it.
        board.apply_move(sq(1, 0), sq(2, 0)).expect("a7a6");
        assert_eq!(board.en_passant_target(), None);
        assert!(!board.can_en_passant(sq(4, 3), sq(5, 4)));
        assert!(!board.is_legal_move(sq(4, 3), sq(5, 4)));
    }

    #[test]
    fn en_passant_execution_removes_the_bypassed_pawn() {
        let mut board = Board::new();
        board.apply_move(sq(6, 7), sq(5, 7)).expect("h2h3");
        board.apply_move(sq(1, 3), sq(3, 3)).expect("d7d5");
        board.apply_move(sq(5, 7), sq(4, 7)).expect("h3h4");
        board.apply_move(sq(3, 3), sq(4, 3)).expect("d5d4");
        board.apply_move(sq(6, 4), sq(4, 4)).expect("e2e4");
        board.apply_move(sq(4, 3), sq(5, 4)).expect("d4xe3 en passant");

        assert_eq!(
            board.piece_at(sq(5, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.piece_at(sq(4, 4)), None, "captured pawn removed");
        assert_eq!(board.piece_at(sq(4, 3)), None);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn kingside_castling_moves_both_pieces_and_marks_origins() {
        let mut board = Board::new();
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));

        board.remove_piece(sq(7, 5));
        board.remove_piece(sq(7, 6));
        assert!(board.can_castle(Color::White, CastleSide::KingSide));

        board
            .perform_castling(Color::White, CastleSide::KingSide)
            .expect("castling should succeed");
        assert_eq!(
            board.piece_at(sq(7, 6)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq(7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(board.piece_at(sq(7, 4)), None);
        assert_eq!(board.piece_at(sq(7, 7)), None);
        assert!(board.has_square_moved(sq(7, 4)));
        assert!(board.has_square_moved(sq(7, 7)));
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn queenside_castling_clears_three_squares_and_lands_on_the_c_file() {
        let mut board = Board::new();
        assert!(!board.can_castle(Color::White, CastleSide::QueenSide));

        // All three squares between the a1 rook and the king must be empty.
        board.remove_piece(sq(7, 1));
        board.remove_piece(sq(7, 2));
        assert!(!board.can_castle(Color::White, CastleSide::QueenSide));
        board.remove_piece(sq(7, 3));
        assert!(board.can_castle(Color::White, CastleSide::QueenSide));

        board.apply_move(sq(7, 4), sq(7, 2)).expect("white O-O-O");
        assert_eq!(
            board.piece_at(sq(7, 2)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq(7, 3)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(board.piece_at(sq(7, 4)), None);
        assert_eq!(board.piece_at(sq(7, 0)), None);
        assert!(board.has_square_moved(sq(7, 4)));
        assert!(board.has_square_moved(sq(7, 0)));
        assert!(!board.can_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn castling_runs_through_apply_move_with_the_king_slide_shape() {
        let mut board = Board::new();
        board.remove_piece(sq(0, 5));
        board.remove_piece(sq(0, 6));
        board.apply_move(sq(0, 4), sq(0, 6)).expect("black O-O");
        assert_eq!(
            board.piece_at(sq(0, 6)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq(0, 5)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
    }

    #[test]
    fn castling_denied_once_the_rook_square_is_marked() {
        let mut board = Board::new();
        board.remove_piece(sq(7, 5));
        board.remove_piece(sq(7, 6));

        // Rook steps out and comes straight back; its home square stays in
        // the moved set forever.
        board.apply_move(sq(7, 7), sq(7, 6)).expect("Rh1g1");
        board.apply_move(sq(7, 6), sq(7, 7)).expect("Rg1h1");
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));
        assert_eq!(
            board.perform_castling(Color::White, CastleSide::KingSide),
            Err(ChessError::CastlingNotAllowed {
                color: Color::White,
                side: CastleSide::KingSide
            })
        );
    }

    #[test]
    fn castling_denied_while_in_check_or_through_attack() {
        let mut board = Board::empty();
        board.place_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place_piece(sq(7, 7), Piece::new(PieceKind::Rook, Color::White));
        board.place_piece(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
        assert!(board.can_castle(Color::White, CastleSide::KingSide));

        // Rook on the g-file attacks the king's destination square.
        board.place_piece(sq(0, 6), Piece::new(PieceKind::Rook, Color::Black));
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));

        // Rook on the e-file gives check instead.
        board.remove_piece(sq(0, 6));
        board.place_piece(sq(3, 4), Piece::new(PieceKind::Rook, Color::Black));
        assert!(board.is_in_check(Color::White));
        assert!(!board.can_castle(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn pawn_reaching_the_far_rank_becomes_a_queen() {
        let mut board = Board::empty();
        board.place_piece(sq(1, 0), Piece::new(PieceKind::Pawn, Color::White));
        board.place_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place_piece(sq(0, 7), Piece::new(PieceKind::King, Color::Black));

        board.apply_move(sq(1, 0), sq(0, 0)).expect("a7a8=Q");
        assert_eq!(
            board.piece_at(sq(0, 0)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(board.piece_at(sq(1, 0)), None);
    }

    #[test]
    fn promote_pawn_honors_choice_and_defaults_to_queen() {
        let mut board = Board::empty();
        board.place_piece(sq(0, 0), Piece::new(PieceKind::Pawn, Color::White));
        board.promote_pawn(sq(0, 0), PieceKind::Knight);
        assert_eq!(
            board.piece_at(sq(0, 0)),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );

        board.place_piece(sq(0, 1), Piece::new(PieceKind::Pawn, Color::White));
        board.promote_pawn(sq(0, 1), PieceKind::King);
        assert_eq!(
            board.piece_at(sq(0, 1)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn legal_moves_never_leave_the_mover_in_check() {
        // Pinned knight: moving it would expose the king to the rook.
        let mut board = Board::empty();
        board.place_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place_piece(sq(5, 4), Piece::new(PieceKind::Knight, Color::White));
        board.place_piece(sq(1, 4), Piece::new(PieceKind::Rook, Color::Black));
        board.place_piece(sq(0, 0), Piece::new(PieceKind::King, Color::Black));

        assert!(board.legal_destinations(sq(5, 4)).is_empty());
        assert!(!board.is_legal_move(sq(5, 4), sq(3, 3)));
    }

    #[test]
    fn clone_and_replay_stay_identical() {
        let mut original = Board::new();
        let mut replica = original.clone();
        let sequence = [
            (sq(6, 4), sq(4, 4)),
            (sq(1, 4), sq(3, 4)),
            (sq(7, 6), sq(5, 5)),
            (sq(0, 1), sq(2, 2)),
            (sq(7, 5), sq(4, 2)),
        ];
        for (from, to) in sequence {
            original.apply_move(from, to).expect("legal move");
            replica.apply_move(from, to).expect("legal move");
        }
        assert_eq!(original, replica);
        assert_eq!(original.en_passant_target(), replica.en_passant_target());
    }

    #[test]
    fn evaluation_tracks_material_white_positive() {
        let mut board = Board::new();
        board.remove_piece(sq(0, 3));
        assert_eq!(board.evaluate_position(), 9, "black queen off");
        board.remove_piece(sq(7, 0));
        assert_eq!(board.evaluate_position(), 4, "white rook off too");
    }
}
