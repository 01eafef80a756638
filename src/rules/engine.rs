//! Move classification and forced-capture rules.
//!
//! Implementors expose the authoritative board, the side to move, and the
//! moves staged so far this turn. Every rule predicate is a provided
//! method computed from those three, so the predicates never mutate state
//! and can be exercised against any fixture.
//!
//! ## Staged moves
//!
//! Staged moves are not applied to the board until commit. While a jump
//! chain is pending the predicates read the board through that chain:
//! the chain's first square counts as vacated, squares it already jumped
//! over cannot be jumped again, and the moving piece is the one still
//! standing on the chain's first square.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Color, Move, MoveKind, Piece, Position};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Color,
}

impl GameResult {
    /// The side that ran out of pieces.
    #[must_use]
    pub fn loser(&self) -> Color {
        self.winner.opponent()
    }

    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner == color
    }
}

/// At most four diagonal targets per square.
pub type Candidates = SmallVec<[Move; 4]>;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Checkers rules over a board and a pending chain.
pub trait RulesEngine {
    /// The authoritative board.
    fn board(&self) -> &Board;

    /// Side whose turn it is.
    fn turn_color(&self) -> Color;

    /// Moves staged this turn, oldest first.
    fn pending_moves(&self) -> &[Move];

    // === Chain context ===

    /// First square of a pending jump chain.
    fn chain_origin(&self) -> Option<Position> {
        self.pending_moves()
            .first()
            .filter(|m| m.is_jump())
            .map(|m| m.start)
    }

    /// What sits on `pos` once the pending chain is taken into account.
    fn occupant(&self, pos: Position) -> Option<Piece> {
        if let Some(origin) = self.chain_origin() {
            if pos == origin {
                return None;
            }
            if self
                .pending_moves()
                .iter()
                .any(|m| m.is_jump() && m.captured() == pos)
            {
                return None;
            }
        }
        self.board().piece_at(pos)
    }

    /// The piece making `mv`.
    ///
    /// Inside a jump chain this is the piece on the chain's first square,
    /// since `mv.start` is an intermediate landing square that is still
    /// empty on the board.
    fn moving_piece(&self, mv: &Move) -> Option<Piece> {
        match self.chain_origin() {
            Some(origin) => self.board().piece_at(origin),
            None => self.occupant(mv.start),
        }
    }

    // === Classification ===

    /// One forward diagonal step (either direction for kings) onto an
    /// empty square, by a piece of the side to move.
    fn is_simple_move(&self, mv: &Move) -> bool {
        if !mv.is_well_formed() {
            return false;
        }
        let Some(piece) = self.occupant(mv.start) else {
            return false;
        };
        let (dr, dc) = mv.start.delta(mv.end);

        piece.color == self.turn_color()
            && self.occupant(mv.end).is_none()
            && dr.abs() == 1
            && dc.abs() == 1
            && piece.may_travel(dr)
    }

    /// Two diagonal steps in an allowed direction over an opposing piece
    /// onto an empty square.
    fn is_jump_move(&self, mv: &Move) -> bool {
        if !mv.is_well_formed() {
            return false;
        }
        let Some(piece) = self.moving_piece(mv) else {
            return false;
        };
        let (dr, dc) = mv.start.delta(mv.end);
        let opponent = self.turn_color().opponent();

        piece.color == self.turn_color()
            && dr.abs() == 2
            && dc.abs() == 2
            && piece.may_travel(dr)
            && self.occupant(mv.end).is_none()
            && self
                .occupant(mv.captured())
                .is_some_and(|p| p.color == opponent)
    }

    /// Classify `mv`, ignoring forced-capture policy.
    fn classify(&self, mv: &Move) -> Option<MoveKind> {
        if self.is_simple_move(mv) {
            Some(MoveKind::Simple)
        } else if self.is_jump_move(mv) {
            Some(MoveKind::Jump)
        } else {
            None
        }
    }

    // === Enumeration ===

    /// Legal jumps starting at `start`.
    fn jumps_from(&self, start: Position) -> Candidates {
        DIAGONALS
            .iter()
            .filter_map(|&(dr, dc)| start.offset(2 * dr, 2 * dc))
            .map(|end| Move::new(start, end))
            .filter(|m| self.is_jump_move(m))
            .map(|m| m.with_kind(MoveKind::Jump))
            .collect()
    }

    /// Legal simple moves starting at `start`.
    fn simples_from(&self, start: Position) -> Candidates {
        DIAGONALS
            .iter()
            .filter_map(|&(dr, dc)| start.offset(dr, dc))
            .map(|end| Move::new(start, end))
            .filter(|m| self.is_simple_move(m))
            .map(|m| m.with_kind(MoveKind::Simple))
            .collect()
    }

    /// Whether any piece of the side to move can capture.
    ///
    /// Scans the board as it stands at the start of the turn.
    fn any_jump_available(&self) -> bool {
        let color = self.turn_color();
        self.board()
            .pieces(color)
            .any(|(pos, _)| !self.jumps_from(pos).is_empty())
    }

    /// Jumps that continue a chain from `last`'s landing square, not
    /// counting the way back.
    fn continuation_jumps(&self, last: &Move) -> Candidates {
        self.jumps_from(last.end)
            .into_iter()
            .filter(|m| m.end != last.start)
            .collect()
    }

    /// Whether the chain ending in `last` must keep jumping.
    fn continuation_jump_available(&self, last: &Move) -> bool {
        !self.continuation_jumps(last).is_empty()
    }

    /// Every jump the side to move may stage right now.
    fn legal_jump_moves(&self) -> Vec<Move> {
        match self.pending_moves().last() {
            Some(last) if last.is_jump() => self.continuation_jumps(last).into_vec(),
            Some(_) => Vec::new(),
            None => {
                let color = self.turn_color();
                self.board()
                    .pieces(color)
                    .flat_map(|(pos, _)| self.jumps_from(pos))
                    .collect()
            }
        }
    }

    /// Every simple move the side to move may stage right now.
    ///
    /// Empty while a capture is available or once a move is staged.
    fn legal_simple_moves(&self) -> Vec<Move> {
        if !self.pending_moves().is_empty() || self.any_jump_available() {
            return Vec::new();
        }
        let color = self.turn_color();
        self.board()
            .pieces(color)
            .flat_map(|(pos, _)| self.simples_from(pos))
            .collect()
    }

    // === Outcome ===

    /// `Some` once either side has no pieces left.
    fn result(&self) -> Option<GameResult> {
        let board = self.board();
        Color::ALL
            .into_iter()
            .find(|&c| board.count(c) == 0)
            .map(|loser| GameResult {
                winner: loser.opponent(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        board: Board,
        turn: Color,
        pending: Vec<Move>,
    }

    impl Fixture {
        fn new(turn: Color, pieces: &[((i8, i8), Piece)]) -> Self {
            let mut board = Board::empty();
            for &((row, cell), piece) in pieces {
                board.place(Position::new(row, cell), piece);
            }
            Self {
                board,
                turn,
                pending: Vec::new(),
            }
        }
    }

    impl RulesEngine for Fixture {
        fn board(&self) -> &Board {
            &self.board
        }

        fn turn_color(&self) -> Color {
            self.turn
        }

        fn pending_moves(&self) -> &[Move] {
            &self.pending
        }
    }

    const RED_MAN: Piece = Piece::man(Color::Red);
    const RED_KING: Piece = Piece::king(Color::Red);
    const WHITE_MAN: Piece = Piece::man(Color::White);

    #[test]
    fn test_game_result() {
        let result = GameResult { winner: Color::Red };
        assert!(result.is_winner(Color::Red));
        assert!(!result.is_winner(Color::White));
        assert_eq!(result.loser(), Color::White);
    }

    #[test]
    fn test_simple_moves_forward_only_for_men() {
        let f = Fixture::new(Color::Red, &[((5, 2), RED_MAN)]);

        assert!(f.is_simple_move(&Move::from_coords((5, 2), (4, 1))));
        assert!(f.is_simple_move(&Move::from_coords((5, 2), (4, 3))));
        assert!(!f.is_simple_move(&Move::from_coords((5, 2), (6, 1))));
        assert!(!f.is_simple_move(&Move::from_coords((5, 2), (3, 4))));
        assert!(!f.is_simple_move(&Move::from_coords((5, 2), (4, 2))));
    }

    #[test]
    fn test_white_men_move_down() {
        let f = Fixture::new(Color::White, &[((2, 1), WHITE_MAN)]);

        assert!(f.is_simple_move(&Move::from_coords((2, 1), (3, 0))));
        assert!(!f.is_simple_move(&Move::from_coords((2, 1), (1, 0))));
    }

    #[test]
    fn test_kings_move_both_ways() {
        let f = Fixture::new(Color::Red, &[((4, 3), RED_KING)]);

        assert!(f.is_simple_move(&Move::from_coords((4, 3), (5, 4))));
        assert!(f.is_simple_move(&Move::from_coords((4, 3), (3, 2))));
        assert_eq!(f.simples_from(Position::new(4, 3)).len(), 4);
    }

    #[test]
    fn test_simple_move_needs_own_piece_and_empty_target() {
        let f = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((4, 1), WHITE_MAN), ((2, 1), WHITE_MAN)]);

        assert!(!f.is_simple_move(&Move::from_coords((5, 2), (4, 1))));
        assert!(!f.is_simple_move(&Move::from_coords((2, 1), (3, 2))));
        assert!(!f.is_simple_move(&Move::from_coords((3, 2), (2, 3))));
    }

    #[test]
    fn test_jump_requires_opposing_piece() {
        let f = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((4, 3), WHITE_MAN), ((4, 1), RED_MAN)]);

        assert!(f.is_jump_move(&Move::from_coords((5, 2), (3, 4))));
        assert!(!f.is_jump_move(&Move::from_coords((5, 2), (3, 0))));
        assert_eq!(f.classify(&Move::from_coords((5, 2), (3, 4))), Some(MoveKind::Jump));
    }

    #[test]
    fn test_jump_onto_occupied_square() {
        let f = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((4, 3), WHITE_MAN), ((3, 4), WHITE_MAN)]);
        assert!(!f.is_jump_move(&Move::from_coords((5, 2), (3, 4))));
    }

    #[test]
    fn test_man_cannot_jump_backwards() {
        let f = Fixture::new(Color::Red, &[((3, 2), RED_MAN), ((4, 3), WHITE_MAN)]);
        assert!(!f.is_jump_move(&Move::from_coords((3, 2), (5, 4))));
        assert!(!f.any_jump_available());
    }

    #[test]
    fn test_white_man_jumps_down_only() {
        let f = Fixture::new(
            Color::White,
            &[((3, 2), WHITE_MAN), ((4, 3), RED_MAN), ((4, 5), WHITE_MAN), ((3, 4), RED_MAN)],
        );

        assert!(f.is_jump_move(&Move::from_coords((3, 2), (5, 4))));
        assert!(!f.is_jump_move(&Move::from_coords((4, 5), (2, 3))));
        assert_eq!(f.legal_jump_moves(), vec![Move::from_coords((3, 2), (5, 4)).with_kind(MoveKind::Jump)]);
    }

    #[test]
    fn test_white_forced_capture() {
        let f = Fixture::new(Color::White, &[((3, 2), WHITE_MAN), ((4, 3), RED_MAN), ((1, 0), WHITE_MAN)]);

        assert!(f.any_jump_available());
        assert!(f.is_simple_move(&Move::from_coords((1, 0), (2, 1))));
        assert!(f.legal_simple_moves().is_empty());

        let cornered = Fixture::new(Color::White, &[((4, 5), WHITE_MAN), ((3, 4), RED_MAN)]);
        assert!(!cornered.any_jump_available());
    }

    #[test]
    fn test_out_of_range_geometry_is_invalid() {
        let f = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((4, 3), WHITE_MAN)]);
        assert_eq!(f.classify(&Move::from_coords((5, 2), (2, 5))), None);
        assert_eq!(f.classify(&Move::from_coords((5, 2), (5, 2))), None);
        assert_eq!(f.classify(&Move::from_coords((5, 2), (-1, 8))), None);
    }

    #[test]
    fn test_any_jump_available() {
        let f = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((4, 3), WHITE_MAN), ((6, 7), RED_MAN)]);
        assert!(f.any_jump_available());
        assert_eq!(f.legal_jump_moves(), vec![Move::from_coords((5, 2), (3, 4)).with_kind(MoveKind::Jump)]);
        assert!(f.legal_simple_moves().is_empty());

        let quiet = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((6, 7), RED_MAN)]);
        assert!(!quiet.any_jump_available());
        assert_eq!(quiet.legal_simple_moves().len(), 3);
    }

    #[test]
    fn test_chain_resolves_original_mover() {
        let mut f = Fixture::new(
            Color::Red,
            &[((5, 2), RED_MAN), ((4, 3), WHITE_MAN), ((2, 5), WHITE_MAN)],
        );
        let first = Move::from_coords((5, 2), (3, 4)).with_kind(MoveKind::Jump);
        f.pending.push(first);

        // (3, 4) is still empty on the board, yet the chain continues.
        assert_eq!(f.occupant(Position::new(3, 4)), None);
        assert_eq!(f.moving_piece(&Move::from_coords((3, 4), (1, 6))), Some(RED_MAN));
        assert!(f.is_jump_move(&Move::from_coords((3, 4), (1, 6))));
        assert!(f.continuation_jump_available(&first));
        assert_eq!(f.legal_jump_moves(), vec![Move::from_coords((3, 4), (1, 6)).with_kind(MoveKind::Jump)]);
    }

    #[test]
    fn test_chain_uses_original_rank() {
        let mut f = Fixture::new(
            Color::Red,
            &[((5, 2), RED_MAN), ((4, 3), WHITE_MAN), ((4, 5), WHITE_MAN)],
        );
        let first = Move::from_coords((5, 2), (3, 4)).with_kind(MoveKind::Jump);
        f.pending.push(first);

        // A man may not continue backwards over (4, 5).
        assert!(!f.is_jump_move(&Move::from_coords((3, 4), (5, 6))));
        assert!(!f.continuation_jump_available(&first));
    }

    #[test]
    fn test_chain_cannot_recapture() {
        let mut f = Fixture::new(Color::Red, &[((5, 2), RED_KING), ((4, 3), WHITE_MAN)]);
        let first = Move::from_coords((5, 2), (3, 4)).with_kind(MoveKind::Jump);
        f.pending.push(first);

        assert_eq!(f.occupant(Position::new(4, 3)), None);
        assert_eq!(f.occupant(Position::new(5, 2)), None);
        assert!(!f.is_jump_move(&Move::from_coords((3, 4), (5, 2))));
        assert!(!f.continuation_jump_available(&first));
    }

    #[test]
    fn test_simple_after_staged_move_not_suggested() {
        let mut f = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((6, 7), RED_MAN)]);
        f.pending.push(Move::from_coords((5, 2), (4, 1)).with_kind(MoveKind::Simple));

        assert!(f.legal_simple_moves().is_empty());
        assert!(f.legal_jump_moves().is_empty());
    }

    #[test]
    fn test_result() {
        let both = Fixture::new(Color::Red, &[((5, 2), RED_MAN), ((2, 1), WHITE_MAN)]);
        assert_eq!(both.result(), None);

        let red_only = Fixture::new(Color::White, &[((5, 2), RED_MAN)]);
        assert_eq!(red_only.result(), Some(GameResult { winner: Color::Red }));
    }
}
