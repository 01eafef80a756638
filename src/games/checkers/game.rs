//! Checkers game implementation.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::board::{Board, BoardView};
use crate::core::{
    Color, ColorMap, GameConfig, GameId, GameRng, Move, MoveChain, MoveKind, Player, TurnRecord,
};
use crate::error::GameError;
use crate::rules::{GameResult, RulesEngine};

/// What a successful commit did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Moves applied, in chain order.
    pub moves_applied: usize,

    /// Opposing pieces removed.
    pub captured: u8,

    /// Whether the moving piece was crowned.
    pub promoted: bool,

    /// Set when this commit ended the game.
    pub game_over: Option<String>,
}

impl CommitOutcome {
    /// Whether at least one move reached the board.
    #[must_use]
    pub fn applied(&self) -> bool {
        self.moves_applied > 0
    }
}

/// One game between two seated players.
///
/// Moves are staged with [`Game::validate_move`] and only reach the board
/// on [`Game::commit_turn`]. Who moves next is left to the caller: after a
/// successful commit it calls [`Game::pass_turn`].
#[derive(Clone, Debug)]
pub struct Game {
    id: GameId,
    config: GameConfig,
    players: ColorMap<Player>,
    board: Board,
    turn: Color,
    pending: MoveChain,
    turn_number: u32,
    history: Vector<TurnRecord>,
    game_over: bool,
    game_over_message: Option<String>,
}

/// Builder for creating a Game.
pub struct GameBuilder {
    red: Player,
    white: Player,
    config: GameConfig,
    board: Option<Board>,
}

impl GameBuilder {
    pub fn new(red: Player, white: Player) -> Self {
        Self {
            red,
            white,
            config: GameConfig::default(),
            board: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a custom position instead of the standard setup.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game under the caller-supplied id.
    pub fn build(self, id: GameId) -> Result<Game, GameError> {
        if self.red == self.white {
            return Err(GameError::DuplicatePlayer);
        }
        if !(1..=3).contains(&self.config.starting_rows) {
            return Err(GameError::InvalidConfig);
        }

        let board = self
            .board
            .unwrap_or_else(|| Board::with_starting_rows(self.config.starting_rows));

        debug!(%id, red = %self.red, white = %self.white, "game created");

        Ok(Game {
            id,
            turn: self.config.first_turn,
            config: self.config,
            players: ColorMap::from_pair(self.red, self.white),
            board,
            pending: MoveChain::new(),
            turn_number: 1,
            history: Vector::new(),
            game_over: false,
            game_over_message: None,
        })
    }
}

impl Game {
    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    #[must_use]
    pub fn red_player(&self) -> &Player {
        self.player(Color::Red)
    }

    #[must_use]
    pub fn white_player(&self) -> &Player {
        self.player(Color::White)
    }

    /// The seat `player` occupies, if any.
    #[must_use]
    pub fn color_of(&self, player: &Player) -> Option<Color> {
        self.players.find(|p| p == player)
    }

    /// The player allowed to stage and commit moves.
    #[must_use]
    pub fn turn_owner(&self) -> &Player {
        self.player(self.turn)
    }

    #[must_use]
    pub fn is_turn_of(&self, player: &Player) -> bool {
        self.turn_owner() == player
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Committed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn game_over_message(&self) -> Option<&str> {
        self.game_over_message.as_deref()
    }

    /// The board oriented for `color`'s seat, ready to serialize.
    #[must_use]
    pub fn view_for(&self, color: Color) -> BoardView {
        self.board.project(color).view()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.game_over {
            debug!(game = %self.id, "game already over");
            return Err(GameError::GameAlreadyOver);
        }
        Ok(())
    }

    /// Whether `mv` may follow what is already staged.
    ///
    /// Nothing follows a simple move; a jump chain continues from its
    /// last landing square.
    fn continues_chain(&self, mv: &Move) -> bool {
        match self.pending.last() {
            None => true,
            Some(last) => last.is_jump() && mv.start == last.end,
        }
    }

    // === Turn building ===

    /// Classify `mv` and stage it on the pending chain.
    ///
    /// The board is not touched. On success the staged move, with its kind
    /// set, is returned.
    #[instrument(level = "debug", skip(self), fields(game = %self.id, turn = %self.turn))]
    pub fn validate_move(&mut self, mv: Move) -> Result<Move, GameError> {
        self.ensure_in_progress()?;

        let mv = Move::new(mv.start, mv.end);
        if !self.continues_chain(&mv) {
            debug!(%mv, "move does not continue the staged chain");
            return Err(GameError::InvalidMove);
        }

        let kind = if self.is_simple_move(&mv) {
            if self.any_jump_available() {
                debug!(%mv, "simple move refused, capture available");
                return Err(GameError::ForcedJumpViolation);
            }
            MoveKind::Simple
        } else if self.is_jump_move(&mv) {
            MoveKind::Jump
        } else {
            debug!(%mv, "invalid move");
            return Err(GameError::InvalidMove);
        };

        let staged = mv.with_kind(kind);
        self.pending.push(staged);
        debug!(%staged, ?kind, pending = self.pending.len(), "move staged");
        Ok(staged)
    }

    /// Apply every staged move to the board.
    ///
    /// Refused, with the chain left as it is, while the last staged jump
    /// can keep capturing. Captures and promotions happen move by move;
    /// the win condition is checked once the whole chain is applied.
    #[instrument(level = "debug", skip(self), fields(game = %self.id, turn = %self.turn))]
    pub fn commit_turn(&mut self) -> Result<CommitOutcome, GameError> {
        self.ensure_in_progress()?;

        if let Some(last) = self.pending.last() {
            if last.is_jump() && self.continuation_jump_available(last) {
                debug!(%last, "commit refused, chain must continue");
                return Err(GameError::ForcedContinuationViolation);
            }
        }

        let moves = std::mem::take(&mut self.pending);
        let mut outcome = CommitOutcome::default();

        for mv in &moves {
            let piece = self.board.relocate(mv.start, mv.end);
            if mv.is_jump() {
                let at = mv.captured();
                let captured = self.board.capture(at);
                debug!(%at, color = %captured.color, "piece captured");
                outcome.captured += 1;
            }
            if mv.end.row == piece.color.far_row() && self.board.promote(mv.end) {
                info!(at = %mv.end, color = %piece.color, "piece crowned");
                outcome.promoted = true;
            }
            outcome.moves_applied += 1;
        }

        if outcome.applied() {
            self.history.push_back(TurnRecord {
                turn: self.turn_number,
                color: self.turn,
                moves,
                captured: outcome.captured,
                promoted: outcome.promoted,
            });
        }

        if let Some(result) = self.result() {
            outcome.game_over = Some(self.finish(result));
        }

        Ok(outcome)
    }

    fn finish(&mut self, result: GameResult) -> String {
        let message = format!(
            "{} won! {} ran out of pieces.",
            self.player(result.winner),
            self.player(result.loser())
        );
        info!(game = %self.id, winner = %result.winner, "game over");
        self.game_over = true;
        self.game_over_message = Some(message.clone());
        message
    }

    /// Drop the most recently staged move.
    #[instrument(level = "debug", skip(self), fields(game = %self.id))]
    pub fn backup_move(&mut self) -> Result<Move, GameError> {
        self.ensure_in_progress()?;
        let mv = self.pending.pop().ok_or(GameError::NothingToUndo)?;
        debug!(%mv, pending = self.pending.len(), "move backed up");
        Ok(mv)
    }

    /// Hand the turn to the other side.
    ///
    /// Staged moves that were never committed are dropped.
    pub fn pass_turn(&mut self) -> Result<Color, GameError> {
        self.ensure_in_progress()?;
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "uncommitted moves dropped");
            self.pending.clear();
        }
        self.turn = self.turn.opponent();
        self.turn_number += 1;
        info!(game = %self.id, turn = %self.turn, number = self.turn_number, "turn passed");
        Ok(self.turn)
    }

    // === Suggestions ===

    /// A uniformly chosen legal jump, if any.
    pub fn find_random_jump_move(&self, rng: &mut GameRng) -> Option<Move> {
        if self.game_over {
            return None;
        }
        rng.choose(&self.legal_jump_moves()).copied()
    }

    /// A uniformly chosen legal simple move, if any.
    pub fn find_random_simple_move(&self, rng: &mut GameRng) -> Option<Move> {
        if self.game_over {
            return None;
        }
        rng.choose(&self.legal_simple_moves()).copied()
    }

    /// A legal move to play next: a jump when one exists, since captures
    /// are forced, otherwise a simple move.
    pub fn suggest_move(&self, rng: &mut GameRng) -> Option<Move> {
        self.find_random_jump_move(rng)
            .or_else(|| self.find_random_simple_move(rng))
    }
}

impl RulesEngine for Game {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, Position};

    fn players() -> (Player, Player) {
        (Player::new("alice"), Player::new("bob"))
    }

    fn standard() -> Game {
        let (red, white) = players();
        GameBuilder::new(red, white).build(GameId::new(1)).unwrap()
    }

    fn custom(pieces: &[((i8, i8), Piece)]) -> Game {
        let mut board = Board::empty();
        for &((row, cell), piece) in pieces {
            board.place(Position::new(row, cell), piece);
        }
        let (red, white) = players();
        GameBuilder::new(red, white).board(board).build(GameId::new(2)).unwrap()
    }

    fn mv(start: (i8, i8), end: (i8, i8)) -> Move {
        Move::from_coords(start, end)
    }

    #[test]
    fn test_game_creation() {
        let game = standard();

        assert_eq!(game.id(), GameId::new(1));
        assert_eq!(game.turn_color(), Color::Red);
        assert_eq!(game.turn_owner(), &Player::new("alice"));
        assert_eq!(game.color_of(&Player::new("bob")), Some(Color::White));
        assert_eq!(game.color_of(&Player::new("carol")), None);
        assert!(game.pending_moves().is_empty());
        assert!(!game.is_game_over());
        assert_eq!(game.board().count(Color::Red), 12);
    }

    #[test]
    fn test_duplicate_players_rejected() {
        let result = GameBuilder::new(Player::new("same"), Player::new("same")).build(GameId::new(3));
        assert_eq!(result.err(), Some(GameError::DuplicatePlayer));
    }

    #[test]
    fn test_out_of_range_config_rejected() {
        let config: GameConfig =
            serde_json::from_str(r#"{"first_turn":"RED","starting_rows":0,"seed":1}"#).unwrap();
        let (red, white) = players();
        let result = GameBuilder::new(red, white).config(config).build(GameId::new(5));
        assert_eq!(result.err(), Some(GameError::InvalidConfig));
    }

    #[test]
    fn test_deserialized_board_plays_to_the_end() {
        let mut board = Board::empty();
        board
            .place(Position::new(5, 2), Piece::man(Color::Red))
            .place(Position::new(4, 3), Piece::man(Color::White));
        let mut json = serde_json::to_value(&board).unwrap();
        json["counts"] = serde_json::json!({ "data": [1, 0] });
        let board: Board = serde_json::from_value(json).unwrap();

        let (red, white) = players();
        let mut game = GameBuilder::new(red, white).board(board).build(GameId::new(6)).unwrap();
        assert_eq!(game.result(), None);

        game.validate_move(mv((5, 2), (3, 4))).unwrap();
        let outcome = game.commit_turn().unwrap();
        assert_eq!(outcome.captured, 1);
        assert_eq!(outcome.game_over.as_deref(), Some("alice won! bob ran out of pieces."));
    }

    #[test]
    fn test_config_controls_setup() {
        let (red, white) = players();
        let game = GameBuilder::new(red, white)
            .config(GameConfig::default().with_first_turn(Color::White).with_starting_rows(2))
            .build(GameId::new(4))
            .unwrap();

        assert_eq!(game.turn_color(), Color::White);
        assert_eq!(game.board().count(Color::White), 8);
    }

    #[test]
    fn test_simple_move_staged_not_applied() {
        let mut game = standard();
        let staged = game.validate_move(mv((5, 2), (4, 1))).unwrap();

        assert_eq!(staged.kind, Some(MoveKind::Simple));
        assert_eq!(game.pending_moves(), &[staged]);
        assert!(game.board().piece_at(Position::new(5, 2)).is_some());
        assert!(game.board().piece_at(Position::new(4, 1)).is_none());
    }

    #[test]
    fn test_caller_supplied_kind_is_ignored() {
        let mut game = standard();
        let forged = mv((5, 2), (4, 1)).with_kind(MoveKind::Jump);
        assert_eq!(game.validate_move(forged).unwrap().kind, Some(MoveKind::Simple));
    }

    #[test]
    fn test_nothing_follows_simple_move() {
        let mut game = standard();
        game.validate_move(mv((5, 2), (4, 1))).unwrap();
        assert_eq!(game.validate_move(mv((5, 4), (4, 5))), Err(GameError::InvalidMove));
        assert_eq!(game.pending_moves().len(), 1);
    }

    #[test]
    fn test_forced_jump() {
        let mut game = custom(&[
            ((5, 2), Piece::man(Color::Red)),
            ((4, 3), Piece::man(Color::White)),
            ((6, 7), Piece::man(Color::Red)),
        ]);

        assert_eq!(game.validate_move(mv((6, 7), (5, 6))), Err(GameError::ForcedJumpViolation));
        assert!(game.pending_moves().is_empty());

        let staged = game.validate_move(mv((5, 2), (3, 4))).unwrap();
        assert!(staged.is_jump());
    }

    #[test]
    fn test_jump_commit_captures() {
        let mut game = custom(&[
            ((5, 2), Piece::man(Color::Red)),
            ((4, 3), Piece::man(Color::White)),
            ((0, 1), Piece::man(Color::White)),
        ]);

        game.validate_move(mv((5, 2), (3, 4))).unwrap();
        assert_eq!(game.board().count(Color::White), 2);

        let outcome = game.commit_turn().unwrap();
        assert!(outcome.applied());
        assert_eq!(outcome.captured, 1);
        assert_eq!(outcome.game_over, None);
        assert_eq!(game.board().count(Color::White), 1);
        assert_eq!(game.board().piece_at(Position::new(4, 3)), None);
        assert_eq!(game.board().piece_at(Position::new(3, 4)), Some(Piece::man(Color::Red)));
        assert!(game.pending_moves().is_empty());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_commit_refused_mid_chain() {
        let mut game = custom(&[
            ((5, 2), Piece::man(Color::Red)),
            ((4, 3), Piece::man(Color::White)),
            ((2, 5), Piece::man(Color::White)),
        ]);

        game.validate_move(mv((5, 2), (3, 4))).unwrap();
        let before = game.pending_moves().to_vec();

        assert_eq!(game.commit_turn(), Err(GameError::ForcedContinuationViolation));
        assert_eq!(game.commit_turn(), Err(GameError::ForcedContinuationViolation));
        assert_eq!(game.pending_moves(), before.as_slice());
        assert_eq!(game.board().count(Color::White), 2);

        game.validate_move(mv((3, 4), (1, 6))).unwrap();
        let outcome = game.commit_turn().unwrap();
        assert_eq!(outcome.captured, 2);
        assert_eq!(outcome.game_over.as_deref(), Some("alice won! bob ran out of pieces."));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_chain_must_start_on_landing_square() {
        let mut game = custom(&[
            ((5, 2), Piece::man(Color::Red)),
            ((4, 3), Piece::man(Color::White)),
            ((5, 6), Piece::man(Color::Red)),
            ((4, 5), Piece::man(Color::White)),
        ]);

        game.validate_move(mv((5, 2), (3, 4))).unwrap();
        assert_eq!(game.validate_move(mv((5, 6), (3, 4))), Err(GameError::InvalidMove));
    }

    #[test]
    fn test_promotion_on_far_row() {
        let mut game = custom(&[
            ((1, 2), Piece::man(Color::Red)),
            ((5, 4), Piece::man(Color::White)),
        ]);

        game.validate_move(mv((1, 2), (0, 1))).unwrap();
        let outcome = game.commit_turn().unwrap();

        assert!(outcome.promoted);
        assert_eq!(game.board().piece_at(Position::new(0, 1)), Some(Piece::king(Color::Red)));
    }

    #[test]
    fn test_backup_move() {
        let mut game = standard();
        assert_eq!(game.backup_move(), Err(GameError::NothingToUndo));

        let staged = game.validate_move(mv((5, 2), (4, 3))).unwrap();
        assert_eq!(game.backup_move(), Ok(staged));
        assert!(game.pending_moves().is_empty());
        assert_eq!(game.board(), &Board::new());

        // A different move may now be staged.
        game.validate_move(mv((5, 2), (4, 1))).unwrap();
    }

    #[test]
    fn test_empty_commit_applies_nothing() {
        let mut game = standard();
        let outcome = game.commit_turn().unwrap();
        assert!(!outcome.applied());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_pass_turn() {
        let mut game = standard();
        game.validate_move(mv((5, 2), (4, 3))).unwrap();
        game.commit_turn().unwrap();

        assert_eq!(game.pass_turn(), Ok(Color::White));
        assert_eq!(game.turn_owner(), &Player::new("bob"));
        assert_eq!(game.turn_number(), 2);

        // White man steps down the board.
        let staged = game.validate_move(mv((2, 1), (3, 2))).unwrap();
        assert!(staged.is_simple());
    }

    #[test]
    fn test_mutations_rejected_after_game_over() {
        let mut game = custom(&[
            ((5, 2), Piece::man(Color::Red)),
            ((4, 3), Piece::man(Color::White)),
        ]);
        game.validate_move(mv((5, 2), (3, 4))).unwrap();
        game.commit_turn().unwrap();
        assert!(game.is_game_over());

        assert_eq!(game.validate_move(mv((3, 4), (2, 5))), Err(GameError::GameAlreadyOver));
        assert_eq!(game.commit_turn(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.backup_move(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.pass_turn(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.suggest_move(&mut GameRng::new(1)), None);
    }

    #[test]
    fn test_suggestions() {
        let game = standard();
        let mut rng = GameRng::new(7);

        assert_eq!(game.find_random_jump_move(&mut rng), None);
        let suggestion = game.find_random_simple_move(&mut rng).unwrap();
        assert!(suggestion.is_simple());
        assert!(game.legal_simple_moves().contains(&suggestion));
        assert!(game.pending_moves().is_empty());
    }

    #[test]
    fn test_suggestion_prefers_jump() {
        let game = custom(&[
            ((5, 2), Piece::man(Color::Red)),
            ((4, 3), Piece::man(Color::White)),
            ((6, 7), Piece::man(Color::Red)),
        ]);

        let suggestion = game.suggest_move(&mut GameRng::new(1)).unwrap();
        assert_eq!(suggestion, mv((5, 2), (3, 4)).with_kind(MoveKind::Jump));
    }

    #[test]
    fn test_white_view_is_reversed() {
        let game = standard();
        let view = game.view_for(Color::White);
        assert_eq!(view.rows[0].index(), 7);
        assert_eq!(game.view_for(Color::Red), game.board().view());
    }
}
