//! Game session - board, player and timing bundled into one owned value
//!
//! The host owns a single [`GameSession`] and drives it with two kinds of
//! calls: [`GameSession::apply_action`] for input events and
//! [`GameSession::update`] once per frame with a monotonic timestamp. Both
//! run to completion before the next call, so no locking is involved.

use crate::board::Board;
use crate::player::{DropOutcome, Player};
use crate::render::{draw_frame, RenderSink};
use crate::rng::{PieceSource, RandomPieces};
use crate::score::{
    format_best, format_score, record_best, KeyValueStore, ScoreDisplay, HIGHSCORE_KEY,
};
use crate::types::{GameAction, Position, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS};

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    /// Automatic drop fires once the drop counter exceeds this.
    pub drop_interval_ms: u64,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: 1,
        }
    }
}

/// One running game
#[derive(Debug)]
pub struct GameSession<K, D, P = RandomPieces> {
    board: Board,
    player: Player,
    pieces: P,
    store: K,
    display: D,
    drop_interval_ms: u64,
    drop_counter_ms: u64,
    last_time_ms: u64,
}

impl<K: KeyValueStore, D: ScoreDisplay> GameSession<K, D, RandomPieces> {
    /// Start a session drawing uniformly random pieces seeded from `config`.
    pub fn new(config: SessionConfig, store: K, display: D) -> Self {
        Self::with_pieces(config, store, display, RandomPieces::new(config.seed))
    }
}

impl<K: KeyValueStore, D: ScoreDisplay, P: PieceSource> GameSession<K, D, P> {
    /// Start a session with an explicit piece source.
    ///
    /// The board starts empty, the first piece is spawned and the score
    /// lines are published once.
    pub fn with_pieces(config: SessionConfig, store: K, display: D, mut pieces: P) -> Self {
        let mut board = Board::new(config.width, config.height);
        let mut player = Player::new(pieces.next_piece(), Position::default());
        player.spawn(&mut board, &mut pieces);

        let mut session = Self {
            board,
            player,
            pieces,
            store,
            display,
            drop_interval_ms: config.drop_interval_ms,
            drop_counter_ms: 0,
            last_time_ms: 0,
        };
        session.publish_score();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Stored best score; 0 if nothing was ever stored.
    pub fn best_score(&self) -> u32 {
        self.store.get(HIGHSCORE_KEY).unwrap_or(0)
    }

    pub fn drop_counter_ms(&self) -> u64 {
        self.drop_counter_ms
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Apply one input action. Returns whether the piece state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.player.move_horizontal(&self.board, -1),
            GameAction::MoveRight => self.player.move_horizontal(&self.board, 1),
            GameAction::Rotate => self.player.rotate(&self.board),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
        }
    }

    /// Drop one row (locking if blocked) and restart the drop counter.
    ///
    /// On a lock that clears rows the stored best is raised before the next
    /// spawn, so a spawn that resets the game cannot lose the new score.
    pub fn soft_drop(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0;
        if self.player.fall(&self.board) {
            return DropOutcome::Moved;
        }

        let lines_cleared = self.player.lock(&mut self.board);
        if lines_cleared > 0 {
            record_best(&mut self.store, self.player.score);
        }
        let game_over = self.player.spawn(&mut self.board, &mut self.pieces);
        self.publish_score();
        DropOutcome::Locked {
            lines_cleared,
            game_over,
        }
    }

    /// Advance the clock to `now_ms` and render.
    ///
    /// Elapsed time accumulates in the drop counter; once it exceeds the
    /// interval one soft drop happens and the counter restarts from 0, any
    /// excess is discarded. Returns the drop outcome if a drop happened.
    pub fn update(&mut self, now_ms: u64, sink: &mut impl RenderSink) -> Option<DropOutcome> {
        let delta = now_ms.saturating_sub(self.last_time_ms);
        self.last_time_ms = now_ms;
        self.drop_counter_ms += delta;

        let outcome = if self.drop_counter_ms > self.drop_interval_ms {
            Some(self.soft_drop())
        } else {
            None
        };

        self.draw(sink);
        outcome
    }

    /// Render locked cells and the active piece.
    pub fn draw(&self, sink: &mut impl RenderSink) {
        draw_frame(&self.board, &self.player, sink);
    }

    /// Push the current score and best to the display, raising the stored
    /// best first if the score beats it.
    fn publish_score(&mut self) {
        let best = record_best(&mut self.store, self.player.score);
        self.display
            .show_score(&format_score(self.player.score), &format_best(best));
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, matrix: crate::piece::Shape, pos: Position) {
        self.player.matrix = matrix;
        self.player.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{get_shape, Shape};
    use crate::score::MemoryStore;
    use crate::types::PieceKind;

    #[derive(Debug, Default)]
    struct Lines(Vec<(String, String)>);

    impl ScoreDisplay for Lines {
        fn show_score(&mut self, score: &str, best: &str) {
            self.0.push((score.to_string(), best.to_string()));
        }
    }

    fn o_session() -> GameSession<MemoryStore, Lines, impl FnMut() -> Shape> {
        GameSession::with_pieces(
            SessionConfig::default(),
            MemoryStore::new(),
            Lines::default(),
            || get_shape(PieceKind::O),
        )
    }

    #[test]
    fn test_new_session_publishes_once() {
        let session = o_session();
        assert_eq!(
            session.display().0,
            vec![("Score: 0".to_string(), "Best: 0".to_string())]
        );
        assert_eq!(session.player().pos, Position::new(4, 0));
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_lock_with_line_clear_scores_one() {
        let mut session = o_session();
        // Row 19 full except the two columns the O piece will fill.
        for x in 0..10 {
            if x != 4 && x != 5 {
                session.board_mut().set(x, 19, 7);
            }
        }
        session.set_active(get_shape(PieceKind::O), Position::new(4, 18));

        let outcome = session.soft_drop();
        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 1,
                game_over: false
            }
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.best_score(), 1);
        // The upper half of the O survives, shifted into row 19.
        assert_eq!(session.board().get(4, 19), Some(3));
        assert_eq!(session.board().get(0, 19), Some(0));
        assert_eq!(
            session.display().0.last(),
            Some(&("Score: 1".to_string(), "Best: 1".to_string()))
        );
    }

    #[test]
    fn test_game_over_resets_board_and_score() {
        let mut session = o_session();
        session.player.score = 9;
        // Leave one gap so the row is blocked but not full.
        for x in 0..9 {
            session.board_mut().set(x, 0, 1);
        }
        // Lock on the floor: the next spawn lands on the blocked row.
        session.set_active(get_shape(PieceKind::O), Position::new(0, 18));
        let outcome = session.soft_drop();

        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 0,
                game_over: true
            }
        );
        assert!(session.board().is_empty());
        assert_eq!(session.score(), 0);
        // No rows cleared on this lock, so the pre-reset score is not a
        // new score and the store is untouched.
        assert_eq!(session.best_score(), 0);
    }

    #[test]
    fn test_clearing_lock_records_best_before_blocked_spawn() {
        let mut session = o_session();
        for x in 0..10 {
            if x != 4 && x != 5 {
                session.board_mut().set(x, 19, 2);
            }
        }
        // Survives the clear and blocks the next spawn.
        session.board_mut().set(4, 0, 1);
        session.board_mut().set(4, 1, 1);
        session.set_active(get_shape(PieceKind::O), Position::new(4, 18));

        let outcome = session.soft_drop();
        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 1,
                game_over: true
            }
        );
        assert_eq!(session.score(), 0);
        assert!(session.board().is_empty());
        assert_eq!(session.best_score(), 1);
        assert_eq!(
            session.display().0.last(),
            Some(&("Score: 0".to_string(), "Best: 1".to_string()))
        );
    }

    #[test]
    fn test_soft_drop_resets_counter_even_when_moving() {
        let mut session = o_session();
        let mut sink: Vec<(i32, i32, u8)> = Vec::new();
        session.update(500, &mut sink);
        assert_eq!(session.drop_counter_ms(), 500);
        assert_eq!(session.soft_drop(), DropOutcome::Moved);
        assert_eq!(session.drop_counter_ms(), 0);
    }
}
