//! Player module - the falling piece and its controller
//!
//! The player owns the active piece (shape + position) and the score. Every
//! move is tentative: apply, test [`Board::collide`], revert on conflict. A
//! soft drop that cannot move locks the piece into the board and spawns the
//! next one; a spawn that collides immediately resets the game.

use crate::board::Board;
use crate::piece::Shape;
use crate::rng::PieceSource;
use crate::types::Position;

/// Result of a soft drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row and keeps falling.
    Moved,
    /// The piece could not move; it was merged into the board and a new
    /// piece was spawned.
    Locked {
        lines_cleared: usize,
        /// The new piece collided on spawn and the game was reset.
        game_over: bool,
    },
}

impl DropOutcome {
    pub fn locked(&self) -> bool {
        matches!(self, DropOutcome::Locked { .. })
    }
}

/// Active piece state plus score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    pub matrix: Shape,
    pub score: u32,
}

impl Player {
    pub fn new(matrix: Shape, pos: Position) -> Self {
        Self {
            pos,
            matrix,
            score: 0,
        }
    }

    /// Column at which a piece of `piece_width` spawns, centered with floor
    /// division on both widths.
    pub fn spawn_x(board_width: usize, piece_width: usize) -> i32 {
        (board_width / 2) as i32 - (piece_width / 2) as i32
    }

    /// Shift one column left (`dir < 0`) or right (`dir > 0`).
    ///
    /// Returns false, leaving the position unchanged, if the target collides.
    pub fn move_horizontal(&mut self, board: &Board, dir: i32) -> bool {
        self.pos.x += dir;
        if board.collide(&self.matrix, self.pos) {
            self.pos.x -= dir;
            return false;
        }
        true
    }

    /// Rotate in place. No wall kicks: a rotation that collides is dropped.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.matrix.rotate();
        if board.collide(&rotated, self.pos) {
            return false;
        }
        self.matrix = rotated;
        true
    }

    /// Move one row down, or lock and spawn if that is blocked.
    ///
    /// Locking merges the piece, clears full rows and adds one point per
    /// cleared row before the next piece spawns.
    pub fn soft_drop(&mut self, board: &mut Board, pieces: &mut impl PieceSource) -> DropOutcome {
        if self.fall(board) {
            return DropOutcome::Moved;
        }
        let lines_cleared = self.lock(board);
        let game_over = self.spawn(board, pieces);
        DropOutcome::Locked {
            lines_cleared,
            game_over,
        }
    }

    /// Move one row down. Returns false, leaving the position unchanged, if
    /// the piece is resting on something.
    pub fn fall(&mut self, board: &Board) -> bool {
        self.pos.y += 1;
        if board.collide(&self.matrix, self.pos) {
            self.pos.y -= 1;
            return false;
        }
        true
    }

    /// Merge the piece into the board, clear full rows and score them.
    ///
    /// The piece stays in place until [`Player::spawn`] replaces it.
    /// Returns the number of rows cleared.
    pub fn lock(&mut self, board: &mut Board) -> usize {
        let lines_cleared = board.merge(&self.matrix, self.pos);
        self.score += lines_cleared as u32;
        log::debug!(
            "piece locked at ({}, {}), {} line(s) cleared, score {}",
            self.pos.x,
            self.pos.y,
            lines_cleared,
            self.score
        );
        lines_cleared
    }

    /// Take the next piece and place it centered on the top row.
    ///
    /// If it collides straight away the board is wiped and the score reset;
    /// returns true in that case. Play continues with the new piece either
    /// way.
    pub fn spawn(&mut self, board: &mut Board, pieces: &mut impl PieceSource) -> bool {
        self.matrix = pieces.next_piece();
        self.pos = Position::new(Self::spawn_x(board.width(), self.matrix.width()), 0);

        if board.collide(&self.matrix, self.pos) {
            log::info!("spawn blocked, resetting board (final score {})", self.score);
            board.clear();
            self.score = 0;
            return true;
        }
        false
    }

    /// Absolute board coordinates and values of the piece cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(c, r, v)| (self.pos.x + c as i32, self.pos.y + r as i32, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::get_shape;
    use crate::types::PieceKind;

    fn o_source() -> impl FnMut() -> Shape {
        || get_shape(PieceKind::O)
    }

    #[test]
    fn test_spawn_x_floors_both_widths() {
        assert_eq!(Player::spawn_x(10, 4), 3);
        assert_eq!(Player::spawn_x(10, 3), 4);
        assert_eq!(Player::spawn_x(10, 2), 4);
        assert_eq!(Player::spawn_x(9, 3), 3);
    }

    #[test]
    fn test_move_blocked_by_wall() {
        let board = Board::default();
        let mut player = Player::new(get_shape(PieceKind::O), Position::new(0, 5));
        assert!(!player.move_horizontal(&board, -1));
        assert_eq!(player.pos, Position::new(0, 5));
        assert!(player.move_horizontal(&board, 1));
        assert_eq!(player.pos, Position::new(1, 5));
    }

    #[test]
    fn test_rotate_blocked_leaves_matrix() {
        let board = Board::default();
        // Horizontal I on the floor cannot stand up.
        let mut player = Player::new(get_shape(PieceKind::I), Position::new(3, 19));
        assert!(!player.rotate(&board));
        assert_eq!(player.matrix, get_shape(PieceKind::I));
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let mut board = Board::default();
        let mut pieces = o_source();
        let mut player = Player::new(get_shape(PieceKind::O), Position::new(4, 17));

        assert_eq!(player.soft_drop(&mut board, &mut pieces), DropOutcome::Moved);
        assert_eq!(player.pos.y, 18);

        let outcome = player.soft_drop(&mut board, &mut pieces);
        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 0,
                game_over: false
            }
        );
        assert_eq!(board.get(4, 18), Some(3));
        assert_eq!(board.get(5, 19), Some(3));
        assert_eq!(player.pos, Position::new(4, 0));
    }

    #[test]
    fn test_cells_are_absolute() {
        let player = Player::new(get_shape(PieceKind::O), Position::new(2, -1));
        let cells: Vec<_> = player.cells().collect();
        assert_eq!(cells, vec![(2, -1, 3), (3, -1, 3), (2, 0, 3), (3, 0, 3)]);
    }
}
