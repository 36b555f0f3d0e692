//! Piece controller: the falling piece, the one queued behind it, and the board
//! they land on.
//!
//! Every move goes through [`collides`] before it is committed. A blocked
//! downward move locks the piece, clears full rows and spawns the next piece,
//! all inside the same call.

use std::error::Error;
use std::fmt;

use macroquad::color::Color;
use macroquad::logging::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::collision::collides;
use crate::config::GameConfig;
use crate::pieces::{PieceKind, Shape};

/// Rotation placements, tried in order: in place, left, right, up.
const ROTATION_KICKS: [(i32, i32); 4] = [(0, 0), (-1, 0), (1, 0), (0, -1)];

/// The piece under player and gravity control. Owns its rotated matrix, so
/// turning it never touches the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl ActivePiece {
    /// Base orientation, horizontally centered, top row at row 0.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = kind.base_shape();
        let x = (board_width as i32 - shape.size() as i32).div_euclid(2);
        Self { kind, shape, x, y: 0 }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Board coordinates of the matrix's top-left cell.
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Occupied cells in board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(sx, sy)| (self.x + sx, self.y + sy))
    }
}

/// A freshly spawned piece overlapped the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver;

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game over: no room to spawn a piece")
    }
}

impl Error for GameOver {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Rejected; nothing changed.
    Blocked,
    /// The piece landed and the next one spawned.
    Locked { lines_cleared: usize },
    /// The piece landed but the next one had no room.
    GameOver { lines_cleared: usize },
}

pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    over: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Same seed, same piece sequence.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let board = Board::new(config.width, config.height);
        let active = ActivePiece::spawn(PieceKind::random(&mut rng), config.width);
        let next = PieceKind::random(&mut rng);
        let over = collides(&active.shape, active.x, active.y, &board);
        Self { board, active, next, over, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Set once a spawn fails; cleared by [`GameState::reset`].
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Promotes the queued kind to the active piece and queues a new one.
    /// Once the game is over only [`GameState::reset`] brings it back.
    pub fn spawn(&mut self) -> Result<(), GameOver> {
        if self.over {
            return Err(GameOver);
        }
        let kind = self.next;
        self.next = PieceKind::random(&mut self.rng);

        let piece = ActivePiece::spawn(kind, self.board.width());
        if collides(&piece.shape, piece.x, piece.y, &self.board) {
            warn!("{:?} cannot spawn at column {}", kind, piece.x);
            self.over = true;
            return Err(GameOver);
        }
        debug!("spawned {:?}, next {:?}", kind, self.next);
        self.active = piece;
        Ok(())
    }

    /// Shifts the active piece by (`dx`, `dy`). A blocked downward move
    /// locks the piece where it stands.
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if self.over {
            return MoveOutcome::Blocked;
        }
        let (x, y) = (self.active.x + dx, self.active.y + dy);
        if !collides(&self.active.shape, x, y, &self.board) {
            self.active.x = x;
            self.active.y = y;
            return MoveOutcome::Moved;
        }
        if dy > 0 {
            return self.lock_active();
        }
        MoveOutcome::Blocked
    }

    /// Turns the active piece clockwise, trying the kicks in order. Returns
    /// false when every placement collides; the piece is then left as it was.
    pub fn rotate(&mut self) -> bool {
        if self.over {
            return false;
        }
        let rotated = self.active.shape.rotated_clockwise();
        for (kx, ky) in ROTATION_KICKS {
            let (x, y) = (self.active.x + kx, self.active.y + ky);
            if !collides(&rotated, x, y, &self.board) {
                self.active.shape = rotated;
                self.active.x = x;
                self.active.y = y;
                return true;
            }
        }
        false
    }

    /// Empty board and fresh pieces. The random stream carries on.
    pub fn reset(&mut self) -> Result<(), GameOver> {
        self.board.clear();
        self.over = false;
        self.next = PieceKind::random(&mut self.rng);
        self.spawn()
    }

    fn lock_active(&mut self) -> MoveOutcome {
        let piece = self.active;
        debug!("locking {:?} at {:?}", piece.kind, piece.origin());
        self.board.lock_cells(piece.cells(), piece.color());

        let lines_cleared = self.board.clear_full_rows();
        if lines_cleared > 0 {
            info!("cleared {} row(s)", lines_cleared);
        }

        match self.spawn() {
            Ok(()) => MoveOutcome::Locked { lines_cleared },
            Err(GameOver) => MoveOutcome::GameOver { lines_cleared },
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn place_active(&mut self, kind: PieceKind, shape: Shape, x: i32, y: i32) {
        self.active = ActivePiece { kind, shape, x, y };
    }
}
