//! Falling-block puzzle game on a fixed grid.
//!
//! The game core (`pieces`, `board`, `collision`, `game`) has no notion of
//! windows or keyboards. `session` drives it from frame time and player
//! actions; `input` and `render` connect it to a macroquad window.

pub mod board;
pub mod collision;
pub mod config;
pub mod game;
pub mod gravity;
pub mod input;
pub mod pieces;
pub mod render;
pub mod session;

pub use board::{Board, Cell};
pub use config::GameConfig;
pub use game::{ActivePiece, GameOver, GameState, MoveOutcome};
pub use input::Action;
pub use pieces::{PieceKind, Shape};
pub use session::{GameOverPolicy, Session, Tick};
