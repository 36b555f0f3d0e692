//! Frame driver: feeds elapsed time and player actions into a [`GameState`]
//! and decides what happens once a game is lost.

use macroquad::logging::{error, info, warn};

use crate::config::GameConfig;
use crate::game::{GameOver, GameState, MoveOutcome};
use crate::gravity::GravityTimer;
use crate::input::Action;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameOverPolicy {
    /// Start a fresh game straight away.
    #[default]
    Restart,
    /// Freeze until [`Session::restart`] is called.
    Halt,
}

/// What a frame or an action did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running,
    Locked { lines_cleared: usize },
    Restarted,
    Halted,
}

pub struct Session {
    config: GameConfig,
    state: GameState,
    gravity: GravityTimer,
    policy: GameOverPolicy,
}

impl Session {
    pub fn new(config: GameConfig, policy: GameOverPolicy) -> Self {
        Self::with_state(config, GameState::new(&config), policy)
    }

    pub fn with_seed(config: GameConfig, policy: GameOverPolicy, seed: u64) -> Self {
        Self::with_state(config, GameState::with_seed(&config, seed), policy)
    }

    fn with_state(config: GameConfig, state: GameState, policy: GameOverPolicy) -> Self {
        Self {
            config,
            state,
            gravity: GravityTimer::new(config.drop_interval),
            policy,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn is_halted(&self) -> bool {
        self.state.is_over()
    }

    /// Advances the clock by `dt` seconds, dropping the piece a row when the
    /// interval elapses.
    pub fn update(&mut self, dt: f32) -> Tick {
        if self.is_halted() {
            return Tick::Halted;
        }
        if !self.gravity.advance(dt) {
            return Tick::Running;
        }
        let outcome = self.state.move_piece(0, 1);
        self.settle(outcome)
    }

    pub fn apply(&mut self, action: Action) -> Tick {
        if self.is_halted() {
            return Tick::Halted;
        }
        let outcome = match action {
            Action::MoveLeft => self.state.move_piece(-1, 0),
            Action::MoveRight => self.state.move_piece(1, 0),
            Action::SoftDrop => {
                let outcome = self.state.move_piece(0, 1);
                self.gravity.reset();
                outcome
            }
            Action::Rotate if self.state.rotate() => MoveOutcome::Moved,
            Action::Rotate => MoveOutcome::Blocked,
        };
        self.settle(outcome)
    }

    /// Spawns the queued piece out of turn.
    pub fn spawn(&mut self) -> Tick {
        match self.state.spawn() {
            Ok(()) => Tick::Running,
            Err(GameOver) => self.game_over(),
        }
    }

    /// Leaves a halted game by starting a new one. Does nothing while playing.
    pub fn resume(&mut self) -> Tick {
        if !self.is_halted() {
            return Tick::Running;
        }
        match self.restart() {
            Ok(()) => Tick::Restarted,
            Err(err) => {
                error!("{}", err);
                Tick::Halted
            }
        }
    }

    /// Empty board, fresh pieces, gravity from zero.
    pub fn restart(&mut self) -> Result<(), GameOver> {
        self.gravity.reset();
        self.state.reset()?;
        info!("new game");
        Ok(())
    }

    fn settle(&mut self, outcome: MoveOutcome) -> Tick {
        match outcome {
            MoveOutcome::Moved | MoveOutcome::Blocked => Tick::Running,
            MoveOutcome::Locked { lines_cleared } => Tick::Locked { lines_cleared },
            MoveOutcome::GameOver { .. } => self.game_over(),
        }
    }

    fn game_over(&mut self) -> Tick {
        warn!("Game Over!");
        match self.policy {
            GameOverPolicy::Halt => Tick::Halted,
            GameOverPolicy::Restart => self.resume(),
        }
    }
}
