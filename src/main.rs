use anyhow::Result;
use clap::Parser;
use macroquad::logging::{error, info};
use macroquad::prelude::*;

use blockfall::config::{BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, DROP_INTERVAL};
use blockfall::input::{self, InputState};
use blockfall::{render, GameConfig, GameOverPolicy, Session};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,
    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,
    /// Size of one cell on screen, in pixels.
    #[arg(long, default_value_t = CELL_SIZE)]
    cell_size: f32,
    /// Seconds between automatic one-row drops.
    #[arg(long, default_value_t = DROP_INTERVAL)]
    drop_interval: f32,
    /// Seed for the piece sequence, for replaying the same run.
    /// Example: `blockfall --seed=42` or `blockfall -s 42`.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Stop on game over instead of starting a new game right away.
    #[arg(long)]
    halt_on_game_over: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            drop_interval: self.drop_interval,
        }
    }

    fn policy(&self) -> GameOverPolicy {
        if self.halt_on_game_over {
            GameOverPolicy::Halt
        } else {
            GameOverPolicy::Restart
        }
    }
}

fn window_conf() -> Conf {
    window_conf_for(&Args::parse())
}

/// Invalid settings get a default-sized window; `run` reports the error.
fn window_conf_for(args: &Args) -> Conf {
    let config = args.config();
    let config = if config.validate().is_ok() { config } else { GameConfig::default() };
    Conf {
        window_title: "Tetris".to_owned(),
        window_width: config.window_width() as i32,
        window_height: config.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let policy = args.policy();
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(config, policy, seed),
        None => Session::new(config, policy),
    };
    let mut input = InputState::default();
    info!("{}x{} board, drop every {}s", config.width, config.height, config.drop_interval);

    loop {
        let dt = get_frame_time();
        if session.is_halted() {
            if input::restart_pressed() {
                session.resume();
            }
        } else {
            for action in input.poll(dt) {
                session.apply(action);
            }
        }
        session.update(dt);
        render::draw(&session);
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run(Args::parse()).await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
