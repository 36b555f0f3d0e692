//! Drawing. Reads the game state, never changes it.

use macroquad::prelude::*;

use crate::board::Board;
use crate::game::ActivePiece;
use crate::session::Session;

const BACKGROUND_COLOR: Color = BLACK;
const BORDER_COLOR: Color = BLACK;
const GRID_COLOR: Color = Color { r: 0.196, g: 0.196, b: 0.196, a: 1.0 };
const LINE_THICKNESS: f32 = 1.0;

pub fn draw(session: &Session) {
    let cell_size = session.config().cell_size;
    let state = session.state();

    clear_background(BACKGROUND_COLOR);
    draw_board(state.board(), cell_size);
    draw_piece(state.active(), cell_size);
    draw_grid(state.board(), cell_size);

    if session.is_halted() {
        draw_game_over(state.board(), cell_size);
    }
}

fn draw_block(x: i32, y: i32, size: f32, color: Color) {
    let px = x as f32 * size;
    let py = y as f32 * size;
    draw_rectangle(px, py, size, size, color);
    draw_rectangle_lines(px, py, size, size, LINE_THICKNESS, BORDER_COLOR);
}

fn draw_board(board: &Board, cell_size: f32) {
    for (y, row) in board.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Some(color) = cell {
                draw_block(x as i32, y as i32, cell_size, *color);
            }
        }
    }
}

fn draw_piece(piece: &ActivePiece, cell_size: f32) {
    let color = piece.color();
    for (x, y) in piece.cells() {
        draw_block(x, y, cell_size, color);
    }
}

fn draw_grid(board: &Board, cell_size: f32) {
    let width = board.width() as f32 * cell_size;
    let height = board.height() as f32 * cell_size;

    // Vertical lines.
    for x in 0..=board.width() {
        let px = x as f32 * cell_size;
        draw_line(px, 0.0, px, height, LINE_THICKNESS, GRID_COLOR);
    }
    // Horizontal lines.
    for y in 0..=board.height() {
        let py = y as f32 * cell_size;
        draw_line(0.0, py, width, py, LINE_THICKNESS, GRID_COLOR);
    }
}

fn draw_game_over(board: &Board, cell_size: f32) {
    let width = board.width() as f32 * cell_size;
    let height = board.height() as f32 * cell_size;
    draw_rectangle(0.0, 0.0, width, height, Color::new(0.0, 0.0, 0.0, 0.6));

    let msg = "Game Over";
    let font_size = (cell_size * 1.5) as u16;
    let measure = measure_text(msg, None, font_size, 1.0);
    let x = (width - measure.width) / 2.0;
    let y = height / 2.0;
    draw_text(msg, x, y, font_size as f32, RED);

    let hint = "Enter to play again";
    let hint_size = (cell_size * 0.8) as u16;
    let measure = measure_text(hint, None, hint_size, 1.0);
    draw_text(hint, (width - measure.width) / 2.0, y + cell_size * 1.5, hint_size as f32, WHITE);
}
