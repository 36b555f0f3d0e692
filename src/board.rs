//! The playfield: `height` rows of `width` cells, row 0 at the top.
//!
//! Rows above the board (negative `y`) are legal piece positions but store nothing.

use macroquad::color::Color;

/// An empty cell, or the color of the piece that locked there.
pub type Cell = Option<Color>;

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![None; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// No lower bound on `y`: anything above row 0 is inside.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && (y < 0 || (y as usize) < self.height)
    }

    /// Returns `None` for empty cells and for coordinates with no storage.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cell_at(x, y).is_some()
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .map_or(true, |row| row.iter().all(|cell| cell.is_none()))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Locks cells in board coordinates. Cells outside the stored grid,
    /// including everything above row 0, are dropped.
    pub fn lock_cells<I>(&mut self, cells: I, color: Color)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (x, y) in cells {
            if x >= 0 && y >= 0 {
                self.set(x as usize, y as usize, Some(color));
            }
        }
    }

    /// Removes every full row, shifting the rows above down and opening
    /// empty rows at the top. Returns how many rows went.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        // Scan bottom-up; a cleared index is checked again since a new row moved into it.
        let mut y = self.height;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.rows.remove(y - 1);
                self.rows.insert(0, vec![None; self.width]);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{BLUE, RED};

    fn fill_row(board: &mut Board, y: usize, color: Color) {
        for x in 0..board.width() {
            board.set(x, y, Some(color));
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(10, 20);
        assert_eq!(board.rows().len(), 20);
        assert!(board.rows().iter().all(|row| row.len() == 10));
        assert!((0..20).all(|y| board.is_row_empty(y)));
    }

    #[test]
    fn inside_has_no_lower_bound_on_y() {
        let board = Board::new(10, 20);
        assert!(board.is_inside(0, 0));
        assert!(board.is_inside(9, 19));
        assert!(board.is_inside(4, -3));
        assert!(!board.is_inside(-1, 5));
        assert!(!board.is_inside(10, 5));
        assert!(!board.is_inside(3, 20));
    }

    #[test]
    fn lock_drops_cells_above_the_board() {
        let mut board = Board::new(10, 20);
        board.lock_cells([(4, -1), (4, 0), (5, 0), (5, -2)], RED);
        assert_eq!(board.cell_at(4, 0), Some(RED));
        assert_eq!(board.cell_at(5, 0), Some(RED));
        let locked = board.rows().iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(locked, 2);
    }

    #[test]
    fn full_row_detection() {
        let mut board = Board::new(4, 3);
        fill_row(&mut board, 2, BLUE);
        assert!(board.is_row_full(2));
        board.set(1, 2, None);
        assert!(!board.is_row_full(2));
        assert!(!board.is_row_full(7));
    }

    #[test]
    fn clears_adjacent_full_rows() {
        let mut board = Board::new(4, 5);
        board.set(0, 1, Some(RED));
        fill_row(&mut board, 3, BLUE);
        fill_row(&mut board, 4, BLUE);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.cell_at(0, 3), Some(RED));
        assert!(board.is_row_empty(4));
        assert!((0..3).all(|y| board.is_row_empty(y)));
    }

    #[test]
    fn clear_keeps_rows_below_and_shifts_rows_above() {
        let mut board = Board::new(4, 5);
        board.set(2, 1, Some(RED));
        fill_row(&mut board, 2, BLUE);
        board.set(3, 4, Some(RED));

        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.cell_at(2, 2), Some(RED));
        assert_eq!(board.cell_at(3, 4), Some(RED));
        assert!(board.is_row_empty(0));
        assert!(board.is_row_empty(1));
    }

    #[test]
    fn clear_empties_everything() {
        let mut board = Board::new(4, 2);
        fill_row(&mut board, 0, RED);
        board.clear();
        assert_eq!(board, Board::new(4, 2));
    }
}
