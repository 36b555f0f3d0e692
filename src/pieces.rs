//! Tetromino catalog: the seven kinds, their base matrices and colors.

use macroquad::color::Color;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, O, T, S, Z, J, L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Orientation at rotation 0. Every call hands out a fresh copy.
    pub fn base_shape(self) -> Shape {
        BASE_SHAPES[self as usize]
    }

    pub fn color(self) -> Color {
        PIECE_COLORS[self as usize]
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

pub const MAX_SHAPE_SIZE: usize = 4;

/// Square 0/1 matrix of side `size` (at most 4), row-major, top-left first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn new(size: usize, cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Shape { size, cells }
    }

    /// Side length of the matrix, which is also its width when centering a spawn.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupied cells as (column, row) offsets from the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size).flat_map(move |sy| {
            (0..self.size)
                .filter(move |&sx| self.cells[sy][sx] == 1)
                .map(move |sx| (sx as i32, sy as i32))
        })
    }

    /// 90 degrees clockwise: `new[x][n - 1 - y] = old[y][x]`.
    pub fn rotated_clockwise(&self) -> Shape {
        let n = self.size;
        let mut cells = [[0; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                cells[x][n - 1 - y] = self.cells[y][x];
            }
        }
        Shape { size: n, cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.size].iter().map(move |row| &row[..self.size])
    }
}

const BASE_SHAPES: [Shape; 7] = [
    Shape::new(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]), // I
    Shape::new(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), // O
    Shape::new(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), // T
    Shape::new(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), // S
    Shape::new(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), // Z
    Shape::new(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), // J
    Shape::new(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]), // L
];

const PIECE_COLORS: [Color; 7] = [
    Color { r: 0.0,   g: 1.0,   b: 1.0,   a: 1.0 }, // I
    Color { r: 1.0,   g: 1.0,   b: 0.0,   a: 1.0 }, // O
    Color { r: 0.502, g: 0.0,   b: 0.502, a: 1.0 }, // T
    Color { r: 0.0,   g: 1.0,   b: 0.0,   a: 1.0 }, // S
    Color { r: 1.0,   g: 0.0,   b: 0.0,   a: 1.0 }, // Z
    Color { r: 0.0,   g: 0.0,   b: 1.0,   a: 1.0 }, // J
    Color { r: 1.0,   g: 0.647, b: 0.0,   a: 1.0 }, // L
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn matrix(shape: &Shape) -> Vec<Vec<u8>> {
        shape.rows().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.base_shape().occupied().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let rotated = PieceKind::T.base_shape().rotated_clockwise();
        assert_eq!(matrix(&rotated), vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn i_rotates_to_vertical() {
        let rotated = PieceKind::I.base_shape().rotated_clockwise();
        let cells: Vec<_> = rotated.occupied().collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn four_rotations_return_to_base() {
        for kind in PieceKind::ALL {
            let base = kind.base_shape();
            let mut shape = base;
            for _ in 0..4 {
                shape = shape.rotated_clockwise();
            }
            assert_eq!(shape, base);
        }
    }

    #[test]
    fn rotating_a_copy_leaves_the_catalog_alone() {
        let _ = PieceKind::S.base_shape().rotated_clockwise();
        assert_eq!(matrix(&PieceKind::S.base_shape()), vec![vec![0, 1, 1], vec![1, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn random_kinds_cover_the_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(PieceKind::random(&mut rng));
        }
        assert_eq!(seen.len(), 7);
    }
}
