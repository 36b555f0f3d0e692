use crate::board::Board;
use crate::pieces::Shape;

/// True when `shape` placed with its top-left cell at (`origin_x`, `origin_y`)
/// leaves the side walls, drops through the floor, or overlaps a locked cell.
///
/// Cells above row 0 never meet locked content but still hit the walls.
pub fn collides(shape: &Shape, origin_x: i32, origin_y: i32, board: &Board) -> bool {
    shape.occupied().any(|(sx, sy)| {
        let x = origin_x + sx;
        let y = origin_y + sy;
        !board.is_inside(x, y) || (y >= 0 && board.is_occupied(x, y))
    })
}
