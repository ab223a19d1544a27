//! Collision detection - the single legality check for every piece commit.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Would `piece`, shifted by `(dx, dy)`, collide with the walls, the floor or
/// a locked block?
///
/// Sub-cells above the board (negative row) are only checked against the
/// side walls, which lets freshly spawned pieces overlap the top edge.
pub fn check_collision(board: &Board, piece: &Tetromino, dx: i8, dy: i8) -> bool {
    piece.cells().any(|(x, y)| {
        // Widened so any i8 offset is total.
        let x = i16::from(x) + i16::from(dx);
        let y = i16::from(y) + i16::from(dy);
        if x < 0 || x >= i16::from(BOARD_WIDTH) || y >= i16::from(BOARD_HEIGHT) {
            return true;
        }
        y >= 0 && board.is_occupied(x as i8, y as i8)
    })
}

/// Largest downward distance `piece` can travel without colliding.
///
/// Probes offsets 1, 2, ... and stops at the first collision. Returns 0 when
/// the piece is already resting on something.
pub fn drop_distance(board: &Board, piece: &Tetromino) -> i8 {
    let mut offset = 1;
    while !check_collision(board, piece, 0, offset) {
        offset += 1;
    }
    offset - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgb, ShapeType};

    #[test]
    fn test_spawned_piece_is_legal_on_empty_board() {
        let board = Board::new();
        for kind in ShapeType::ALL {
            assert!(!check_collision(&board, &Tetromino::new(kind), 0, 0));
        }
    }

    #[test]
    fn test_walls_and_floor_collide() {
        let board = Board::new();
        // O occupies columns 4..=5, rows 0..=1 at spawn.
        let piece = Tetromino::new(ShapeType::O);
        assert!(!check_collision(&board, &piece, -4, 0));
        assert!(check_collision(&board, &piece, -5, 0));
        assert!(!check_collision(&board, &piece, 4, 0));
        assert!(check_collision(&board, &piece, 5, 0));
        assert!(!check_collision(&board, &piece, 0, 18));
        assert!(check_collision(&board, &piece, 0, 19));
    }

    #[test]
    fn test_rows_above_board_ignore_occupancy() {
        let mut board = Board::new();
        board.set(4, 0, Some(Rgb::new(1, 2, 3)));
        let piece = Tetromino::new(ShapeType::O);

        // Only the lower row of the O reaches y = 0 and it lands on the block.
        assert!(check_collision(&board, &piece, 0, -1));
        // Fully above the board: nothing to hit.
        assert!(!check_collision(&board, &piece, 0, -2));
        // Above the board but past a side wall still collides.
        assert!(check_collision(&board, &piece, 5, -2));
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let board = Board::new();
        let piece = Tetromino::new(ShapeType::T);
        assert!(check_collision(&board, &piece, i8::MAX, 0));
        assert!(check_collision(&board, &piece, i8::MIN, 0));
        assert!(check_collision(&board, &piece, 0, i8::MAX));
        // Far above the board but between the walls is still legal.
        assert!(!check_collision(&board, &piece, 0, i8::MIN));

        let far = piece.translated(i8::MAX, i8::MAX);
        assert!(check_collision(&board, &far, i8::MAX, i8::MAX));
    }

    #[test]
    fn test_drop_distance_on_empty_board() {
        let board = Board::new();
        assert_eq!(drop_distance(&board, &Tetromino::new(ShapeType::O)), 18);
        // The I bar starts on row 1 of its matrix and rests on row 19.
        assert_eq!(drop_distance(&board, &Tetromino::new(ShapeType::I)), 18);
    }
}
