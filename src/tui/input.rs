//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use shakmaty::{File, Rank, Square};

/// Moves the board cursor based on arrow keys, clamped to the board.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let file = u32::from(cursor.file()) as i32;
    let rank = u32::from(cursor.rank()) as i32;

    let (file, rank) = match key {
        KeyCode::Left => (file - 1, rank),
        KeyCode::Right => (file + 1, rank),
        KeyCode::Up => (file, rank + 1),
        KeyCode::Down => (file, rank - 1),
        _ => (file, rank),
    };

    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Square::from_coords(File::new(file as u32), Rank::new(rank as u32))
    } else {
        cursor
    }
}
