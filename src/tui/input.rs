//! Keyboard and mouse handling for the board.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use trivia_board::Coord;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Move(KeyCode),
    /// Interact with the clue under the cursor.
    Reveal,
    /// Move the cursor to a clicked clue and interact with it.
    RevealAt(Coord),
    /// Deal a new board.
    Restart,
    /// Leave the game.
    Quit,
    /// Key with no binding.
    None,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Reveal,
        KeyCode::Left | KeyCode::Char('h') => Action::Move(KeyCode::Left),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(KeyCode::Down),
        KeyCode::Up | KeyCode::Char('k') => Action::Move(KeyCode::Up),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(KeyCode::Right),
        _ => Action::None,
    }
}

/// Maps a terminal event to an action.
///
/// `hit` resolves a screen position to the clue drawn there.
pub fn event_action(event: &Event, hit: impl FnOnce(u16, u16) -> Option<Coord>) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => action_for(key.code),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            hit(mouse.column, mouse.row).map_or(Action::None, Action::RevealAt)
        }
        _ => Action::None,
    }
}

/// Moves the cursor one cell, stopping at the board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode, width: usize, height: usize) -> Coord {
    let (col, row) = (cursor.category(), cursor.clue());
    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right if col + 1 < width => (col + 1, row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down if row + 1 < height => (col, row + 1),
        _ => (col, row),
    };
    Coord::new(col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn click(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 10,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_click_reveals_hit_cell() {
        let target = Coord::new(1, 2);
        let action = event_action(&click(MouseEventKind::Down(MouseButton::Left)), |x, y| {
            assert_eq!((x, y), (10, 7));
            Some(target)
        });
        assert_eq!(action, Action::RevealAt(target));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let miss = event_action(&click(MouseEventKind::Down(MouseButton::Left)), |_, _| None);
        assert_eq!(miss, Action::None);

        let right = event_action(&click(MouseEventKind::Down(MouseButton::Right)), |_, _| {
            Some(Coord::new(0, 0))
        });
        assert_eq!(right, Action::None);

        let moved = event_action(&click(MouseEventKind::Moved), |_, _| Some(Coord::new(0, 0)));
        assert_eq!(moved, Action::None);
    }

    #[test]
    fn test_key_press_maps_but_release_does_not() {
        let press = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(event_action(&press, |_, _| None), Action::Reveal);

        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(event_action(&Event::Key(release), |_, _| None), Action::None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let corner = Coord::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Left, 6, 5), corner);
        assert_eq!(move_cursor(corner, KeyCode::Up, 6, 5), corner);

        let far = Coord::new(5, 4);
        assert_eq!(move_cursor(far, KeyCode::Right, 6, 5), far);
        assert_eq!(move_cursor(far, KeyCode::Down, 6, 5), far);
    }

    #[test]
    fn test_cursor_moves_inside_board() {
        let start = Coord::new(2, 2);
        assert_eq!(move_cursor(start, KeyCode::Right, 6, 5), Coord::new(3, 2));
        assert_eq!(move_cursor(start, KeyCode::Down, 6, 5), Coord::new(2, 3));
    }
}
