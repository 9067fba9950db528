//! Stateless UI rendering for the trivia board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use trivia_board::{Board, Clue, Coord, RevealState};

/// Screen regions for one category column.
struct ColumnLayout {
    header: Rect,
    cells: Vec<Rect>,
}

fn screen_chunks(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
        ])
        .areas(area)
}

fn board_layout(area: Rect, board: &Board) -> Vec<ColumnLayout> {
    let width = board.width().max(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, width as u32); width])
        .split(area);

    board
        .categories()
        .iter()
        .zip(columns.iter())
        .map(|(category, column)| {
            let rows = category.clues().len();
            let mut constraints = vec![Constraint::Length(3)];
            constraints.extend(vec![Constraint::Ratio(1, rows.max(1) as u32); rows]);
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(*column);
            ColumnLayout {
                header: split[0],
                cells: split[1..].to_vec(),
            }
        })
        .collect()
}

/// Finds the clue drawn under screen position (`x`, `y`) for a frame of
/// size `area`.
pub fn cell_at(area: Rect, board: &Board, x: u16, y: u16) -> Option<Coord> {
    let [_, board_area, _] = screen_chunks(area);
    let point = Position::new(x, y);
    board_layout(board_area, board)
        .iter()
        .enumerate()
        .find_map(|(col, column)| {
            column
                .cells
                .iter()
                .position(|cell| cell.contains(point))
                .map(|row| Coord::new(col, row))
        })
}

/// Renders the board, or a placeholder while the first board loads.
pub fn draw(frame: &mut Frame, board: Option<&Board>, cursor: Coord, status: &str) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Trivia Board")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match board {
        Some(board) => draw_board(frame, chunks[1], board, cursor),
        None => {
            let waiting = Paragraph::new("Waiting for the first board...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(waiting, chunks[1]);
        }
    }

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord) {
    let layout = board_layout(area, board);
    for (col, (category, column)) in board.categories().iter().zip(&layout).enumerate() {
        let header = Paragraph::new(category.title().to_uppercase())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, column.header);

        for (row, (clue, cell)) in category.clues().iter().zip(&column.cells).enumerate() {
            let selected = cursor == Coord::new(col, row);
            draw_cell(frame, *cell, clue, selected);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, clue: &Clue, selected: bool) {
    let (text, base_style) = match clue.reveal_state() {
        RevealState::Hidden => (
            "?",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        RevealState::ShowingQuestion => (clue.question().as_str(), Style::default().fg(Color::White)),
        RevealState::ShowingAnswer => (clue.answer().as_str(), Style::default().fg(Color::Green)),
    };

    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, base_style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}
