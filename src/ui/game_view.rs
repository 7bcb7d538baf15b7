use crate::game::{GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: (usize, usize),
    message: &Option<String>,
    agent_name: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, agent_name, chunks[0]);
    board_widget::render_board(frame, game_state.board(), Some(cursor), chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    agent_name: &str,
    area: ratatui::layout::Rect,
) {
    let mover = game_state.mover();
    let color = match mover {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    };

    let status = if game_state.is_terminal() {
        format!("Game Over  |  vs {agent_name}")
    } else {
        format!("Current Player: {}  |  vs {agent_name}", mover.name())
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe 4x4"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
