use crate::game::{Board, Cell, BOARD_SIZE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the board into the given area, highlighting the cursor cell when
/// one is provided.
pub fn render_board(frame: &mut Frame, board: &Board, cursor: Option<(usize, usize)>, area: Rect) {
    let mut lines = Vec::new();

    lines.push(Line::from("╔════════════╗"));

    for row in 0..BOARD_SIZE {
        let mut spans = vec![Span::raw("║")];

        for col in 0..BOARD_SIZE {
            let cell = board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", Color::Red),
                Cell::O => (" O ", Color::Yellow),
            };

            let mut style = Style::default().fg(color);
            if cursor == Some((row, col)) {
                style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(symbol, style));
        }

        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from("╚════════════╝"));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
