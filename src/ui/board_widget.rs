use crate::game::{Board, Cell, Piece};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn piece_color(piece: Piece) -> Color {
    match piece {
        Piece::Yellow => Color::Yellow,
        Piece::Red => Color::Red,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
        Cell::Red => (" \u{25cf} ", Color::Red),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Render the board with column numbers and a marker under the selected column.
pub fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let cols = board.cols();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in board.iter_rows() {
        let mut spans = vec![Span::raw("  ║")];
        spans.extend(row.iter().map(|&cell| cell_span(cell)));
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
