use crate::game::{GameStatus, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{piece_color, render_board};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    message: &Option<String>,
    computer_thinking: bool,
) {
    let board_height = session.game().board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Scores
            Constraint::Min(board_height), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, computer_thinking, chunks[0]);
    render_scores(frame, session, chunks[1]);
    render_board(frame, session.game().board(), selected_column, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &Session, computer_thinking: bool, area: Rect) {
    let game = session.game();
    let (status, color) = match game.status() {
        GameStatus::InProgress => {
            let current = game
                .current_participant()
                .unwrap_or_else(|| game.starting_participant());
            let suffix = if computer_thinking { "  (thinking...)" } else { "" };
            (
                format!("It's {}'s turn!{suffix}", current.name),
                piece_color(current.piece),
            )
        }
        GameStatus::Won(piece) => (
            format!("Game Over  |  {} wins!", game.participant(piece).name),
            piece_color(piece),
        ),
        GameStatus::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_scores(frame: &mut Frame, session: &Session, area: Rect) {
    let game = session.game();
    let current = game.current_participant().map(|p| p.name.as_str());

    let mut spans = Vec::new();
    for (i, participant) in game.participants().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   |   "));
        }
        let wins = session.scores().get(&participant.name).unwrap_or(0);
        let mut style = Style::default().fg(piece_color(participant.piece));
        if current == Some(participant.name.as_str()) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {}: {} ", participant.name, wins), style));
    }

    let scores = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(scores, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
