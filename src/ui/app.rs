use crate::ai::{selector_from_config, MoveSelector};
use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{GameStatus, MoveReport, Piece, Session, TurnTicket};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A computer move waiting out its display delay.
#[derive(Debug, Clone, Copy)]
struct PendingMove {
    ticket: TurnTicket,
    due: Instant,
}

pub struct App {
    session: Session,
    selectors: Vec<(Piece, Box<dyn MoveSelector>)>,
    computer_delay: Duration,
    pending: Option<PendingMove>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(
        session: Session,
        selectors: Vec<(Piece, Box<dyn MoveSelector>)>,
        computer_delay: Duration,
    ) -> Self {
        let selected_column = (session.game().board().cols() - 1) / 2; // Start in middle
        App {
            session,
            selectors,
            computer_delay,
            pending: None,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Build the session and one selector per computer participant.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let session = Session::new(&config.game)?;
        let rules = *session.game().rules();
        let selectors = session
            .game()
            .participants()
            .iter()
            .filter(|p| p.is_computer())
            .map(|p| (p.piece, selector_from_config(&config.opponent, rules, p.piece)))
            .collect();
        Ok(Self::new(
            session,
            selectors,
            Duration::from_millis(config.ui.computer_delay_ms),
        ))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        let cols = self.session.game().board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                    self.drop_piece(col);
                }
            }
            KeyCode::Char('r') => {
                self.session.new_game();
                self.pending = None;
                self.selected_column = (cols - 1) / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Schedule the computer's turn, or play it once its delay has passed.
    fn tick(&mut self, now: Instant) {
        match self.pending {
            None => {
                if let Some(ticket) = self.session.pending_turn() {
                    debug!(generation = ticket.generation(), "computer move scheduled");
                    self.pending = Some(PendingMove {
                        ticket,
                        due: now + self.computer_delay,
                    });
                }
            }
            Some(pending) if now >= pending.due => {
                self.pending = None;
                self.play_computer(pending.ticket);
            }
            Some(_) => {}
        }
    }

    fn play_computer(&mut self, ticket: TurnTicket) {
        let Some(piece) = self
            .session
            .game()
            .current_participant()
            .map(|p| p.piece)
        else {
            return;
        };
        let Some((_, selector)) = self.selectors.iter_mut().find(|(p, _)| *p == piece) else {
            return;
        };

        match self.session.play_automated(ticket, selector.as_mut()) {
            Ok(report) => self.report(report),
            Err(MoveError::StaleTurn) => {}
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Drop the human's piece in a column
    fn drop_piece(&mut self, col: usize) {
        self.message = None;

        match self.session.submit_move(col) {
            Ok(report) => self.report(report),
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::NotYourTurn) => {
                self.message = Some("Wait for your opponent...".to_string());
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn report(&mut self, report: MoveReport) {
        let game = self.session.game();
        self.message = match report.status {
            GameStatus::Won(piece) => {
                let name = &game.participant(piece).name;
                info!(winner = %name, "game over");
                Some(format!("{name} wins the game!"))
            }
            GameStatus::Draw => Some("It's a draw!".to_string()),
            GameStatus::InProgress => self.message.take(),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
            self.pending.is_some(),
        );
    }
}
