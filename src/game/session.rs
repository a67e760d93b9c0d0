use tracing::{debug, info, warn};

use crate::ai::MoveSelector;
use crate::error::{ConfigError, MoveError};

use super::{GameConfig, GameState, GameStatus, MoveReport, ScoreTracker};

/// Claim on one pending computer move. Only redeemable while the game it was
/// issued for is still on the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    generation: u64,
    move_number: usize,
}

impl TurnTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything a front end drives: the current game, the running score, and
/// a generation counter that invalidates computer moves scheduled for an
/// earlier game.
#[derive(Debug, Clone)]
pub struct Session {
    initial: GameState,
    game: GameState,
    scores: ScoreTracker,
    generation: u64,
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let game = GameState::new(config)?;
        let scores = ScoreTracker::new(config.participants.iter().map(|p| p.name.clone()));
        Ok(Session {
            initial: game.clone(),
            game,
            scores,
            generation: 0,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Move request from a human participant.
    pub fn submit_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.game.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self
            .game
            .current_participant()
            .is_some_and(|p| p.is_computer())
        {
            debug!(column, "human move rejected while computer is to play");
            return Err(MoveError::NotYourTurn);
        }
        self.apply(column)
    }

    /// A ticket for the computer's turn, if it is the computer's turn.
    pub fn pending_turn(&self) -> Option<TurnTicket> {
        let current = self.game.current_participant()?;
        current.is_computer().then_some(TurnTicket {
            generation: self.generation,
            move_number: self.game.moves_played(),
        })
    }

    /// Let `selector` play the turn `ticket` was issued for.
    pub fn play_automated(
        &mut self,
        ticket: TurnTicket,
        selector: &mut dyn MoveSelector,
    ) -> Result<MoveReport, MoveError> {
        if ticket.generation != self.generation || ticket.move_number != self.game.moves_played() {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "discarding stale computer move"
            );
            return Err(MoveError::StaleTurn);
        }
        if self.game.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let legal = self.game.legal_columns();
        let column = selector.select_move(self.game.board(), &legal);
        if !legal.contains(&column) {
            warn!(selector = selector.name(), column, ?legal, "selector chose an illegal column");
        }
        self.apply(column)
    }

    /// Start over on an empty board. Scores carry over.
    pub fn new_game(&mut self) {
        self.generation += 1;
        self.game = self.initial.clone();
        info!(generation = self.generation, "new game");
    }

    /// Zero the running score.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    fn apply(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        let report = self.game.apply_move(column)?;
        debug!(
            column,
            row = report.row,
            piece = report.piece.name(),
            "move applied"
        );

        match report.status {
            GameStatus::Won(piece) => {
                let name = self.game.participant(piece).name.clone();
                match self.scores.record_win(&name) {
                    Ok(wins) => info!(winner = %name, wins, "game won"),
                    Err(e) => warn!(error = %e, "could not record win"),
                }
            }
            GameStatus::Draw => info!(moves = self.game.moves_played(), "game drawn"),
            GameStatus::InProgress => {}
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Participant, Piece};

    /// Plays a fixed list of columns, first legal one wins.
    struct Scripted(Vec<usize>);

    impl MoveSelector for Scripted {
        fn select_move(&mut self, _board: &Board, legal: &[usize]) -> usize {
            self.0
                .iter()
                .copied()
                .find(|c| legal.contains(c))
                .unwrap_or(legal[0])
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn human_vs_human() -> GameConfig {
        GameConfig {
            participants: vec![
                Participant::human("Alice", Piece::Yellow),
                Participant::human("Bob", Piece::Red),
            ],
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_human_move_blocked_during_computer_turn() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        assert!(session.pending_turn().is_none());

        session.submit_move(3).unwrap();
        assert!(session.pending_turn().is_some());
        assert_eq!(session.submit_move(2), Err(MoveError::NotYourTurn));
        assert_eq!(session.game().board().piece_count(), 1);
    }

    #[test]
    fn test_ticket_redeemed_once() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        session.submit_move(3).unwrap();
        let ticket = session.pending_turn().unwrap();
        let mut selector = Scripted(vec![0]);

        let report = session.play_automated(ticket, &mut selector).unwrap();
        assert_eq!((report.piece, report.column), (Piece::Red, 0));
        assert_eq!(
            session.play_automated(ticket, &mut selector),
            Err(MoveError::StaleTurn)
        );
        assert_eq!(session.game().moves_played(), 2);
    }

    #[test]
    fn test_new_game_invalidates_pending_ticket() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        session.submit_move(3).unwrap();
        let ticket = session.pending_turn().unwrap();

        session.new_game();
        assert_eq!(session.generation(), 1);
        assert_eq!(
            session.play_automated(ticket, &mut Scripted(vec![0])),
            Err(MoveError::StaleTurn)
        );
        assert_eq!(session.game().board().piece_count(), 0);
    }

    #[test]
    fn test_win_recorded_once_and_kept_across_games() {
        let mut session = Session::new(&human_vs_human()).unwrap();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            session.submit_move(col).unwrap();
        }
        assert_eq!(session.game().status(), GameStatus::Won(Piece::Yellow));
        assert_eq!(session.scores().get("Alice"), Some(1));
        assert_eq!(session.submit_move(2), Err(MoveError::GameOver));
        assert_eq!(session.scores().get("Alice"), Some(1));

        session.new_game();
        assert_eq!(session.scores().get("Alice"), Some(1));
        assert_eq!(session.game().current_participant().unwrap().name, "Alice");

        session.reset_scores();
        assert_eq!(session.scores().get("Alice"), Some(0));
    }

    #[test]
    fn test_computer_can_win() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        let mut selector = Scripted(vec![6]);
        for col in [0, 1, 2] {
            session.submit_move(col).unwrap();
            let ticket = session.pending_turn().unwrap();
            session.play_automated(ticket, &mut selector).unwrap();
        }
        session.submit_move(0).unwrap();
        let ticket = session.pending_turn().unwrap();
        let report = session.play_automated(ticket, &mut selector).unwrap();

        assert_eq!(report.status, GameStatus::Won(Piece::Red));
        assert_eq!(session.scores().get("Computer"), Some(1));
        assert_eq!(session.scores().get("You"), Some(0));
        assert!(session.pending_turn().is_none());
    }
}
