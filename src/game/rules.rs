//! Move validation and win/draw detection. Everything here is a pure function
//! of a [`Board`]; the only state is the configured run length.

use crate::error::{ConfigError, MoveError};

use super::{Board, Cell, Piece};

pub const DEFAULT_CONNECT_N: usize = 4;

/// Columns that can still accept a piece, in ascending order.
pub type LegalColumns = Vec<usize>;

/// Row/column steps for horizontal, vertical, `\` and `/` lines.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    connect_n: usize,
}

impl Rules {
    /// Validate a run length against the board it will be played on.
    pub fn new(connect_n: usize, rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if connect_n < 2 {
            return Err(ConfigError::Validation(format!(
                "connect_n must be >= 2, got {connect_n}"
            )));
        }
        if connect_n > rows.min(cols) {
            return Err(ConfigError::Validation(format!(
                "connect_n ({connect_n}) must not exceed the smaller board dimension ({})",
                rows.min(cols)
            )));
        }
        Ok(Rules { connect_n })
    }

    pub fn connect_n(&self) -> usize {
        self.connect_n
    }

    /// Columns whose top cell is empty. An empty result means the board is full.
    pub fn legal_columns(&self, board: &Board) -> LegalColumns {
        (0..board.cols())
            .filter(|&col| board.at(0, col) == Cell::Empty)
            .collect()
    }

    /// Find the row a piece dropped into `col` would land on.
    pub fn resolve_move(&self, board: &Board, col: usize) -> Result<usize, MoveError> {
        match board.lowest_empty_row(col) {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(MoveError::ColumnFull(col)),
            Err(_) => Err(MoveError::InvalidColumn {
                column: col,
                cols: board.cols(),
            }),
        }
    }

    /// Check whether `piece` at (row, col) sits on a run of at least
    /// `connect_n`. Each line through the cell is scanned edge to edge.
    pub fn check_win(&self, board: &Board, row: usize, col: usize, piece: Piece) -> bool {
        if board.get(row, col).is_err() {
            return false;
        }
        let cell = piece.to_cell();
        DIRECTIONS
            .iter()
            .any(|&dir| self.line_has_run(board, row, col, dir, cell))
    }

    /// Full board and no run anywhere. A move that fills the board and wins
    /// is a win, not a draw.
    pub fn is_draw(&self, board: &Board) -> bool {
        self.legal_columns(board).is_empty() && !self.has_winning_run(board)
    }

    /// Whether any run of `connect_n` exists on the board.
    pub fn has_winning_run(&self, board: &Board) -> bool {
        (0..board.rows()).any(|row| {
            (0..board.cols()).any(|col| match board.at(row, col) {
                Cell::Empty => false,
                Cell::Yellow => self.check_win(board, row, col, Piece::Yellow),
                Cell::Red => self.check_win(board, row, col, Piece::Red),
            })
        })
    }

    fn line_has_run(
        &self,
        board: &Board,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
        cell: Cell,
    ) -> bool {
        let in_bounds = |r: isize, c: isize| {
            r >= 0 && c >= 0 && (r as usize) < board.rows() && (c as usize) < board.cols()
        };

        // Back up to where the line enters the board.
        let (mut r, mut c) = (row as isize, col as isize);
        while in_bounds(r - dr, c - dc) {
            r -= dr;
            c -= dc;
        }

        let mut run = 0;
        while in_bounds(r, c) {
            if board.at(r as usize, c as usize) == cell {
                run += 1;
                if run >= self.connect_n {
                    return true;
                }
            } else {
                run = 0;
            }
            r += dr;
            c += dc;
        }
        false
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            connect_n: DEFAULT_CONNECT_N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_piece(rules: &Rules, board: &mut Board, col: usize, piece: Piece) -> usize {
        let row = rules.resolve_move(board, col).unwrap();
        board.place(row, col, piece);
        row
    }

    #[test]
    fn test_connect_n_validation() {
        assert!(Rules::new(4, 6, 7).is_ok());
        assert!(Rules::new(6, 6, 7).is_ok());
        assert!(Rules::new(7, 6, 7).is_err());
        assert!(Rules::new(1, 6, 7).is_err());
    }

    #[test]
    fn test_legal_columns_excludes_full() {
        let rules = Rules::default();
        let mut board = Board::default();
        assert_eq!(rules.legal_columns(&board), vec![0, 1, 2, 3, 4, 5, 6]);

        for i in 0..6 {
            let piece = if i % 2 == 0 { Piece::Red } else { Piece::Yellow };
            drop_piece(&rules, &mut board, 2, piece);
        }
        assert_eq!(rules.legal_columns(&board), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_resolve_move_errors() {
        let rules = Rules::default();
        let mut board = Board::default();
        assert_eq!(
            rules.resolve_move(&board, 7),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        for i in 0..6 {
            let piece = if i % 2 == 0 { Piece::Red } else { Piece::Yellow };
            drop_piece(&rules, &mut board, 0, piece);
        }
        assert_eq!(rules.resolve_move(&board, 0), Err(MoveError::ColumnFull(0)));
        assert_eq!(rules.resolve_move(&board, 1), Ok(5));
    }

    #[test]
    fn test_horizontal_win() {
        let rules = Rules::default();
        let mut board = Board::default();
        for col in 0..4 {
            drop_piece(&rules, &mut board, col, Piece::Red);
        }
        assert!(rules.check_win(&board, 5, 2, Piece::Red)); // Check middle of the line
        assert!(!rules.check_win(&board, 5, 2, Piece::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let rules = Rules::default();
        let mut board = Board::default();
        for _ in 0..4 {
            drop_piece(&rules, &mut board, 3, Piece::Yellow);
        }
        assert!(rules.check_win(&board, 2, 3, Piece::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let rules = Rules::default();
        let mut board = Board::default();
        // Create diagonal / pattern
        drop_piece(&rules, &mut board, 0, Piece::Red);

        drop_piece(&rules, &mut board, 1, Piece::Yellow);
        drop_piece(&rules, &mut board, 1, Piece::Red);

        drop_piece(&rules, &mut board, 2, Piece::Yellow);
        drop_piece(&rules, &mut board, 2, Piece::Yellow);
        drop_piece(&rules, &mut board, 2, Piece::Red);

        drop_piece(&rules, &mut board, 3, Piece::Yellow);
        drop_piece(&rules, &mut board, 3, Piece::Yellow);
        drop_piece(&rules, &mut board, 3, Piece::Yellow);
        let row = drop_piece(&rules, &mut board, 3, Piece::Red);

        assert!(rules.check_win(&board, row, 3, Piece::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let rules = Rules::default();
        let mut board = Board::default();
        // Create diagonal \ pattern
        drop_piece(&rules, &mut board, 6, Piece::Red);

        drop_piece(&rules, &mut board, 5, Piece::Yellow);
        drop_piece(&rules, &mut board, 5, Piece::Red);

        drop_piece(&rules, &mut board, 4, Piece::Yellow);
        drop_piece(&rules, &mut board, 4, Piece::Yellow);
        drop_piece(&rules, &mut board, 4, Piece::Red);

        drop_piece(&rules, &mut board, 3, Piece::Yellow);
        drop_piece(&rules, &mut board, 3, Piece::Yellow);
        drop_piece(&rules, &mut board, 3, Piece::Yellow);
        let row = drop_piece(&rules, &mut board, 3, Piece::Red);

        assert!(rules.check_win(&board, row, 3, Piece::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let rules = Rules::default();
        let mut board = Board::default();
        for col in 0..3 {
            drop_piece(&rules, &mut board, col, Piece::Red);
        }
        assert!(!rules.check_win(&board, 5, 1, Piece::Red)); // Only 3 in a row
    }

    #[test]
    fn test_gap_breaks_run() {
        let rules = Rules::default();
        let mut board = Board::default();
        for col in [0, 1, 3, 4] {
            drop_piece(&rules, &mut board, col, Piece::Red);
        }
        drop_piece(&rules, &mut board, 2, Piece::Yellow);
        assert!(!rules.check_win(&board, 5, 4, Piece::Red));
    }

    #[test]
    fn test_filling_gap_wins_from_either_side() {
        let rules = Rules::default();
        let mut board = Board::default();
        for col in [1, 2, 4] {
            drop_piece(&rules, &mut board, col, Piece::Yellow);
        }
        let row = drop_piece(&rules, &mut board, 3, Piece::Yellow);
        assert!(rules.check_win(&board, row, 3, Piece::Yellow));
    }

    #[test]
    fn test_run_longer_than_connect_n_wins() {
        let rules = Rules::default();
        let mut board = Board::default();
        for col in [0, 1, 2, 4, 5] {
            drop_piece(&rules, &mut board, col, Piece::Red);
        }
        let row = drop_piece(&rules, &mut board, 3, Piece::Red);
        assert!(rules.check_win(&board, row, 3, Piece::Red));
    }

    #[test]
    fn test_connect_five_needs_five() {
        let rules = Rules::new(5, 6, 8).unwrap();
        let mut board = Board::new(6, 8).unwrap();
        for col in 0..4 {
            drop_piece(&rules, &mut board, col, Piece::Red);
        }
        assert!(!rules.check_win(&board, 5, 3, Piece::Red));
        let row = drop_piece(&rules, &mut board, 4, Piece::Red);
        assert!(rules.check_win(&board, row, 4, Piece::Red));
    }

    #[test]
    fn test_check_win_out_of_range_is_false() {
        let rules = Rules::default();
        let board = Board::default();
        assert!(!rules.check_win(&board, 6, 0, Piece::Red));
    }

    #[test]
    fn test_draw_requires_full_board() {
        let rules = Rules::default();
        let board = Board::default();
        assert!(!rules.is_draw(&board));
    }

    #[test]
    fn test_full_board_with_run_is_not_draw() {
        let rules = Rules::default();
        let mut board = Board::default();
        for col in 0..7 {
            for _ in 0..6 {
                drop_piece(&rules, &mut board, col, Piece::Yellow);
            }
        }
        assert!(rules.legal_columns(&board).is_empty());
        assert!(rules.has_winning_run(&board));
        assert!(!rules.is_draw(&board));
    }
}
