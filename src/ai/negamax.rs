use crate::game::{Board, Cell, Piece, Rules};

use super::selector::MoveSelector;

const WIN_SCORE: f64 = 100_000.0;

/// Trait for evaluating a board position from a piece's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, piece: Piece) -> f64;
}

/// Default heuristic that scans every `connect_n`-cell window and scores threats.
pub struct WindowHeuristic {
    window: usize,
}

impl WindowHeuristic {
    pub fn new(connect_n: usize) -> Self {
        WindowHeuristic { window: connect_n }
    }

    fn score_window(&self, own: usize, opp: usize, empty: usize) -> f64 {
        let n = self.window;
        if own == n - 1 && empty == 1 {
            50.0
        } else if own + 2 == n && empty == 2 {
            10.0
        } else if opp == n - 1 && empty == 1 {
            -80.0
        } else if opp + 2 == n && empty == 2 {
            -10.0
        } else {
            0.0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> f64 {
        let own_cell = piece.to_cell();
        let opp_cell = piece.other().to_cell();
        let (rows, cols) = (board.rows() as isize, board.cols() as isize);
        let n = self.window as isize;
        let mut score = 0.0;

        // Center column bonus
        let center = (board.cols() - 1) / 2;
        for row in 0..board.rows() {
            let cell = board.at(row, center);
            if cell == own_cell {
                score += 3.0;
            } else if cell == opp_cell {
                score -= 3.0;
            }
        }

        // Horizontal, vertical, \ and /
        for (dr, dc) in [(0, 1), (1, 0), (1, 1), (-1, 1)] {
            for row in 0..rows {
                for col in 0..cols {
                    let (end_r, end_c) = (row + dr * (n - 1), col + dc * (n - 1));
                    if end_r < 0 || end_r >= rows || end_c >= cols {
                        continue;
                    }
                    let mut own = 0;
                    let mut opp = 0;
                    let mut empty = 0;
                    for i in 0..n {
                        match board.at((row + dr * i) as usize, (col + dc * i) as usize) {
                            Cell::Empty => empty += 1,
                            c if c == own_cell => own += 1,
                            _ => opp += 1,
                        }
                    }
                    score += self.score_window(own, opp, empty);
                }
            }
        }

        score
    }
}

/// Negamax selector with alpha-beta pruning.
pub struct NegamaxSelector {
    depth: usize,
    rules: Rules,
    piece: Piece,
    heuristic: Box<dyn Heuristic>,
}

impl NegamaxSelector {
    /// `depth` is clamped to at least one ply.
    pub fn new(depth: usize, rules: Rules, piece: Piece) -> Self {
        NegamaxSelector {
            depth: depth.max(1),
            rules,
            piece,
            heuristic: Box::new(WindowHeuristic::new(rules.connect_n())),
        }
    }

    pub fn with_heuristic(
        depth: usize,
        rules: Rules,
        piece: Piece,
        heuristic: Box<dyn Heuristic>,
    ) -> Self {
        NegamaxSelector {
            depth: depth.max(1),
            rules,
            piece,
            heuristic,
        }
    }

    /// Column ordering: center-first for better alpha-beta pruning.
    fn ordered(columns: &[usize], cols: usize) -> Vec<usize> {
        let center = (cols as isize - 1) / 2;
        let mut order = columns.to_vec();
        order.sort_by_key(|&c| (c as isize - center).abs());
        order
    }

    fn best_move(&self, board: &Board, legal: &[usize]) -> usize {
        assert!(!legal.is_empty(), "No legal columns available");

        let mut best_col = legal[0];
        let mut best_score = f64::NEG_INFINITY;

        for col in Self::ordered(legal, board.cols()) {
            let score = self.score_drop(
                board,
                col,
                self.piece,
                self.depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        best_col
    }

    /// Value of `piece` dropping into `col`, from that piece's side.
    fn score_drop(
        &self,
        board: &Board,
        col: usize,
        piece: Piece,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> f64 {
        let mut next = board.clone();
        let Ok(row) = self.rules.resolve_move(&next, col) else {
            return f64::NEG_INFINITY;
        };
        next.place(row, col, piece);

        if self.rules.check_win(&next, row, col, piece) {
            // Sooner wins score higher.
            return WIN_SCORE + depth as f64;
        }
        if self.rules.legal_columns(&next).is_empty() {
            return 0.0;
        }
        -self.negamax(&next, piece.other(), depth - 1, -beta, -alpha)
    }

    fn negamax(&self, board: &Board, to_move: Piece, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        if depth == 0 {
            return self.heuristic.evaluate(board, to_move);
        }

        let legal = self.rules.legal_columns(board);
        let mut best = f64::NEG_INFINITY;

        for col in Self::ordered(&legal, board.cols()) {
            let score = self.score_drop(board, col, to_move, depth, alpha, beta);
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

impl MoveSelector for NegamaxSelector {
    fn select_move(&mut self, board: &Board, legal: &[usize]) -> usize {
        self.best_move(board, legal)
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}
