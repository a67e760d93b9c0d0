//! # Connect Four
//!
//! A Connect Four game engine with a terminal UI built with Ratatui and
//! pluggable computer opponents (uniform random, negamax search).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, rules, game state machine, score tally, session
//! - [`ai`] — Move selector trait and the random/negamax strategies
//! - [`ui`] — Terminal UI: board, scoreboard, delayed computer moves
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
