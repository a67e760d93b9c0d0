//! Terminal UI: the board, turn indicator, scoreboard and key handling that
//! drive a [`Session`](crate::game::Session).

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
