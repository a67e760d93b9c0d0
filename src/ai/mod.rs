mod negamax;
mod random;
mod selector;

pub use negamax::{Heuristic, NegamaxSelector, WindowHeuristic};
pub use random::RandomSelector;
pub use selector::{selector_from_config, MoveSelector, OpponentConfig, Strategy};
