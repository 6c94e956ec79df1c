//! Game state machine
//!
//! A game is `InProgress` until the last feedback is a win or the turn limit
//! is reached; from then on it is terminal and rejects further turns.

mod chooser;
mod engine;
mod state;

pub use chooser::{Chooser, RandomUniformChooser};
pub(crate) use chooser::seeded_rng;
pub use engine::GameEngine;
pub use state::GameState;
