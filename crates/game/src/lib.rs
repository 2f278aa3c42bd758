//! The interactive fiction itself: session state, the command interpreter
//! and every scripted handler.
//!
//! Handlers write to any [`std::io::Write`] and take the session record by
//! reference, so they run unchanged against a terminal or a test buffer.

pub mod builtins;
pub mod clock;
pub mod command;
pub mod encounter;
pub mod game;
pub mod input;
pub mod legacy;
pub mod pacing;
pub mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{Command, LegacyPhrase};
pub use game::Game;
pub use input::{LineRead, read_line};
pub use pacing::Pacing;
pub use state::GameState;
