//! REPL Module
//!
//! The interactive loop: normalise a line, resolve the command, run it
//! against the session.

mod commands;
mod input;
mod session;

pub use commands::{CliCommand, Command, COMMANDS};
pub use input::clean_input;
pub use session::{Flow, Session, PROMPT};
