//! Key dispatch, the prompt line editor, `:` commands and file I/O.
//!
//! Everything here runs synchronously on the caller's thread. Handlers that
//! need more input (the `:` prompt, "Save as") read keys from the same
//! [`core_terminal::TerminalBackend`] the event loop uses and repaint through
//! it while they wait.

pub mod dispatcher;
pub mod io_ops;
pub mod prompt;

pub use dispatcher::command::{apply_set_command, execute_command};
pub use dispatcher::command_parser::{CommandParser, ParsedCommand, SetCommand};
pub use dispatcher::{DispatchResult, dispatch};
