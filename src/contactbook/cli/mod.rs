//! # CLI Layer
//!
//! One possible UI client for the assistant: an interactive prompt.
//!
//! This is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses process arguments and input lines
//! - Formats output for human consumption
//!
//! Everything else goes through [`contactbook::api::AssistantApi`].
//!
//! ## Structure
//!
//! - `setup`: clap arguments, the command table and the grouped help
//! - `parser`: input line to typed [`parser::Command`]
//! - `suggest`: "did you mean" for unknown verbs
//! - `render`: `CmdResult` to terminal output
//! - `commands`: `run()` and the read-eval-print loop

mod commands;
mod parser;
mod render;
mod setup;
mod suggest;

pub use commands::run;
