//! # CLI Layer
//!
//! This module is **one possible UI client** for the gradebook, not the
//! application itself. It is the only place that:
//! - Reads from stdin and writes to stdout
//! - Parses command-line flags and sets up logging
//! - Formats results for humans
//!
//! ## Structure
//!
//! - `setup.rs`: clap flags and the menu choices
//! - `commands.rs`: context setup, the menu loop and one handler per choice
//! - `prompt.rs`: line-based prompting over any `BufRead`
//! - `print.rs`: rendering of students, statistics and messages
//!
//! Each menu action goes through the API facade, which reloads the roster from
//! disk. Nothing is kept between actions except the store path.

mod commands;
mod print;
mod prompt;
mod setup;

pub use commands::run;
