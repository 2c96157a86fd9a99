//! # Command-Line Interface
//!
//! User-facing commands and output formatting for the `shapes` binary.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `area` | Area of one shape | `shapes area circle:A:40` |
//! | `total` | Per-shape areas and their sum | `shapes total square:60 triangle:80x50` |
//! | `session` | Interactive add/remove/compute loop on stdin | `shapes session --empty` |
//! | `explain` | How the visitor dispatches | `shapes explain` |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! shapes --verbose total
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod input;
mod area;
mod session;

pub use app::{Cli, Commands, run};
pub use input::{InputError, ShapeSpec};
pub use output::{format_area, Output, OutputFormat};
pub use session::{CommandError, Flow, Session, SessionCommand};
