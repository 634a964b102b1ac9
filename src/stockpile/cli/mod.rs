//! # CLI Behavior
//!
//! This is **one possible UI client** for stockpile, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `stockpile` library.
//!
//! ## Naked Execution (`stockpile`)
//!
//! Running `stockpile` with no arguments is `stockpile list`: the table for
//! the persisted view, followed by the totals line.
//!
//! ## Rows
//!
//! `edit` and `delete` take the row number printed in the first column of the
//! last listing, or an id prefix from the last column. `id:<prefix>` forces
//! the id reading for prefixes that happen to be all digits.
//!
//! ## Destructive Commands
//!
//! `delete` and `reset` ask for confirmation unless `--yes` is given. A
//! confirmed delete on a terminal pauses briefly (`delete_delay_ms`) before
//! the rows go away.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Table layout and template rendering
//! - `setup`: Argument parsing via clap
//! - `styles`: Light and dark palettes
//! - `templates`: Output templates
//! - `logging`: `tracing` subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
