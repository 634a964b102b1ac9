//! # Stockpile CLI
//!
//! The binary is intentionally thin: the client lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into a message on stderr and
//! exit code 1.
//!
//! ```text
//! stockpile                      # list (default)
//! stockpile add "Desk Fan" Home 19.50 7
//! stockpile edit 2 price 21
//! stockpile delete 3
//! stockpile sort price           # again to flip direction
//! stockpile export -o backup.json
//! ```
//!
//! Data lives in the platform data directory unless `STOCKPILE_HOME` points
//! elsewhere.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
