#![cfg(not(target_arch = "wasm32"))]
#![warn(missing_docs)]

//! # Feedback Terminal
//!
//! A Terminal User Interface (TUI) rendition of the feedback widget. The
//! screen is split into a prompt section holding one control per feedback
//! category and a statistics section that shows either the running tally
//! or a notice that nothing has been recorded yet.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin feedback
//! ```
//!
//! With English labels and a log file:
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin feedback -- --locale en --log-file feedback.log
//! ```
//!
//! ## Key Bindings
//!
//! - `1`, `2`, `3` - Record feedback for the n-th option
//! - `Left`/`Right` (or `h`/`l`) - Move the option cursor
//! - `Enter` or `Space` - Record feedback for the option under the cursor
//! - `q` or `Esc` - Quit the application

mod cli;
pub use cli::*;

mod logging;
pub use logging::*;

mod state;
pub use state::*;

mod widgets;
pub use widgets::*;
