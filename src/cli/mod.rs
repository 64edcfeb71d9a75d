//! # Command-Line Interface
//!
//! A thin driver over the domain layer. Lists are not stored anywhere, so
//! every command builds its list from the arguments it is given.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `show` | Render a list or a derived view | `todo show a b --done 0 --only done` |
//! | `status` | Done / not-done counts | `todo status a b --all-done` |
//! | `find` | First todo with an exact title | `todo find b a b c` |
//! | `demo` | Render the example list | `todo demo` |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - the plain-text rendering
//! - `json` - machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod list;
mod output;
mod query;

pub use app::{run, Cli, Commands};
pub use list::ListArgs;
pub use output::{Output, OutputFormat};
pub use query::{demo_list, Selection};
