//! CLI module
//!
//! Command-line interface over the images client.
//!
//! # Commands
//!
//! - `get` - Show a single image
//! - `list` - List images, one page or all of them
//! - `delete` - Delete an image
//! - `find` - Resolve an image name to its id

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
