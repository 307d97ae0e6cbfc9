//! CLI module graph.

pub mod command;
pub mod price;
pub mod run;

pub use command::{Cli, Commands, RunArgs};
