//! Command handlers shared by the subcommands and the interactive menu.

pub mod search;
pub mod targets;
