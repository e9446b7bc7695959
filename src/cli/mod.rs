pub mod commands;
pub mod records;
pub mod scan;

pub use commands::{Cli, Commands};
