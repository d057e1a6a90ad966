pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::*;
