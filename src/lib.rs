pub mod cli;
pub mod config;
pub mod handles;
pub mod tui;
pub mod utils;
