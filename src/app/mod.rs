pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod progress;

pub use context::AppContext;
