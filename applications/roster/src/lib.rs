//! Roster - browse characters from the public catalog
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod screen;
pub mod shell;

pub use error::{AppError, Result};
