//! CLI library components for the montre configurator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
