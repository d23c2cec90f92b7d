//! Wayfinder library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod cli;
pub mod core;
pub mod directory;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Screen the terminal UI opens on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Welcome,
    Dashboard,
    Search,
}
