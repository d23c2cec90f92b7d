//! # Core Application Logic
//!
//! This module contains Wayfinder's application logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen stack) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │ reads
//!                    ┌───────────▼─────────────┐
//!                    │       DIRECTORY         │
//!                    │  catalog, filter, route │
//!                    └─────────────────────────┘
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │    CLI     │
//!     │  Adapter   │                          │ subcommands│
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: screen stack, search and route state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: TOML config, env and CLI override resolution
//! - [`log_file`]: the append-only log file behind the log viewer

pub mod action;
pub mod config;
pub mod log_file;
pub mod state;
