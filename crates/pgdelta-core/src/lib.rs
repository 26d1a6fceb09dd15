//! pgdelta-core: snapshot, baseline and delta engine for PostgreSQL
//! cumulative statistics.
//!
//! Provides:
//! - `model` — counter row types and snapshots
//! - `engine` — baseline manager, delta computation, metric tables
//! - `collector` — snapshot sources (PostgreSQL, scripted mock)
//! - `view` — per-domain column layouts and view rotation
//! - `schedule` — poll interval bookkeeping
//! - `event` — control events and the bounded event queue
//! - `session` — main-loop state shared by front-ends
//! - `fmt` — column formatting helpers
//!
//! With `tui` feature (default):
//! - `tui` — terminal front-end (ratatui/crossterm)

pub mod collector;
pub mod engine;
pub mod event;
pub mod fmt;
pub mod model;
pub mod schedule;
pub mod session;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Crate version with the git revision it was built from.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), ")");
