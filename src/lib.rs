//! Terminal viewer for a single GitHub user profile.
//!
//! The crate is split into a fetch layer ([`github`]) and a ratatui front end
//! ([`ui`]) wired together through an MVI reducer.

pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod ui;
