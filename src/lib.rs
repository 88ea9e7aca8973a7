//! Holodex - a terminal browser for the Star Wars API
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod projection;
pub mod terminal;
pub mod traits;
pub mod ui;
