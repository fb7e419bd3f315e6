//! Factdash - a terminal dashboard for fact-check predictions and
//! subreddit sentiment analysis.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod projector;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
