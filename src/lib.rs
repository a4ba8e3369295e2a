//! Fyyur: a booking directory for live music venues and artists.
//!
//! This library exposes modules for integration testing

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;
