pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod startup;
pub mod state;
