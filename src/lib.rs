pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod org;
pub mod reporting;
pub mod source;
pub mod types;
