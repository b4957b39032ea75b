// src/reporting/mod.rs
//! Report renderers.

pub mod console;
pub mod json;

pub use console::{print_report, render_report};
pub use json::{print_json, to_json};
