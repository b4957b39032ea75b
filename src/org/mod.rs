// src/org/mod.rs
//! In-memory organizational model.

pub mod index;

pub use index::OrgIndex;
