//! CLI Command handlers
//!
//! Command implementations kept out of main.rs.

pub mod build;
pub mod doctor;
