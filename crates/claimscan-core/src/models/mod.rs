//! Data models.

pub mod claim;
pub mod config;
