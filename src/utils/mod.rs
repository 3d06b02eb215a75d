//! Utility modules: JSON persistence and log setup.

pub mod logging;
pub mod persistence;
