//! Configuration module for marklite
//!
//! This module handles the command-line host's settings, including
//! serialization to/from JSON and persistent storage in the
//! platform-specific configuration directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
