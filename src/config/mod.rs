//! Configuration module
//!
//! Handles loading the structured robots configuration from TOML or JSON.

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
