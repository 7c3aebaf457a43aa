// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for linear-check.
//!
//! This module handles loading and parsing configuration from a TOML file
//! and merging command-line overrides on top of it.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    apply_overrides, find_config_file, find_config_file_from, load_config, parse_config,
    ConfigOverrides,
};
pub use schema::*;
