//! Configuration management for siriwave.
//!
//! Wave options and terminal settings are read from a TOML file in the user's
//! config directory. A missing file means defaults.

pub mod file;

pub use file::{ensure_config_file, get_config_path, SiriwaveConfig, TerminalConfig};
