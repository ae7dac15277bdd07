//! Configuration module
//!
//! Table behaviour, display glyphs and badge colours, loaded from a TOML
//! file in the user's config directory.

pub mod config;
