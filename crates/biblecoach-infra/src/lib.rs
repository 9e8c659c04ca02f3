//! Infrastructure for the Bible Coach: data directory resolution and
//! `config.toml` loading.

pub mod config;
pub mod filesystem;
