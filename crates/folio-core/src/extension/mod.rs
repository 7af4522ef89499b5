//! Extension traits for config values.

mod toml_table;

pub use toml_table::TomlTableExt;
