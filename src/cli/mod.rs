//! Command-line interface implementations.

pub mod commands;
