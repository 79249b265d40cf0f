//! CLI commands

pub mod check;
pub mod info;
pub mod list;
