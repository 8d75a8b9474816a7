//! CLI module for the yamlcast command-line interface
//!
//! Argument parsing lives in `args`; `commands` turns parsed arguments into
//! library calls and returns the text to print.

pub mod args;
pub mod commands;
