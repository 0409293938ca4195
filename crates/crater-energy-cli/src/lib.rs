//! Crater energy CLI library.
//!
//! This crate provides the command handlers, terminal styling and output
//! formatting behind the `crater-energy` binary.

pub mod commands;
pub mod output;
pub mod terminal;
