//! # clipkeep
//!
//! Binary support for ClipKeep: command line parsing and the bootstrap
//! that wires the workspace crates together.

pub mod bootstrap;
pub mod cli;
