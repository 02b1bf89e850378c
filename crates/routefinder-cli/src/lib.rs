//! Routefinder CLI library.
//!
//! This crate provides command-line interface utilities for the routefinder
//! pathfinder, including terminal styling and output formatting.

pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
