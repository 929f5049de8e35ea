//! Flightpath CLI library.
//!
//! This crate provides command-line interface utilities for the flightpath
//! route finder, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
