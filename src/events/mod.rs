//! Event handling module.
//!
//! This module contains the handler for terminal events: user input and
//! ticks polled from the terminal.

pub mod terminal;
