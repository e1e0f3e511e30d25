//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the view stack and the screen forms
//! - Navigation types (View, Section)
//! - State error handling

mod error;
mod navigation;

pub use error::StateError;
pub use navigation::{Section, View};

// State struct and methods are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, Status};
