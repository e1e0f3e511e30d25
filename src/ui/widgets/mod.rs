//! Reusable UI widget components.
//!
//! This module contains the shared text input widget and styling utilities.

pub mod input;
pub mod styling;
