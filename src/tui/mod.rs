//! TUI module for the interactive triangle editor.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Field, Action, Transition)
//! - `update`: State transitions, sanitizer applied here
//! - `view`: Pure rendering
//! - `theme`: Style constants
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
pub use state::App;
