//! Subscriptions provided by the runtime.
//!
//! [`terminal_events`] delivers key presses, mouse events, resizes and pastes.

mod terminal;

pub use terminal::{terminal_events, TerminalEvents};
