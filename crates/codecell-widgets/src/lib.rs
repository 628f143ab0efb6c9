//! Confirmation-code widgets for the **codecell** runtime.
//!
//! [`CodeInput`](code_input::CodeInput) implements
//! [`codecell_core::Component`], so it embeds in any
//! [`codecell_core::Model`] and renders into any [`ratatui`] layout area.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cells`] | Fill and focus rules for a row of single-character cells |
//! | [`cell_style`] | Cell variants (`border-box`, `border-b`, ...) and their resolution |
//! | [`code_input`] | The segmented code input component |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for moving focus between widgets |
//! | [`key`] | Key bindings and a one-line help renderer |
//! | [`chrome`] | Titled, focus-aware panels |

pub mod cell_style;
pub mod cells;
pub mod chrome;
pub mod code_input;
pub mod focus;
pub mod key;

pub use cell_style::{CellPalette, CellStyle, CellVariant, InputPosition};
pub use cells::{CodeCells, Entry, FocusIntent, Focused};
pub use code_input::{CodeInput, CodeInputConfig, CodeInputKeyMap};
