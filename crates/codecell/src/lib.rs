//! **codecell** -- a segmented confirmation-code (OTP) input for [`ratatui`].
//!
//! Umbrella crate: depend on it alone to get the runtime and the widgets.
//!
//! * Everything public in [`codecell_core`] is available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`], ...).
//! * [`widgets`] re-exports [`codecell_widgets`], including
//!   [`CodeInput`](widgets::CodeInput).
//! * [`ratatui`], [`crossterm`] and [`tokio`] are re-exported.
//!
//! # Quick start
//!
//! ```ignore
//! use codecell::widgets::code_input::{self, CodeInput};
//! use codecell::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
//! use codecell::ratatui::Frame;
//!
//! struct Verify { input: CodeInput }
//!
//! enum Msg { Code(code_input::Message) }
//!
//! impl Model for Verify {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         (Verify { input: CodeInput::new().with_code_length(6) }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Code(code_input::Message::Fulfilled(_code)) => Command::quit(),
//!             Msg::Code(m) => self.input.update(m).map(Msg::Code),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         self.input.view(frame, frame.area());
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         vec![terminal_events(|ev| match ev {
//!             TerminalEvent::Key(key) => Some(Msg::Code(code_input::Message::KeyPress(key))),
//!             _ => None,
//!         })]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), codecell::ProgramError> {
//!     let done = codecell::run::<Verify>(()).await?;
//!     println!("{}", done.input.value());
//!     Ok(())
//! }
//! ```

pub use codecell_core::*;
pub mod widgets {
    pub use codecell_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
