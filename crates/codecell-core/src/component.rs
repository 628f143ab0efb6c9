use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A widget embedded in a [`Model`](crate::Model), drawn into an area the
/// parent chooses.
///
/// The parent wraps the widget's messages in one of its own variants and
/// lifts the returned commands with [`Command::map`]:
///
/// ```rust,ignore
/// use codecell_core::{Command, Component, Model};
/// use codecell_widgets::code_input::{self, CodeInput};
/// use ratatui::Frame;
///
/// struct Verify { code: CodeInput, entered: Option<String> }
///
/// enum Msg { Code(code_input::Message) }
///
/// impl Model for Verify {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Verify { code: CodeInput::new(), entered: None }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Code(code_input::Message::Fulfilled(code)) => {
///                 self.entered = Some(code);
///                 Command::none()
///             }
///             Msg::Code(m) => self.code.update(m).map(Msg::Code),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.code.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// Messages the widget handles and emits.
    type Message: Send + 'static;

    /// Apply one message.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Draw inside `area` only.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether the widget holds keyboard focus.
    fn focused(&self) -> bool {
        false
    }
}
