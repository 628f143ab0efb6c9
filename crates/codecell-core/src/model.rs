use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// An application driven by [`Program`](crate::Program).
///
/// The program calls [`init`](Model::init) once, then draws with
/// [`view`](Model::view) and feeds every message (from subscriptions or from
/// returned [`Command`]s) to [`update`](Model::update) until a command quits.
/// A screen hosting code inputs keeps them as fields and forwards their
/// messages.
pub trait Model: Sized + Send + 'static {
    /// Messages handled by [`update`](Model::update).
    type Message: Send + 'static;

    /// Startup data for [`init`](Model::init); `()` when there is none.
    type Flags: Send + 'static;

    /// Build the first state, with any startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Apply one message.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Draw the whole screen.
    fn view(&self, frame: &mut Frame);

    /// Event sources the program should keep running. Asked again after
    /// every update; see [`Subscription`] for how the answers are matched.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        Vec::new()
    }
}
