use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;

/// Marker type identifying the terminal input subscription.
pub struct TerminalEvents;

/// Subscribe to terminal input, turning each event into a message with `map`.
///
/// Only one terminal subscription runs at a time, and the first `map` it was
/// created with serves every later update. Capture configuration here, never
/// model state: forward the event and decide in `update`.
///
/// `EventStream::new()` falls back to `/dev/tty` when stdin is piped, so
/// input still arrives. The stream is opened inside the subscription task;
/// opening one per `subscriptions()` call would compete with the running
/// reader for events.
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Code(code_input::Message::KeyPress(key))),
///         TerminalEvent::Paste(text) => Some(Msg::Code(code_input::Message::Paste(text))),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + 'static,
) -> Subscription<Msg> {
    Subscription::lazy(SubscriptionId::of::<TerminalEvents>(), move || {
        EventStream::new()
            .filter_map(move |read| {
                let msg = match read {
                    Ok(event) => TerminalEvent::from_crossterm(event).and_then(&map),
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal event read failed");
                        None
                    }
                };
                futures::future::ready(msg)
            })
            .boxed()
    })
}
