/// What [`Model::update`](crate::Model::update) or
/// [`Component::update`](crate::Component::update) asks the runtime to do next.
///
/// A code input uses [`Command::message`] to hand the finished code to its
/// parent; the parent lifts it into its own message type with [`Command::map`].
///
/// ```rust,ignore
/// // In a parent holding a CodeInput:
/// let cmd = self.input.update(msg).map(Msg::Code);
///
/// // Startup effects:
/// let cmd = Command::batch([Command::set_title("Verify"), Command::enable_mouse_capture()]);
/// ```
pub struct Command<Msg> {
    pub(crate) kind: CommandKind<Msg>,
}

pub(crate) enum CommandKind<Msg> {
    None,
    Message(Msg),
    Quit,
    Batch(Vec<Command<Msg>>),
    Terminal(TerminalCommand),
}

/// Terminal state changes carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Start reporting mouse events, so cells can be clicked.
    EnableMouseCapture,
    /// Set the window title.
    SetTitle(String),
}

impl<Msg> Command<Msg> {
    fn from_kind(kind: CommandKind<Msg>) -> Self {
        Command { kind }
    }

    /// Nothing to do.
    pub fn none() -> Self {
        Self::from_kind(CommandKind::None)
    }

    /// Feed `msg` back into `update` before the next frame.
    pub fn message(msg: Msg) -> Self {
        Self::from_kind(CommandKind::Message(msg))
    }

    /// Stop the program.
    pub fn quit() -> Self {
        Self::from_kind(CommandKind::Quit)
    }

    /// Several commands, run in order. No-ops are dropped and a single
    /// remaining command is returned as is.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        if cmds.len() > 1 {
            Self::from_kind(CommandKind::Batch(cmds))
        } else {
            cmds.pop().unwrap_or_else(Command::none)
        }
    }

    /// A terminal state change.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Self::from_kind(CommandKind::Terminal(cmd))
    }

    /// Start reporting mouse events.
    pub fn enable_mouse_capture() -> Self {
        Self::terminal(TerminalCommand::EnableMouseCapture)
    }

    /// Set the window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Self::terminal(TerminalCommand::SetTitle(title.into()))
    }

    /// Wrap every message this command carries with `f`.
    pub fn map<NewMsg>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_ref(&f)
    }

    fn map_ref<NewMsg>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        let kind = match self.kind {
            CommandKind::None => CommandKind::None,
            CommandKind::Message(msg) => CommandKind::Message(f(msg)),
            CommandKind::Quit => CommandKind::Quit,
            CommandKind::Batch(cmds) => {
                CommandKind::Batch(cmds.into_iter().map(|cmd| cmd.map_ref(f)).collect())
            }
            CommandKind::Terminal(tcmd) => CommandKind::Terminal(tcmd),
        };
        Command { kind }
    }

    /// Whether this command does nothing.
    pub fn is_none(&self) -> bool {
        matches!(self.kind, CommandKind::None)
    }

    /// Whether this command stops the program.
    pub fn is_quit(&self) -> bool {
        matches!(self.kind, CommandKind::Quit)
    }

    /// The message, if this command is a single message.
    pub fn into_message(self) -> Option<Msg> {
        match self.kind {
            CommandKind::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// Every message this command carries, batches flattened, in order.
    pub fn into_messages(self) -> Vec<Msg> {
        match self.kind {
            CommandKind::Message(msg) => vec![msg],
            CommandKind::Batch(cmds) => cmds.into_iter().flat_map(Command::into_messages).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_round_trips() {
        assert_eq!(Command::message(42).into_message(), Some(42));
        assert_eq!(Command::<i32>::quit().into_message(), None);
    }

    #[test]
    fn batch_collapses() {
        assert!(Command::<i32>::batch([Command::none(), Command::none()]).is_none());
        assert_eq!(
            Command::batch([Command::none(), Command::message(1)]).into_message(),
            Some(1)
        );
    }

    #[test]
    fn batch_keeps_order() {
        let cmd = Command::batch([
            Command::message(1),
            Command::set_title("codes"),
            Command::message(2),
        ]);
        assert_eq!(cmd.into_messages(), vec![1, 2]);
    }

    #[test]
    fn map_wraps_nested_messages() {
        let cmd = Command::batch([
            Command::message('a'),
            Command::batch([Command::message('b'), Command::quit()]),
        ]);
        let mapped = cmd.map(|c: char| c.to_ascii_uppercase());
        assert_eq!(mapped.into_messages(), vec!['A', 'B']);
    }

    #[test]
    fn map_keeps_quit_and_terminal() {
        assert!(Command::<u8>::quit().map(u32::from).is_quit());

        let mapped = Command::<u8>::set_title("codes").map(u32::from);
        assert!(matches!(
            mapped.kind,
            CommandKind::Terminal(TerminalCommand::SetTitle(ref title)) if title == "codes"
        ));
    }
}
