use crate::command::{Command, CommandKind};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Messages, quits and batches of them are honored; terminal commands are
/// dropped. No tokio runtime is needed.
///
/// # Example
///
/// ```rust,ignore
/// use codecell_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<CodeScreen>::new(());
/// for c in "12345".chars() {
///     prog.send(Msg::Key(c));
/// }
/// prog.drain_messages();
/// assert_eq!(prog.model().entered.as_deref(), Some("12345"));
/// assert!(prog.render_string(40, 3).contains("1"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages produced by `init` are queued; flush them with
    /// [`drain_messages`](TestProgram::drain_messages).
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Run one update with `msg`, queueing any follow-up messages.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The model, for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render the model to a buffer of the given size.
    ///
    /// # Panics
    ///
    /// Panics if drawing to the in-memory backend fails.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("draw to test backend");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return its rows joined by newlines.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.kind {
            CommandKind::Message(msg) => self.pending_messages.push(msg),
            CommandKind::Quit => self.quit_requested = true,
            CommandKind::Batch(cmds) => cmds.into_iter().for_each(|cmd| self.collect(cmd)),
            CommandKind::None | CommandKind::Terminal(_) => {}
        }
    }
}
