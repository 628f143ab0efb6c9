use crate::command::{Command, CommandKind, TerminalCommand};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Why a [`Program`] could not start or stopped early.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// The terminal or the log file could not be used.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Another global `tracing` subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// How a [`Program`] sets up the terminal.
///
/// ```rust,ignore
/// let options = ProgramOptions {
///     mouse_capture: true,
///     log_file: Some("codes.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Upper bound on redraws per second (default 60, kept within 1..=120).
    pub fps: u32,
    /// Use the alternate screen (default true).
    pub alt_screen: bool,
    /// Report mouse events from the start (default false).
    pub mouse_capture: bool,
    /// Deliver pasted text as one event (default true).
    pub bracketed_paste: bool,
    /// Window title.
    pub title: Option<String>,
    /// Restore the terminal before the panic message prints (default true).
    pub catch_panics: bool,
    /// Stop on Ctrl-C (default true).
    pub handle_signals: bool,
    /// Write `tracing` output to this file. See [`crate::logging`].
    pub log_file: Option<PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: false,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
        }
    }
}

impl ProgramOptions {
    fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.clamp(1, 120)))
    }
}

/// Runs a [`Model`] against the real terminal.
///
/// The terminal is restored when [`run`](Program::run) returns, whether the
/// model quit, Ctrl-C arrived or drawing failed.
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscriptions: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    dirty: bool,
    quitting: bool,
}

impl<M: Model> Program<M> {
    /// A program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// A program with custom options. Call inside a tokio runtime: the
    /// initial subscriptions start here.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        if let Some(path) = &options.log_file {
            crate::logging::init_file_logging(path)?;
        }

        let terminal = setup_terminal(&options)?;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);

        let mut program = Self {
            model,
            terminal,
            subscriptions: SubscriptionManager::new(msg_tx.clone()),
            msg_tx,
            msg_rx,
            options,
            dirty: true,
            quitting: false,
        };
        tracing::info!(fps = program.options.fps, "program started");

        program.execute(init_cmd);
        program.subscriptions.reconcile(program.model.subscriptions());
        Ok(program)
    }

    /// Run until the model quits, then restore the terminal and hand back
    /// the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let outcome = self.event_loop().await;

        tracing::info!("program stopping");
        self.subscriptions.shutdown();
        restore_terminal(self.options.alt_screen)?;
        outcome.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        let mut frames = tokio::time::interval(self.options.frame_interval());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let handle_signals = self.options.handle_signals;

        while !self.quitting {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    tracing::info!("ctrl-c received");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.update(msg);
                    // Everything already queued is applied before the next frame.
                    while !self.quitting {
                        let Ok(msg) = self.msg_rx.try_recv() else { break };
                        self.update(msg);
                    }
                }

                _ = frames.tick() => {
                    if self.dirty {
                        self.terminal.draw(|frame| self.model.view(frame))?;
                        self.dirty = false;
                    }
                }
            }
        }
        Ok(())
    }

    fn update(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute(cmd);
        self.subscriptions.reconcile(self.model.subscriptions());
        self.dirty = true;
    }

    fn execute(&mut self, cmd: Command<M::Message>) {
        match cmd.kind {
            CommandKind::None => {}
            CommandKind::Message(msg) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandKind::Quit => {
                tracing::debug!("quit requested");
                self.quitting = true;
            }
            CommandKind::Batch(cmds) => cmds.into_iter().for_each(|cmd| self.execute(cmd)),
            CommandKind::Terminal(tcmd) => {
                let result = match &tcmd {
                    TerminalCommand::EnableMouseCapture => execute!(stdout(), EnableMouseCapture),
                    TerminalCommand::SetTitle(title) => execute!(stdout(), SetTitle(title)),
                };
                if let Err(err) = result {
                    tracing::warn!(command = ?tcmd, error = %err, "terminal command failed");
                }
            }
        }
    }
}

fn setup_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    if options.catch_panics {
        static PANIC_HOOK: Once = Once::new();
        let alt_screen = options.alt_screen;
        PANIC_HOOK.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal(alt_screen);
                previous(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut out = stdout();
    if options.alt_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(out, EnableBracketedPaste)?;
    }
    if options.mouse_capture {
        execute!(out, EnableMouseCapture)?;
    }
    if let Some(title) = &options.title {
        execute!(out, SetTitle(title))?;
    }
    execute!(out, Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

/// Undo every terminal mode the program may have enabled. Each step runs
/// even when an earlier one fails; the raw-mode error is reported.
fn restore_terminal(alt_screen: bool) -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut out = stdout();
    let _ = execute!(out, DisableBracketedPaste, DisableMouseCapture, Show);
    if alt_screen {
        let _ = execute!(out, LeaveAlternateScreen);
    }
    raw
}
