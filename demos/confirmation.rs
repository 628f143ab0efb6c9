//! # Confirmation Code Demo
//!
//! Three code inputs with different cell variants:
//! - underline cells checking for `Q234E`, cleared again on a mismatch
//! - green boxes checking for `AsDW2`, ignoring case
//! - rounded cells checking for `12345`, remembering the code on success
//!
//! Tab / Shift+Tab move between inputs, Ctrl+R clears the focused one, a
//! click focuses a cell, Enter closes the alert, Esc quits.
//!
//! Set `CODECELL_LOG_FILE=demo.log` to capture logs (filter with `CODECELL_LOG`).
//!
//! Run with: `cargo run --example confirmation`

use codecell::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use codecell::ratatui::layout::{Alignment, Constraint, Layout, Margin};
use codecell::ratatui::style::{Color, Modifier, Style};
use codecell::ratatui::text::Span;
use codecell::ratatui::widgets::Paragraph;
use codecell::ratatui::Frame;
use codecell::widgets::chrome::{render_alert, section_block};
use codecell::widgets::code_input::{self, CodeInput};
use codecell::widgets::focus::FocusRing;
use codecell::widgets::key::{help_line, Binding, KeyCombination, KeyMap};
use codecell::widgets::{CellVariant, InputPosition};
use codecell::{terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent};

const TEAL: Color = Color::Rgb(0, 156, 146);
const GREEN: Color = Color::Rgb(49, 180, 4);
const VIOLET: Color = Color::Rgb(190, 120, 230);

/// Keys handled by the demo itself rather than the focused input.
struct DemoKeys {
    next: Binding,
    prev: Binding,
    clear: Binding,
    dismiss: Binding,
    quit: Binding,
}

impl Default for DemoKeys {
    fn default() -> Self {
        Self {
            next: Binding::new(vec![KeyCombination::new(KeyCode::Tab)], "tab", "next input"),
            prev: Binding::new(vec![KeyCombination::new(KeyCode::BackTab)], "S-tab", "prev input"),
            clear: Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('r'))], "^r", "clear"),
            dismiss: Binding::new(vec![KeyCombination::new(KeyCode::Enter)], "enter", "close alert"),
            quit: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Esc),
                    KeyCombination::ctrl(KeyCode::Char('c')),
                ],
                "esc",
                "quit",
            ),
        }
    }
}

impl KeyMap for DemoKeys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.prev, &self.clear, &self.quit]
    }
}

struct ConfirmationDemo {
    inputs: [CodeInput; 3],
    focus: FocusRing,
    keys: DemoKeys,
    alert: Option<&'static str>,
    accepted: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Code(usize, code_input::Message),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
}

impl Msg {
    fn from_terminal(event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            TerminalEvent::Mouse(event) => Some(Msg::Mouse(event)),
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            TerminalEvent::Resize(..) => None,
        }
    }
}

impl ConfirmationDemo {
    fn move_focus(&mut self, step: impl FnOnce(&mut FocusRing)) {
        if let Some(current) = self.focus.focused() {
            self.inputs[current].blur();
        }
        step(&mut self.focus);
        if let Some(next) = self.focus.focused() {
            self.inputs[next].focus();
        }
    }

    fn route(&mut self, msg: code_input::Message) -> Command<Msg> {
        match self.focus.focused() {
            Some(i) => self.inputs[i].update(msg).map(move |m| Msg::Code(i, m)),
            None => Command::none(),
        }
    }

    /// Demo keys first; while the alert is up nothing else gets through.
    fn handle_key(&mut self, key: KeyEvent) -> Command<Msg> {
        if self.keys.quit.matches(&key) {
            return Command::quit();
        }
        if self.alert.is_some() {
            if self.keys.dismiss.matches(&key) {
                self.alert = None;
            }
            return Command::none();
        }
        if self.keys.next.matches(&key) {
            self.move_focus(FocusRing::focus_next);
        } else if self.keys.prev.matches(&key) {
            self.move_focus(FocusRing::focus_prev);
        } else if self.keys.clear.matches(&key) {
            return self.route(code_input::Message::Clear);
        } else {
            return self.route(code_input::Message::KeyPress(key));
        }
        Command::none()
    }

    fn check(&mut self, index: usize, code: String) {
        let valid = match index {
            0 => code == "Q234E",
            1 => code.eq_ignore_ascii_case("AsDW2"),
            _ => code == "12345",
        };
        tracing::info!(input = index, valid, "code submitted");

        if index == 0 && !valid {
            self.inputs[0].clear();
        }
        if index == 2 && valid {
            self.accepted = Some(code);
        }
        self.alert = Some(if valid { "Successful!" } else { "Code mismatch!" });
    }
}

impl Model for ConfirmationDemo {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let underline = CodeInput::new()
            .with_variant(CellVariant::from_name("border-b"))
            .with_position(InputPosition::Left)
            .with_size(4)
            .with_space(1)
            .with_colors(Color::White, Color::Gray);
        let boxes = CodeInput::new()
            .with_colors(GREEN, Color::Rgb(24, 90, 2))
            .with_position(InputPosition::Center)
            .with_size(6)
            .with_border_width(2)
            .with_auto_focus(false);
        let circles = CodeInput::new()
            .with_code_length(5)
            .with_variant(CellVariant::BorderCircle)
            .with_colors(VIOLET, Color::Rgb(70, 40, 90))
            .with_auto_focus(false);

        (
            ConfirmationDemo {
                inputs: [underline, boxes, circles],
                focus: FocusRing::new(3),
                keys: DemoKeys::default(),
                alert: None,
                accepted: None,
            },
            Command::batch([
                Command::set_title("Confirmation code demo"),
                Command::enable_mouse_capture(),
            ]),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Code(index, code_input::Message::Fulfilled(code)) => {
                self.check(index, code);
                Command::none()
            }
            Msg::Code(index, m) => self.inputs[index].update(m).map(move |m| Msg::Code(index, m)),
            Msg::Key(key) => self.handle_key(key),
            Msg::Paste(_) | Msg::Mouse(_) if self.alert.is_some() => Command::none(),
            Msg::Paste(text) => self.route(code_input::Message::Paste(text)),
            Msg::Mouse(event) => {
                if event.kind != MouseEventKind::Down(MouseButton::Left) {
                    return Command::none();
                }
                let hit = self
                    .inputs
                    .iter()
                    .position(|input| input.hit_test(event.column, event.row).is_some());
                match hit {
                    Some(index) => {
                        self.move_focus(|ring| ring.focus(index));
                        self.route(code_input::Message::Mouse(event))
                    }
                    None => Command::none(),
                }
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, first, second, third, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new("CODE INPUT DEMO")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area.inner(Margin::new(0, 1)));

        let sections = [
            ("UNDERLINE CONFIRMATION CODE", TEAL, first),
            ("BOX CONFIRMATION CODE", GREEN, second),
            ("CIRCLE CONFIRMATION CODE", VIOLET, third),
        ];
        for (index, (label, accent, section)) in sections.into_iter().enumerate() {
            let block = section_block(label, accent, self.focus.is_focused(index));
            let inner = block.inner(section);
            frame.render_widget(block, section);
            self.inputs[index].view(frame, inner);
        }

        if let Some(ref code) = self.accepted {
            let status = Paragraph::new(format!("Accepted code: {code}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green));
            frame.render_widget(status, status_area);
        }

        let mut help = help_line(&self.keys);
        if let Some(i) = self.focus.focused() {
            help.spans.push(Span::raw("  "));
            help.spans.extend(help_line(self.inputs[i].keymap()).spans);
        }
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);

        if let Some(message) = self.alert {
            render_alert(frame, area, "Confirmation Code", message);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(Msg::from_terminal)]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        log_file: std::env::var_os("CODECELL_LOG_FILE").map(Into::into),
        ..ProgramOptions::default()
    };
    let demo = codecell::run_with::<ConfirmationDemo>((), options).await?;
    if let Some(code) = demo.accepted {
        println!("accepted code: {code}");
    }
    Ok(())
}
