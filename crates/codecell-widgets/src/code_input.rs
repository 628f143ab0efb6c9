//! Segmented confirmation-code input: one single-character cell per digit.
//!
//! The fill and focus rules live in [`CodeCells`]; this module maps terminal
//! input onto them, carries out the focus changes they ask for, and draws the
//! row of cells.

use std::cell::Cell;

use codecell_core::command::Command;
use codecell_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::Color;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::cell_style::{CellPalette, CellVariant, InputPosition};
use crate::cells::{CodeCells, Entry, FocusIntent, Focused};
use crate::key::{Binding, KeyCombination, KeyMap};

/// Appearance and behavior of a [`CodeInput`].
#[derive(Debug, Clone)]
pub struct CodeInputConfig {
    /// Number of cells.
    pub code_length: usize,
    /// Alignment of the row of cells.
    pub input_position: InputPosition,
    /// Cell width in columns. The height is half of it, at least three rows.
    pub size: u16,
    /// How cells are drawn.
    pub variant: CellVariant,
    /// Colors, border thickness and spacing.
    pub palette: CellPalette,
    /// Take keyboard focus (on the first cell) at construction.
    pub auto_focus: bool,
    /// Draw this character instead of the entered ones.
    pub mask: Option<char>,
}

impl Default for CodeInputConfig {
    fn default() -> Self {
        Self {
            code_length: 5,
            input_position: InputPosition::Center,
            size: 5,
            variant: CellVariant::BorderBox,
            palette: CellPalette::default(),
            auto_focus: true,
            mask: None,
        }
    }
}

/// Messages for the code input component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Pasted text, entered one character per cell.
    Paste(String),
    /// A mouse event; a left click on a cell focuses it.
    Mouse(MouseEvent),
    /// Empty every cell and refocus the first.
    Clear,
    /// Emitted once the last cell is written, with the full code.
    Fulfilled(String),
}

/// Keys understood by a [`CodeInput`].
#[derive(Debug, Clone)]
pub struct CodeInputKeyMap {
    /// Step back one cell.
    pub delete: Binding,
    /// Focus the previous cell, discarding it and everything after.
    pub prev_cell: Binding,
    /// Focus the first cell, discarding the whole code.
    pub first_cell: Binding,
    /// Focus the last cell (lands on the first gap while one remains).
    pub last_cell: Binding,
}

impl Default for CodeInputKeyMap {
    fn default() -> Self {
        Self {
            delete: Binding::new(vec![KeyCombination::new(KeyCode::Backspace)], "⌫", "delete"),
            prev_cell: Binding::new(vec![KeyCombination::new(KeyCode::Left)], "←", "prev cell"),
            first_cell: Binding::new(vec![KeyCombination::new(KeyCode::Home)], "home", "restart"),
            last_cell: Binding::new(vec![KeyCombination::new(KeyCode::End)], "end", "first gap"),
        }
    }
}

impl KeyMap for CodeInputKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.delete,
            &self.prev_cell,
            &self.first_cell,
            &self.last_cell,
        ]
    }
}

type FulfillCallback = Box<dyn FnMut(&str) + Send>;

/// A row of single-character cells for entering a confirmation code.
///
/// Typing fills the focused cell and moves to the next one. Filling the last
/// cell calls the `on_fulfill` callback and emits [`Message::Fulfilled`].
///
/// # Example
///
/// ```ignore
/// let mut input = CodeInput::new()
///     .with_code_length(6)
///     .with_variant(CellVariant::BorderBottom)
///     .with_on_fulfill(|code| tracing::info!(code, "entered"));
///
/// // In the parent's update:
/// // let cmd = input.update(msg).map(Msg::Code);
///
/// // In the parent's view:
/// // input.view(frame, area);
/// ```
pub struct CodeInput {
    cells: CodeCells,
    /// The cell holding the cursor, as the terminal-side focus.
    cell_focus: Option<usize>,
    focus: bool,
    config: CodeInputConfig,
    keymap: CodeInputKeyMap,
    on_fulfill: Option<FulfillCallback>,
    last_area: Cell<Rect>,
}

impl Default for CodeInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeInput {
    /// Create an input with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CodeInputConfig::default())
    }

    /// Create an input from a full configuration.
    pub fn with_config(config: CodeInputConfig) -> Self {
        let mut input = Self {
            cells: CodeCells::new(config.code_length),
            cell_focus: None,
            focus: false,
            config,
            keymap: CodeInputKeyMap::default(),
            on_fulfill: None,
            last_area: Cell::new(Rect::default()),
        };
        input.apply_auto_focus();
        input
    }

    /// Set the number of cells. Resets the entered code.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.config.code_length = code_length;
        self.cells = CodeCells::new(code_length);
        self.apply_auto_focus();
        self
    }

    /// Set the row alignment.
    pub fn with_position(mut self, position: InputPosition) -> Self {
        self.config.input_position = position;
        self
    }

    /// Set the cell width in columns.
    pub fn with_size(mut self, size: u16) -> Self {
        self.config.size = size.max(1);
        self
    }

    /// Set the spacing between cells.
    pub fn with_space(mut self, space: u16) -> Self {
        self.config.palette.space = space;
        self
    }

    /// Set the cell variant.
    pub fn with_variant(mut self, variant: impl Into<CellVariant>) -> Self {
        self.config.variant = variant.into();
        self
    }

    /// Set the border thickness of bordered variants.
    pub fn with_border_width(mut self, width: u16) -> Self {
        self.config.palette.border_width = width;
        self
    }

    /// Set the active and inactive colors.
    pub fn with_colors(mut self, active: impl Into<Color>, inactive: impl Into<Color>) -> Self {
        self.config.palette.active = active.into();
        self.config.palette.inactive = inactive.into();
        self
    }

    /// Choose whether the input starts focused on its first cell.
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.config.auto_focus = auto_focus;
        self.apply_auto_focus();
        self
    }

    /// Draw `mask` in place of entered characters.
    pub fn with_mask(mut self, mask: char) -> Self {
        self.config.mask = Some(mask);
        self
    }

    /// Replace the key bindings.
    pub fn with_keymap(mut self, keymap: CodeInputKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Call `f` with the code each time the last cell is written.
    pub fn with_on_fulfill(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_fulfill = Some(Box::new(f));
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CodeInputConfig {
        &self.config
    }

    /// The key bindings, for help display.
    pub fn keymap(&self) -> &CodeInputKeyMap {
        &self.keymap
    }

    /// Give this input keyboard focus, placing the cursor on the active cell.
    pub fn focus(&mut self) {
        self.focus = true;
        if self.cell_focus.is_none() {
            if let Some(active) = self.cells.active_cell() {
                self.focus_cell(active);
            }
        }
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
        self.cell_focus = None;
    }

    /// Empty every cell. A focused input puts the cursor back on the first.
    pub fn clear(&mut self) {
        tracing::debug!("code input cleared");
        let intent = self.cells.clear();
        if self.focus {
            self.apply_focus(intent);
        } else {
            self.cell_focus = None;
        }
    }

    /// The characters entered so far, in order.
    pub fn value(&self) -> String {
        self.cells.code()
    }

    /// Per-cell values.
    pub fn cells(&self) -> &[Option<char>] {
        self.cells.cells()
    }

    /// Index of the active cell, `None` once the code is complete.
    pub fn active_cell(&self) -> Option<usize> {
        self.cells.active_cell()
    }

    /// The cell holding the cursor.
    pub fn focused_cell(&self) -> Option<usize> {
        self.cell_focus
    }

    /// Whether every cell has been written.
    pub fn is_complete(&self) -> bool {
        self.cells.is_complete()
    }

    /// The cell under a screen position, as of the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let point = Position::new(column, row);
        self.cell_rects(self.last_area.get())
            .iter()
            .position(|rect| rect.contains(point))
    }

    fn apply_auto_focus(&mut self) {
        if self.config.auto_focus {
            self.focus = true;
            self.focus_cell(0);
        } else {
            self.focus = false;
            self.cell_focus = None;
        }
    }

    fn apply_focus(&mut self, intent: FocusIntent) {
        match intent {
            FocusIntent::Focus(index) => self.focus_cell(index),
            FocusIntent::Blur => self.cell_focus = None,
        }
    }

    /// Move the cursor to `index`, letting the cells redirect it to a gap.
    fn focus_cell(&mut self, index: usize) {
        let target = match self.cells.focus(index) {
            Focused::Accepted => index,
            Focused::Redirect(gap) => {
                self.cells.focus(gap);
                gap
            }
        };
        self.cell_focus = Some(target);
    }

    fn enter_char(&mut self, c: char) -> Command<Message> {
        let Some(index) = self.cell_focus else {
            return Command::none();
        };
        match self.cells.enter(Some(c), index) {
            Entry::Advanced(intent) => {
                self.apply_focus(intent);
                Command::none()
            }
            Entry::Fulfilled(code) => self.fulfill(code),
        }
    }

    fn fulfill(&mut self, code: String) -> Command<Message> {
        self.apply_focus(FocusIntent::Blur);
        if let Some(on_fulfill) = self.on_fulfill.as_mut() {
            on_fulfill(&code);
        }
        Command::message(Message::Fulfilled(code))
    }

    fn paste(&mut self, text: &str) -> Command<Message> {
        for c in text.chars().filter(|&c| accepts(c)) {
            if self.cell_focus.is_none() {
                break;
            }
            let cmd = self.enter_char(c);
            if !cmd.is_none() {
                return cmd;
            }
        }
        Command::none()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let len = self.cells.len();
        if self.keymap.delete.matches(&key) {
            if let Some(intent) = self.cells.delete() {
                self.apply_focus(intent);
            }
        } else if self.keymap.prev_cell.matches(&key) {
            let prev = self.cell_focus.unwrap_or(len).saturating_sub(1);
            self.focus_cell(prev);
        } else if self.keymap.first_cell.matches(&key) {
            self.focus_cell(0);
        } else if self.keymap.last_cell.matches(&key) {
            self.focus_cell(len - 1);
        } else if let (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) =
            (key.code, key.modifiers)
        {
            if accepts(c) {
                return self.enter_char(c);
            }
        }
        Command::none()
    }

    fn cell_height(&self) -> u16 {
        (self.config.size / 2).max(3)
    }

    fn cell_rects(&self, area: Rect) -> Vec<Rect> {
        let size = self.config.size;
        let margins = self.config.variant.resolve(
            false,
            &self.config.palette,
            self.config.input_position,
        );
        let slot = margins
            .margin_left
            .saturating_add(size)
            .saturating_add(margins.margin_right);
        let row = Rect {
            height: self.cell_height().min(area.height),
            ..area
        };
        Layout::horizontal(vec![Constraint::Length(slot); self.cells.len()])
            .flex(self.config.input_position.flex())
            .split(row)
            .iter()
            .map(|slot| Rect {
                x: slot.x.saturating_add(margins.margin_left),
                width: size.min(slot.width.saturating_sub(margins.margin_left)),
                ..*slot
            })
            .collect()
    }
}

/// Printable, non-blank characters that occupy at least one column.
fn accepts(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && c.width().is_some_and(|w| w > 0)
}

impl Component for CodeInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.focus {
                    return Command::none();
                }
                self.handle_key(key)
            }
            Message::Paste(text) => {
                if !self.focus {
                    return Command::none();
                }
                self.paste(&text)
            }
            Message::Mouse(event) => {
                if !self.focus || event.kind != MouseEventKind::Down(MouseButton::Left) {
                    return Command::none();
                }
                if let Some(index) = self.hit_test(event.column, event.row) {
                    self.focus_cell(index);
                }
                Command::none()
            }
            Message::Clear => {
                self.clear();
                Command::none()
            }
            Message::Fulfilled(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.last_area.set(area);
        let active = self.cells.active_cell();

        for (index, rect) in self.cell_rects(area).into_iter().enumerate() {
            let style = self.config.variant.resolve(
                active == Some(index),
                &self.config.palette,
                self.config.input_position,
            );
            let block = style.block();
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            if inner.is_empty() {
                continue;
            }

            let text_row = Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            };
            if let Some(c) = self.cells.cell(index) {
                let shown = self.config.mask.unwrap_or(c);
                let paragraph = Paragraph::new(Span::styled(shown.to_string(), style.text))
                    .alignment(Alignment::Center);
                frame.render_widget(paragraph, text_row);
            }
            if self.focus && self.cell_focus == Some(index) {
                let x = text_row.x + text_row.width.saturating_sub(1) / 2;
                frame.set_cursor_position((x, text_row.y));
            }
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
