//! Framing for code inputs: titled panels and a modal alert box.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

/// A titled panel whose border lights up while its content holds focus.
///
/// `accent` colors the title and, when focused, the border.
pub fn section_block(title: &str, accent: Color, focused: bool) -> Block<'_> {
    let border = if focused { accent } else { Color::DarkGray };
    Block::new()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Draw a modal alert over `area`: title, message and an `[ OK ]` button.
pub fn render_alert(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let width = (message.chars().count().max(title.chars().count()) as u16).saturating_add(8);
    let rect = centered_fixed(width.max(20), 6, area);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(title)
        .title_alignment(Alignment::Center);
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    let body = Paragraph::new(vec![
        Line::from(message.to_owned()),
        Line::default(),
        Line::styled("[ OK ]", Style::default().add_modifier(Modifier::REVERSED)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, inner);
}
