//! Visual variants for confirmation-code cells.
//!
//! Resolution is a pure function of the variant, whether the cell is active,
//! the configured [`CellPalette`], and the row's [`InputPosition`].

use ratatui::layout::Flex;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};

/// Horizontal alignment of the row of cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPosition {
    /// Pack cells against the left edge.
    Left,
    /// Centre the cells.
    #[default]
    Center,
    /// Pack cells against the right edge.
    Right,
    /// Spread cells across the full width.
    FullWidth,
}

impl InputPosition {
    /// Parse `left`, `center`, `right` or `full-width`. Anything else spreads
    /// the cells across the full width.
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => InputPosition::Left,
            "center" => InputPosition::Center,
            "right" => InputPosition::Right,
            _ => InputPosition::FullWidth,
        }
    }

    /// Layout flex mode for this alignment.
    pub fn flex(self) -> Flex {
        match self {
            InputPosition::Left => Flex::Start,
            InputPosition::Center => Flex::Center,
            InputPosition::Right => Flex::End,
            InputPosition::FullWidth => Flex::SpaceBetween,
        }
    }

    /// Left and right margin around each cell for the given spacing.
    pub fn margins(self, space: u16) -> (u16, u16) {
        match self {
            InputPosition::Left => (0, space),
            InputPosition::Center => (space / 2, space / 2),
            InputPosition::Right => (space, 0),
            InputPosition::FullWidth => (0, 0),
        }
    }
}

/// Colors and border thickness shared by every cell of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPalette {
    /// Text color, and border color of the active cell.
    pub active: Color,
    /// Border color of inactive cells.
    pub inactive: Color,
    /// 0 draws no border, 1 a plain line, anything thicker a heavy line.
    pub border_width: u16,
    /// Spacing between cells.
    pub space: u16,
}

impl Default for CellPalette {
    fn default() -> Self {
        Self {
            active: Color::White,
            inactive: Color::DarkGray,
            border_width: 1,
            space: 2,
        }
    }
}

/// A fully resolved cell appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    /// Which sides carry a border.
    pub borders: Borders,
    /// Line set used for the border.
    pub border_type: BorderType,
    /// Style of the border lines.
    pub border: Style,
    /// Style of the cell's character.
    pub text: Style,
    /// Columns left blank before the cell.
    pub margin_left: u16,
    /// Columns left blank after the cell.
    pub margin_right: u16,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            borders: Borders::NONE,
            border_type: BorderType::Plain,
            border: Style::default(),
            text: Style::default(),
            margin_left: 0,
            margin_right: 0,
        }
    }
}

impl CellStyle {
    /// The block that draws this cell's border.
    pub fn block(&self) -> Block<'static> {
        Block::new()
            .borders(self.borders)
            .border_type(self.border_type)
            .border_style(self.border)
    }
}

/// How cells are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellVariant {
    /// Full border (`border-box`).
    #[default]
    BorderBox,
    /// Full border with rounded corners (`border-circle`).
    BorderCircle,
    /// Underline only (`border-b`).
    BorderBottom,
    /// Top and bottom lines (`border-b-t`).
    BorderBottomTop,
    /// Left and right lines (`border-l-r`).
    BorderLeftRight,
    /// No border (`clear`).
    Clear,
    /// Used verbatim for every cell, active or not.
    Custom(CellStyle),
}

impl CellVariant {
    /// Look up a variant by name.
    ///
    /// Unknown names become an empty [`CellVariant::Custom`] style.
    pub fn from_name(name: &str) -> Self {
        match name {
            "border-box" => CellVariant::BorderBox,
            "border-circle" => CellVariant::BorderCircle,
            "border-b" => CellVariant::BorderBottom,
            "border-b-t" => CellVariant::BorderBottomTop,
            "border-l-r" => CellVariant::BorderLeftRight,
            "clear" => CellVariant::Clear,
            _ => CellVariant::Custom(CellStyle::default()),
        }
    }

    /// Resolve the appearance of one cell.
    pub fn resolve(&self, active: bool, palette: &CellPalette, position: InputPosition) -> CellStyle {
        let borders = match self {
            CellVariant::Custom(style) => return *style,
            CellVariant::Clear => Borders::NONE,
            CellVariant::BorderBox | CellVariant::BorderCircle => Borders::ALL,
            CellVariant::BorderBottom => Borders::BOTTOM,
            CellVariant::BorderBottomTop => Borders::TOP | Borders::BOTTOM,
            CellVariant::BorderLeftRight => Borders::LEFT | Borders::RIGHT,
        };
        let borders = if palette.border_width == 0 {
            Borders::NONE
        } else {
            borders
        };
        let border_type = match (self, palette.border_width) {
            (CellVariant::BorderCircle, _) => BorderType::Rounded,
            (_, 0 | 1) => BorderType::Plain,
            _ => BorderType::Thick,
        };
        let border_color = if active {
            palette.active
        } else {
            palette.inactive
        };
        let (margin_left, margin_right) = position.margins(palette.space);

        CellStyle {
            borders,
            border_type,
            border: Style::default().fg(border_color),
            text: Style::default().fg(palette.active),
            margin_left,
            margin_right,
        }
    }
}

impl From<CellStyle> for CellVariant {
    fn from(style: CellStyle) -> Self {
        CellVariant::Custom(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> CellPalette {
        CellPalette {
            active: Color::Green,
            inactive: Color::Gray,
            border_width: 1,
            space: 4,
        }
    }

    #[test]
    fn names_map_to_variants() {
        assert_eq!(CellVariant::from_name("border-box"), CellVariant::BorderBox);
        assert_eq!(
            CellVariant::from_name("border-circle"),
            CellVariant::BorderCircle
        );
        assert_eq!(CellVariant::from_name("border-b"), CellVariant::BorderBottom);
        assert_eq!(
            CellVariant::from_name("border-b-t"),
            CellVariant::BorderBottomTop
        );
        assert_eq!(
            CellVariant::from_name("border-l-r"),
            CellVariant::BorderLeftRight
        );
        assert_eq!(CellVariant::from_name("clear"), CellVariant::Clear);
    }

    #[test]
    fn unknown_name_passes_through() {
        assert_eq!(
            CellVariant::from_name("dotted"),
            CellVariant::Custom(CellStyle::default())
        );
    }

    #[test]
    fn border_color_follows_active() {
        let p = palette();
        let active = CellVariant::BorderBox.resolve(true, &p, InputPosition::Center);
        let inactive = CellVariant::BorderBox.resolve(false, &p, InputPosition::Center);
        assert_eq!(active.border.fg, Some(Color::Green));
        assert_eq!(inactive.border.fg, Some(Color::Gray));
        assert_eq!(inactive.text.fg, Some(Color::Green));
    }

    #[test]
    fn variant_borders() {
        let p = palette();
        let pos = InputPosition::Center;
        assert_eq!(CellVariant::BorderBottom.resolve(true, &p, pos).borders, Borders::BOTTOM);
        assert_eq!(
            CellVariant::BorderBottomTop.resolve(true, &p, pos).borders,
            Borders::TOP | Borders::BOTTOM
        );
        assert_eq!(
            CellVariant::BorderLeftRight.resolve(true, &p, pos).borders,
            Borders::LEFT | Borders::RIGHT
        );
        assert_eq!(CellVariant::Clear.resolve(true, &p, pos).borders, Borders::NONE);
        assert_eq!(
            CellVariant::BorderCircle.resolve(true, &p, pos).border_type,
            BorderType::Rounded
        );
    }

    #[test]
    fn border_width_selects_line_weight() {
        let mut p = palette();
        p.border_width = 0;
        assert_eq!(
            CellVariant::BorderBox.resolve(true, &p, InputPosition::Left).borders,
            Borders::NONE
        );
        p.border_width = 2;
        assert_eq!(
            CellVariant::BorderBox.resolve(true, &p, InputPosition::Left).border_type,
            BorderType::Thick
        );
    }

    #[test]
    fn margins_follow_position() {
        let p = palette();
        let style = |pos| CellVariant::BorderBox.resolve(false, &p, pos);
        let left = style(InputPosition::Left);
        assert_eq!((left.margin_left, left.margin_right), (0, 4));
        let center = style(InputPosition::Center);
        assert_eq!((center.margin_left, center.margin_right), (2, 2));
        let right = style(InputPosition::Right);
        assert_eq!((right.margin_left, right.margin_right), (4, 0));
        let full = style(InputPosition::FullWidth);
        assert_eq!((full.margin_left, full.margin_right), (0, 0));
    }

    #[test]
    fn custom_style_is_verbatim() {
        let custom = CellStyle {
            borders: Borders::TOP,
            text: Style::default().fg(Color::Red),
            ..CellStyle::default()
        };
        let variant = CellVariant::from(custom);
        let p = palette();
        assert_eq!(variant.resolve(true, &p, InputPosition::Right), custom);
        assert_eq!(variant.resolve(false, &p, InputPosition::Left), custom);
    }

    #[test]
    fn unknown_position_is_full_width() {
        assert_eq!(InputPosition::from_name("middle"), InputPosition::FullWidth);
        assert_eq!(InputPosition::from_name("left").flex(), Flex::Start);
    }
}
