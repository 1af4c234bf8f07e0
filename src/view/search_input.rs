//! Search input widget for rendering the query box.

use crate::view::constants::INPUT_PLACEHOLDER;
use crate::view::styles::PickerStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Search input widget.
///
/// Renders the literal query, or a dimmed placeholder when the query is
/// empty and the box is unfocused. The terminal cursor is placed by the
/// layout using [`SearchInput::cursor_offset`].
pub struct SearchInput<'a> {
    query: &'a str,
    focused: bool,
    styles: &'a PickerStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(query: &'a str, focused: bool, styles: &'a PickerStyles) -> Self {
        Self {
            query,
            focused,
            styles,
        }
    }

    /// Horizontal offset of the cursor cell inside the box, in columns.
    pub fn cursor_offset(&self) -> u16 {
        u16::try_from(self.query.width()).unwrap_or(u16::MAX)
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.query.is_empty() && !self.focused {
            Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().add_modifier(Modifier::DIM),
            )
        } else {
            Span::raw(self.query)
        };

        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.unfocused_border
        };

        Paragraph::new(Line::from(text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search")
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
