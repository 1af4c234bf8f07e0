//! Dropdown and no-matches widgets.

use crate::model::Record;
use crate::view::constants::NO_MATCHES_TEXT;
use crate::view::styles::PickerStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Dropdown listing the visible set, one name per row.
///
/// Rows beyond the area height are scrolled so the highlighted row stays
/// on screen.
pub struct SuggestionList<'a> {
    rows: &'a [&'a Record],
    highlighted: Option<usize>,
    styles: &'a PickerStyles,
}

impl<'a> SuggestionList<'a> {
    /// Create a dropdown for `rows` with an optional highlighted index.
    pub fn new(rows: &'a [&'a Record], highlighted: Option<usize>, styles: &'a PickerStyles) -> Self {
        Self {
            rows,
            highlighted,
            styles,
        }
    }
}

/// First row to draw so that `highlighted` is within `height` rows.
fn scroll_offset(highlighted: Option<usize>, height: usize) -> usize {
    match highlighted {
        Some(h) if height > 0 && h >= height => h + 1 - height,
        _ => 0,
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = usize::from(inner.height);
        let offset = scroll_offset(self.highlighted, height);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, record)| {
                let style = if Some(index) == self.highlighted {
                    self.styles.highlighted
                } else {
                    self.styles.suggestion
                };
                Line::styled(record.name().as_str(), style)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Explicit "no matches" notice shown instead of an empty dropdown.
pub struct NoMatchesNotice<'a> {
    styles: &'a PickerStyles,
}

impl<'a> NoMatchesNotice<'a> {
    /// Create the notice.
    pub fn new(styles: &'a PickerStyles) -> Self {
        Self { styles }
    }
}

impl Widget for NoMatchesNotice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(NO_MATCHES_TEXT, self.styles.no_matches))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_offset_is_zero_when_highlight_fits() {
        assert_eq!(scroll_offset(Some(3), 5), 0);
        assert_eq!(scroll_offset(None, 5), 0);
    }

    #[test]
    fn scroll_offset_keeps_highlight_on_last_row() {
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(9), 5), 5);
    }

    #[test]
    fn scroll_offset_handles_zero_height() {
        assert_eq!(scroll_offset(Some(4), 0), 0);
    }
}
