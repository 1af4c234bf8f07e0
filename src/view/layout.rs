//! Picker screen layout.
//!
//! Pure layout logic: header with the selection label, the input box,
//! the dropdown or no-matches notice, and the status bar.

use crate::state::PickerState;
use crate::view::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::search_input::SearchInput;
use crate::view::styles::PickerStyles;
use crate::view::suggestions::{NoMatchesNotice, SuggestionList};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Height of the no-matches notice (border + text).
const NOTICE_HEIGHT: u16 = 3;

/// Key hints shown in the status bar.
const KEY_HINTS: &str = "Tab: focus | ↑/↓: move | Enter: pick | Esc: blur/quit";

/// Render the whole picker screen.
///
/// `last_reported` is the label of the most recent selection notification
/// the shell received.
pub fn render_layout(
    frame: &mut Frame,
    picker: &PickerState,
    last_reported: &str,
    styles: &PickerStyles,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let engine = picker.engine();

    frame.render_widget(
        Paragraph::new(Line::styled(engine.selection_label(), styles.header)),
        chunks[0],
    );

    render_input(frame, chunks[1], picker, styles);
    render_body(frame, chunks[2], picker, styles);
    render_status_bar(frame, chunks[3], last_reported);
}

fn render_input(frame: &mut Frame, area: Rect, picker: &PickerState, styles: &PickerStyles) {
    let engine = picker.engine();
    let input = SearchInput::new(engine.query(), engine.is_focused(), styles);
    let offset = input.cursor_offset();
    frame.render_widget(input, area);

    if engine.is_focused() && area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_body(frame: &mut Frame, area: Rect, picker: &PickerState, styles: &PickerStyles) {
    let engine = picker.engine();

    if engine.panel_visible() {
        let rows = engine.visible_set();
        frame.render_widget(SuggestionList::new(&rows, picker.highlighted(), styles), area);
    } else if engine.no_matches_indicator_visible() {
        let notice_area = Rect {
            height: area.height.min(NOTICE_HEIGHT),
            ..area
        };
        frame.render_widget(NoMatchesNotice::new(styles), notice_area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, last_reported: &str) {
    let status_text = format!("Reported: {} | {}", last_reported, KEY_HINTS);
    let paragraph = Paragraph::new(Line::from(status_text)).style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
