use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Label used for books whose genre was left blank.
const NO_GENRE_LABEL: &str = "(none)";

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Colored `Read` / `Unread` badge for book cards.
pub(crate) fn read_badge(read: bool) -> Span<'static> {
    let (text, background) = if read {
        (" Read ", Color::Green)
    } else {
        (" Unread ", Color::LightRed)
    };
    Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .bg(background)
            .add_modifier(Modifier::BOLD),
    )
}

/// `1980` -> `1980s`.
pub(crate) fn decade_label(decade: i32) -> String {
    format!("{decade}s")
}

pub(crate) fn genre_label(genre: &str) -> &str {
    let trimmed = genre.trim();
    if trimmed.is_empty() {
        NO_GENRE_LABEL
    } else {
        trimmed
    }
}

/// Cut `text` to at most `max` characters, marking the cut with `~`.
pub(crate) fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('~');
    cut
}
