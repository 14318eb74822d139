//! UI helper functions and utilities

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::util::truncate;

/// Create a centered rect using up certain percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fit a cell value into a fixed display-width column: truncate when too
/// wide, pad with spaces when too narrow. Width-aware, so CJK and other
/// wide glyphs line up.
pub fn fit_cell(text: &str, width: usize) -> String {
    let mut cell = truncate(text, width);
    while cell.width() > width {
        cell.pop();
    }
    let pad = width.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(pad));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_pads_short_values() {
        assert_eq!(fit_cell("abc", 6), "abc   ");
    }

    #[test]
    fn test_fit_cell_truncates_long_values() {
        let cell = fit_cell("a very long cell value", 10);
        assert_eq!(cell.width(), 10);
        assert!(cell.ends_with("..."));
    }

    #[test]
    fn test_fit_cell_handles_wide_glyphs() {
        let cell = fit_cell("こんにちは", 6);
        assert!(cell.width() <= 6);
    }

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, parent);
        assert!(inner.x >= parent.x && inner.y >= parent.y);
        assert!(inner.right() <= parent.right() && inner.bottom() <= parent.bottom());
    }
}
