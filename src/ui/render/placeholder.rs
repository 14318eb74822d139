use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::Route;

/// Routes the prototype does not flesh out get a quiet placeholder.
pub(super) fn render_placeholder(frame: &mut Frame, area: Rect, route: Route) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} view coming soon.", route.label()),
            Theme::text_dim(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", route.label()), Theme::title()));
    let panel = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(panel, area);
}
