use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::{App, Route};

pub(super) fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for (index, route) in Route::ALL.iter().enumerate() {
        let active = *route == app.route;
        let marker = if active {
            format!(" {} ", Theme::ARROW_RIGHT)
        } else {
            "   ".to_string()
        };
        let style = if active {
            Theme::selected()
        } else {
            Theme::text_muted()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Theme::GREY_300)),
            Span::styled(format!("{} ", index + 1), Theme::text_dim()),
            Span::styled(route.label(), style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Theme::border());
    let sidebar = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(sidebar, area);
}
