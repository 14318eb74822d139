use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::{App, Route};

pub(super) fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "   COLABINO",
            Style::default()
                .fg(Theme::WHITE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}  ", Theme::DOT_SEPARATOR),
            Style::default().fg(Theme::GREY_500),
        ),
        Span::styled(app.route.label(), Style::default().fg(Theme::GREY_200)),
    ];

    // Breadcrumb into the open app, and into the image detail panel.
    if app.route == Route::Apps {
        if let Some(open) = app.active_app {
            spans.push(Span::styled(" / ", Style::default().fg(Theme::GREY_500)));
            spans.push(Span::styled(open.label(), Style::default().fg(Theme::GREY_100)));

            if let Some(image) = app.assets.selected_image() {
                spans.push(Span::styled(" / ", Style::default().fg(Theme::GREY_500)));
                spans.push(Span::styled(
                    image.name.clone(),
                    Style::default().fg(Theme::GREY_50),
                ));
            }
        }
    }

    let lines = vec![Line::from(""), Line::from(spans)];
    let header = Paragraph::new(lines).style(Style::default().bg(Theme::BG));
    frame.render_widget(header, area);
}
