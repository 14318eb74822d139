use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::{App, WorkspaceApp};

/// The Apps route with no open app: a selectable launcher.
pub(super) fn render_launcher(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Workspace apps", Theme::title())),
        Line::from(""),
    ];

    for (index, entry) in WorkspaceApp::ALL.iter().enumerate() {
        let selected = index == app.launcher_selected;
        let marker = if selected {
            format!("  {} ", Theme::ARROW_RIGHT)
        } else {
            "    ".to_string()
        };
        let name_style = if selected { Theme::selected() } else { Theme::text() };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Theme::GREY_300)),
            Span::styled(format!("{:<10}", entry.label()), name_style),
            Span::styled(entry.blurb(), Theme::text_muted()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter opens the selected app.",
        Theme::text_dim(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Apps ", Theme::title()));
    let panel = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(panel, area);
}
