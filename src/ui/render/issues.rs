use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::helpers::fit_cell;
use crate::ui::theme::Theme;
use crate::ui::App;
use crate::workspace::issues::{Issue, Priority};

pub(super) fn render_issues(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    render_filter_chips(frame, layout[0], app);
    render_sections(frame, layout[1], app);
}

/// Static header chips; rendered but inert, as in the prototype.
fn render_filter_chips(frame: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled("  ", Style::default()),
        Span::styled("[Colabino]", Style::default().fg(Theme::AMBER)),
        Span::styled(
            format!(" [All issues {}]", app.issues.issues.len()),
            Theme::text_muted(),
        ),
        Span::styled(" [Active]", Theme::text_muted()),
        Span::styled(" [Backlog]", Theme::text_dim()),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_sections(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    let mut row = 0usize;

    for (section, issues) in app.issues.grouped() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", section.glyph()),
                Style::default().fg(Theme::GREY_300),
            ),
            Span::styled(section.label(), Theme::bold()),
            Span::styled(format!("  {}", issues.len()), Theme::text_dim()),
        ]));

        for issue in issues {
            lines.push(issue_row(issue, row == app.issues.selected));
            row += 1;
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Issues ", Theme::title()));
    let panel = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(panel, area);
}

fn issue_row(issue: &Issue, selected: bool) -> Line<'static> {
    let marker = if selected {
        format!(" {}", Theme::ARROW_RIGHT)
    } else {
        "  ".to_string()
    };
    let title_style = if selected { Theme::selected() } else { Theme::text() };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Theme::GREY_300)),
        Span::styled(
            fit_cell(issue.priority.label(), 8),
            Theme::priority_style(issue.priority == Priority::Urgent),
        ),
        Span::styled(fit_cell(&issue.id, 9), Theme::text_dim()),
        Span::styled(fit_cell(&issue.title, 44), title_style),
    ];

    for tag in &issue.tags {
        spans.push(Span::styled(
            format!("{} ", Theme::BULLET_FILLED),
            Style::default().fg(tag.tone.color()),
        ));
        spans.push(Span::styled(format!("{}  ", tag.label), Theme::text_muted()));
    }

    spans.push(Span::styled(format!("{}  ", issue.project), Theme::text_muted()));
    spans.push(Span::styled(format!("({})  ", issue.assignee), Theme::text_dim()));
    spans.push(Span::styled(issue.created_at.clone(), Theme::text_dim()));

    Line::from(spans)
}
