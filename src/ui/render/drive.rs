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
use crate::workspace::drive::{DriveItem, DriveSummary};

pub(super) fn render_drive(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    render_stat_cards(frame, layout[0], app.drive.summary());
    render_table(frame, layout[1], app);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, summary: DriveSummary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let entries = [
        ("Live sessions", summary.live_files, Theme::SKY),
        ("Needs attention", summary.needs_attention, Theme::AMBER),
        ("Access issues", summary.restricted, Theme::RED),
        ("Healthy flow", summary.healthy, Theme::EMERALD),
    ];

    for (slot, (label, count, accent)) in cards.iter().zip(entries) {
        let lines = vec![
            Line::from(Span::styled(format!(" {}", label), Theme::text_muted())),
            Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(count.to_string(), Style::default().fg(accent)),
                Span::styled(" items", Theme::text_dim()),
            ]),
        ];
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );
        frame.render_widget(card, *slot);
    }
}

// Column widths for the signals table.
const W_NAME: usize = 28;
const W_TEAM: usize = 14;
const W_HEALTH: usize = 8;
const W_ACTIVITY: usize = 18;
const W_PEOPLE: usize = 7;
const W_PERM: usize = 11;

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(vec![
        Span::styled("   ", Style::default()),
        Span::styled(fit_cell("Name", W_NAME), Theme::bold()),
        Span::styled(fit_cell("Team", W_TEAM), Theme::bold()),
        Span::styled(fit_cell("Health", W_HEALTH), Theme::bold()),
        Span::styled(fit_cell("Activity", W_ACTIVITY), Theme::bold()),
        Span::styled(fit_cell("People", W_PEOPLE), Theme::bold()),
        Span::styled(fit_cell("Perm", W_PERM), Theme::bold()),
        Span::styled("Signals / Attention", Theme::bold()),
    ])];

    for (index, item) in app.drive.items.iter().enumerate() {
        lines.push(item_row(item, index == app.drive.selected));
    }

    let title = format!(
        " My Drive {} sorted by {} ",
        Theme::DOT_SEPARATOR,
        app.drive.sort.label()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));
    let table = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(table, area);
}

fn item_row(item: &DriveItem, selected: bool) -> Line<'static> {
    let marker = if selected {
        format!(" {}", Theme::ARROW_RIGHT)
    } else {
        "  ".to_string()
    };
    let name_style = if selected { Theme::selected() } else { Theme::text() };

    let name = format!("{} {}", item.kind.glyph(), item.name);
    let signals = if item.metrics.is_some() {
        item.signals_label()
    } else {
        item.attention_label().to_string()
    };
    let trailing = format!(
        "{} {} {}",
        signals,
        Theme::DOT_SEPARATOR,
        item.next_action
    );

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Theme::GREY_300)),
        Span::styled(" ", Style::default()),
        Span::styled(fit_cell(&name, W_NAME), name_style),
        Span::styled(fit_cell(&item.owner_team, W_TEAM), Theme::text_muted()),
        Span::styled(
            fit_cell(item.health.label(), W_HEALTH),
            Style::default().fg(Theme::health_color(item.health)),
        ),
        Span::styled(fit_cell(&item.activity_label(), W_ACTIVITY), Theme::text_muted()),
        Span::styled(
            fit_cell(&format!("{} ppl", item.contributors), W_PEOPLE),
            Theme::text_muted(),
        ),
        Span::styled(
            fit_cell(item.permission.label(), W_PERM),
            Style::default().fg(Theme::permission_color(item.permission)),
        ),
        Span::styled(trailing, Theme::text_dim()),
    ])
}
