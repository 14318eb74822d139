use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::ui::helpers::centered_rect;
use crate::ui::theme::Theme;
use crate::workspace::assets::CreateAction;

pub(super) fn render_help(frame: &mut Frame, scroll: usize) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let entries: [(&str, &str); 19] = [
        ("1-7", "jump to a sidebar route"),
        ("j / k", "move selection"),
        ("d", "set the current route as startup default"),
        ("q", "quit"),
        ("?", "toggle this help"),
        ("", ""),
        ("Drive: s", "toggle health/name sort"),
        ("Apps: enter", "open the selected app"),
        ("Apps: esc", "back to the launcher"),
        ("", ""),
        ("Chat: t", "cycle messages/pins/threads"),
        ("Chat: p", "pin or unpin the selected message"),
        ("Chat: o", "open the selected message's thread"),
        ("Chat: m / r", "compose a message / thread reply"),
        ("Chat: [ ]", "previous / next channel"),
        ("", ""),
        ("Data: v", "toggle simple/signals view"),
        ("Data: space", "play or stop the selected audio"),
        ("Data: n / c", "quick-create / comment on an image"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, action) in entries.iter().skip(scroll) {
        if key.is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("   {:<14}", key), Theme::key()),
            Span::styled(*action, Theme::text_muted()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("   Config: {}", Config::config_location()),
        Theme::text_dim(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .title(Span::styled(" Help ", Theme::title()));
    let help = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::GREY_800));
    frame.render_widget(help, area);
}

/// The data browser's quick-create menu.
pub(super) fn render_quick_create(frame: &mut Frame, selected: usize) {
    let outer = frame.area();
    let width = 26u16.min(outer.width);
    let height = (CreateAction::ALL.len() as u16 + 3).min(outer.height);
    let area = Rect {
        x: (outer.width.saturating_sub(width)) / 2,
        y: (outer.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (index, action) in CreateAction::ALL.iter().enumerate() {
        let marker = if index == selected {
            format!("  {} ", Theme::ARROW_RIGHT)
        } else {
            "    ".to_string()
        };
        let style = if index == selected {
            Theme::selected()
        } else {
            Theme::text_muted()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Theme::GREY_300)),
            Span::styled(action.label(), style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .title(Span::styled(" Create ", Theme::title()));
    let menu = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::GREY_800));
    frame.render_widget(menu, area);
}
