use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::{App, ComposeTarget, InputMode};
use crate::workspace::chat::markup::{parse_body, BodyLine};
use crate::workspace::chat::{ChatMessage, ChatRoom, ChatTab};

pub(super) fn render_chat(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .split(area);

    render_roster(frame, layout[0], &app.chat);

    if app.chat.in_thread_view() {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(24), Constraint::Length(44)])
            .split(layout[1]);
        render_messages(frame, main[0], app);
        render_thread(frame, main[1], app);
    } else {
        render_messages(frame, layout[1], app);
    }
}

/// Channel list and people roster with presence dots.
fn render_roster(frame: &mut Frame, area: Rect, chat: &ChatRoom) {
    let mut lines = vec![Line::from(Span::styled(" Channels", Theme::title()))];

    for (index, channel) in chat.channels.iter().enumerate() {
        let active = index == chat.active_channel;
        let style = if active { Theme::selected() } else { Theme::text_muted() };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", channel.marker()), Theme::text_dim()),
            Span::styled(channel.name.clone(), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" People", Theme::title())));
    for person in &chat.people {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", Theme::BULLET_FILLED),
                Style::default().fg(Theme::presence_color(person.presence)),
            ),
            Span::styled(person.name.clone(), Theme::text_muted()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Theme::border());
    let roster = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(roster, area);
}

fn render_messages(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    render_tabs(frame, layout[0], &app.chat);

    let chat = &app.chat;
    let mut lines = Vec::new();
    let visible = chat.visible_messages();
    if visible.is_empty() {
        let empty = match chat.active_tab {
            ChatTab::Pins => "No pinned messages.",
            ChatTab::Threads => "No threads yet.",
            ChatTab::Messages => "No messages yet.",
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", empty), Theme::text_dim())));
    }
    for (index, message) in visible.iter().enumerate() {
        message_lines(&mut lines, message, index == chat.selected, chat.reply_count(&message.id));
    }

    let channel = chat
        .active_channel()
        .map(|c| format!(" {}{} ", c.marker(), c.name))
        .unwrap_or_else(|| " chat ".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(channel, Theme::title()));
    let panel = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(panel, layout[1]);

    let composing =
        app.input_mode == InputMode::Compose && app.compose_target == ComposeTarget::ChannelMessage;
    render_compose(frame, layout[2], "Message", &chat.draft, composing);
}

fn render_tabs(frame: &mut Frame, area: Rect, chat: &ChatRoom) {
    let mut spans = vec![Span::styled("  ", Style::default())];
    for tab in ChatTab::ALL {
        let style = if tab == chat.active_tab {
            Theme::selected()
        } else {
            Theme::text_dim()
        };
        spans.push(Span::styled(tab.label(), style));
        spans.push(Span::styled("   ", Style::default()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Push the header line and markup-parsed body lines for one message.
fn message_lines(lines: &mut Vec<Line<'static>>, message: &ChatMessage, selected: bool, replies: usize) {
    let marker = if selected {
        format!(" {}", Theme::ARROW_RIGHT)
    } else {
        "  ".to_string()
    };
    let author_style = if message.own { Theme::bold() } else { Theme::text() };

    let mut header = vec![
        Span::styled(marker, Style::default().fg(Theme::GREY_300)),
        Span::styled(format!(" {} ", message.author), author_style),
        Span::styled(message.time_label.clone(), Theme::text_dim()),
    ];
    if message.pinned {
        header.push(Span::styled(
            format!(" {} pinned", Theme::DIAMOND_FILLED),
            Style::default().fg(Theme::AMBER),
        ));
    }
    if replies > 0 {
        header.push(Span::styled(
            format!(" ({} replies)", replies),
            Style::default().fg(Theme::SKY),
        ));
    }
    lines.push(Line::from(header));

    for body_line in parse_body(&message.body) {
        lines.push(match body_line {
            BodyLine::Text(text) => Line::from(Span::styled(format!("    {}", text), Theme::text())),
            BodyLine::Bullet(text) => Line::from(vec![
                Span::styled(format!("      {} ", Theme::BULLET_FILLED), Theme::text_dim()),
                Span::styled(text, Theme::text()),
            ]),
            BodyLine::Ordered(number, text) => Line::from(vec![
                Span::styled(format!("      {}. ", number), Theme::text_dim()),
                Span::styled(text, Theme::text()),
            ]),
            BodyLine::Blank => Line::from(""),
        });
    }
    lines.push(Line::from(""));
}

fn render_thread(frame: &mut Frame, area: Rect, app: &App) {
    let chat = &app.chat;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    match chat.thread_parent() {
        Some(parent) => {
            message_lines(&mut lines, parent, false, chat.reply_count(&parent.id));
            let replies = chat.thread_replies_for(&parent.id);
            lines.push(Line::from(Span::styled(
                format!("  {} replies", replies.len()),
                Theme::text_dim(),
            )));
            lines.push(Line::from(""));
            for reply in replies {
                message_lines(&mut lines, reply, false, 0);
            }
        }
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Thread message not found.",
                Theme::text_dim(),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .title(Span::styled(" Thread ", Theme::title()));
    let panel = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(panel, layout[0]);

    let composing =
        app.input_mode == InputMode::Compose && app.compose_target == ComposeTarget::ThreadReply;
    render_compose(frame, layout[1], "Reply", &chat.thread_draft, composing);
}

/// Single-line compose box with a cursor mark while editing.
pub(super) fn render_compose(frame: &mut Frame, area: Rect, label: &str, draft: &str, active: bool) {
    let border = if active { Theme::border_active() } else { Theme::border() };
    let content = if draft.is_empty() && !active {
        Span::styled(format!("{}...", label), Theme::text_dim())
    } else {
        // Newlines from alt+enter collapse to a visible mark in the box.
        Span::styled(draft.replace('\n', " ⏎ "), Theme::text())
    };
    let mut spans = vec![Span::styled(" ", Style::default()), content];
    if active {
        spans.push(Span::styled("▏", Style::default().fg(Theme::GREY_100)));
    }

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let compose = Paragraph::new(Line::from(spans))
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(compose, area);
}
