use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;
use crate::ui::{App, InputMode, Route, WorkspaceApp};

pub(super) fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled("  ", Style::default())];

    if app.input_mode == InputMode::Compose {
        push_hint(&mut spans, "enter", "send");
        push_hint(&mut spans, "alt+enter", "newline");
        push_hint(&mut spans, "esc", "cancel");
    } else {
        for (key, action) in context_hints(app) {
            push_hint(&mut spans, key, action);
        }
        push_hint(&mut spans, "1-7", "go to");
        push_hint(&mut spans, "?", "help");
        push_hint(&mut spans, "q", "quit");
    }

    let lines = vec![Line::from(""), Line::from(spans)];
    let footer = Paragraph::new(lines).style(Style::default().bg(Theme::BG));
    frame.render_widget(footer, area);
}

fn push_hint(spans: &mut Vec<Span<'static>>, key: &'static str, action: &'static str) {
    spans.push(Span::styled(format!("{} ", key), Theme::key()));
    spans.push(Span::styled(format!("{}   ", action), Theme::text_dim()));
}

fn context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.route {
        Route::Drive => vec![("j/k", "move"), ("s", "sort")],
        Route::Apps => match app.active_app {
            None => vec![("j/k", "move"), ("enter", "open")],
            Some(WorkspaceApp::Chat) => {
                let mut hints = vec![
                    ("j/k", "move"),
                    ("t", "tab"),
                    ("p", "pin"),
                    ("m", "message"),
                ];
                if app.chat.in_thread_view() {
                    hints.push(("r", "reply"));
                    hints.push(("esc", "leave thread"));
                } else {
                    hints.push(("o", "thread"));
                    hints.push(("[/]", "channel"));
                    hints.push(("esc", "back"));
                }
                hints
            }
            Some(WorkspaceApp::Data) => {
                if app.assets.in_detail_view() {
                    vec![("c", "comment"), ("esc", "close")]
                } else {
                    vec![
                        ("j/k", "move"),
                        ("v", "view"),
                        ("space", "play"),
                        ("n", "create"),
                        ("enter", "open"),
                        ("esc", "back"),
                    ]
                }
            }
            Some(WorkspaceApp::Projects) => vec![("j/k", "move"), ("esc", "back")],
        },
        _ => vec![],
    }
}
