use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::chat::render_compose;
use crate::ui::theme::{bar_gauge, Theme};
use crate::ui::{App, ComposeTarget, InputMode};
use crate::workspace::assets::{AssetBrowser, AssetItem, AssetViewMode};
use crate::workspace::item::ItemKind;

pub(super) fn render_assets(frame: &mut Frame, area: Rect, app: &App) {
    if app.assets.in_detail_view() {
        render_detail(frame, area, app);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    render_view_toggle(frame, layout[0], &app.assets);

    match app.assets.view {
        AssetViewMode::Simple => render_items(frame, layout[1], &app.assets),
        AssetViewMode::Signals => render_signals_placeholder(frame, layout[1]),
    }
}

fn render_view_toggle(frame: &mut Frame, area: Rect, assets: &AssetBrowser) {
    let mut spans = vec![Span::styled("  Data   ", Theme::title())];
    for mode in [AssetViewMode::Simple, AssetViewMode::Signals] {
        let style = if mode == assets.view {
            Theme::selected()
        } else {
            Theme::text_dim()
        };
        spans.push(Span::styled(mode.label(), style));
        spans.push(Span::styled("  ", Style::default()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_items(frame: &mut Frame, area: Rect, assets: &AssetBrowser) {
    let mut lines = vec![Line::from("")];

    for (index, item) in assets.ordered_items().iter().enumerate() {
        lines.push(item_line(assets, item, index == assets.selected));
        if let Some(progress) = assets.progress_for(&item.id) {
            lines.push(Line::from(vec![
                Span::styled("      ", Style::default()),
                Span::styled(
                    bar_gauge(progress as u8, 24),
                    Style::default().fg(Theme::GREY_200),
                ),
                Span::styled(format!(" {:>3.0}%", progress), Theme::text_dim()),
            ]));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Items ", Theme::title()));
    let panel = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(panel, area);
}

fn item_line(assets: &AssetBrowser, item: &AssetItem, selected: bool) -> Line<'static> {
    let marker = if selected {
        format!(" {}", Theme::ARROW_RIGHT)
    } else {
        "  ".to_string()
    };

    let ribbon = match item.ribbon {
        Some(ribbon) => Span::styled("▎", Style::default().fg(ribbon.color())),
        None => Span::styled(" ", Style::default()),
    };

    let name_style = if assets.is_highlighted(&item.id) {
        Style::default().fg(Theme::GREY_900).bg(Theme::GREY_100)
    } else if selected {
        Theme::selected()
    } else {
        Theme::text()
    };

    let playing = assets.progress_for(&item.id).is_some();
    let trailing = if item.kind == ItemKind::Audio {
        if playing {
            "  [stop]"
        } else {
            "  [play]"
        }
    } else {
        ""
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Theme::GREY_300)),
        ribbon,
        Span::styled(format!("{} ", item.kind.glyph()), Theme::text_muted()),
        Span::styled(format!("{:<30}", item.name.clone()), name_style),
        Span::styled(item.secondary_label(), Theme::text_dim()),
        Span::styled(trailing, Theme::text_dim()),
    ])
}

fn render_signals_placeholder(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("  Signals view coming soon.", Theme::text_dim())),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Theme::BG)),
        area,
    );
}

/// Image detail: preview and version history on the left, comments on
/// the right.
fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let assets = &app.assets;
    let Some(image) = assets.selected_image() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(42)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(layout[0]);

    render_preview(frame, left[0], image);
    render_meta_chips(frame, left[1], assets, image);
    render_versions(frame, left[2], assets, &image.id);
    render_comments(frame, layout[1], app, &image.id);
}

fn render_preview(frame: &mut Frame, area: Rect, image: &AssetItem) {
    let body = if image.has_preview {
        Line::from(vec![
            Span::styled("  ▣ ", Theme::text_muted()),
            Span::styled(image.name.clone(), Theme::text()),
            Span::styled(
                format!("  {}", image.resolution.as_deref().unwrap_or("—")),
                Theme::text_dim(),
            ),
        ])
    } else {
        Line::from(Span::styled("  No preview available", Theme::text_dim()))
    };

    let lines = vec![Line::from(""), Line::from(""), body];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(" Preview ", Theme::title()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Theme::BG)),
        area,
    );
}

fn render_meta_chips(frame: &mut Frame, area: Rect, assets: &AssetBrowser, image: &AssetItem) {
    let profile = assets.profile_for(&image.id);

    let mut spans = vec![Span::styled("  ", Style::default())];
    let chips = [
        image.owner.clone().unwrap_or_else(|| "Unassigned".to_string()),
        image.size.clone().unwrap_or_else(|| "—".to_string()),
        image.resolution.clone().unwrap_or_else(|| "—".to_string()),
        image.image_type.clone().unwrap_or_else(|| "Image".to_string()),
        profile.map(|p| p.created.clone()).unwrap_or_else(|| "—".to_string()),
        profile.map(|p| p.location.clone()).unwrap_or_else(|| "—".to_string()),
    ];
    for chip in chips {
        spans.push(Span::styled(format!("[{}]", chip), Theme::text_muted()));
        spans.push(Span::styled(" ", Style::default()));
    }

    let lines = vec![Line::from(""), Line::from(spans)];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Theme::BG)),
        area,
    );
}

fn render_versions(frame: &mut Frame, area: Rect, assets: &AssetBrowser, image_id: &str) {
    let versions = assets.versions_for(image_id);
    let mut lines = Vec::new();

    if versions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No versions captured yet.",
            Theme::text_dim(),
        )));
    }
    for (index, version) in versions.iter().enumerate() {
        let mut header = vec![
            Span::styled(format!("  {} ", version.label), Theme::text()),
            Span::styled(version.date.clone(), Theme::text_dim()),
        ];
        if index == 0 {
            header.push(Span::styled(" LATEST", Style::default().fg(Theme::EMERALD)));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} {} {} {} {} {} {}",
                version.size,
                Theme::DOT_SEPARATOR,
                version.resolution,
                Theme::DOT_SEPARATOR,
                version.format,
                Theme::DOT_SEPARATOR,
                version.author
            ),
            Theme::text_dim(),
        )));
        if let Some(note) = &version.note {
            lines.push(Line::from(Span::styled(
                format!("    {}", note),
                Theme::text_muted(),
            )));
        }
        lines.push(Line::from(""));
    }

    let title = format!(" Versions {} {} saved ", Theme::DOT_SEPARATOR, versions.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Theme::BG)),
        area,
    );
}

fn render_comments(frame: &mut Frame, area: Rect, app: &App, image_id: &str) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let comments = app.assets.comments_for(image_id);
    let mut lines = Vec::new();
    if comments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  No comments yet.", Theme::text_dim())));
    }
    for comment in comments {
        let author_style = if comment.author == app.config.display_name {
            Theme::bold()
        } else {
            Theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", comment.author), author_style),
            Span::styled(comment.date.clone(), Theme::text_dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", comment.text),
            Theme::text_muted(),
        )));
        lines.push(Line::from(""));
    }

    let title = format!(" Comments {} {} ", Theme::DOT_SEPARATOR, comments.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .title(Span::styled(title, Theme::title()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Theme::BG)),
        layout[0],
    );

    let composing =
        app.input_mode == InputMode::Compose && app.compose_target == ComposeTarget::ImageComment;
    render_compose(
        frame,
        layout[1],
        "Write a comment",
        &app.assets.comment_draft,
        composing,
    );
}
