//! Connection profiles page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// Render the connections page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(ref err) = app.connections.error {
        render_error(frame, area, err);
        return;
    }

    if app.connections.profiles.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

fn render_error(frame: &mut Frame, area: Rect, err: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  Failed to load profiles: {err}"),
            Style::default().fg(c.error),
        ),
        Line::from(""),
        Line::styled("  Alt+r: Retry", Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            "  No saved connection profiles",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled("  Alt+a: Add profile", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let active = app.backend.active_profile().map(|p| p.name.clone());

    let items: Vec<ListItem> = app
        .connections
        .profiles
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let is_selected = i == app.connections.selected;
            let is_active = active.as_deref() == Some(profile.name.as_str());

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let detail_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut detail = format!("{}:{}/{}", profile.host, profile.port, profile.database);
            if profile.tls {
                detail.push_str(" [TLS]");
            }

            let marker = if is_active { "● " } else { "  " };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(c.success)),
                Span::styled(&profile.name, style),
                Span::raw(" "),
                Span::styled(detail, detail_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.connections.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
