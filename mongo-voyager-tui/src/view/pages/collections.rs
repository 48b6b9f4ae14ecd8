//! Collections page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;

/// Render the collections page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.collections.profile.is_none() {
        render_not_connected(frame, area);
        return;
    }

    if app.collections.collections.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

fn render_not_connected(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  Not connected", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "  Open a profile on the Connections page (Enter)",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            "  The database has no collections",
            Style::default().fg(Color::Gray),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .collections
        .collections
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let is_selected = i == app.collections.selected;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled("▤ ", Style::default().fg(Color::DarkGray)),
                Span::styled(name, style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.collections.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
