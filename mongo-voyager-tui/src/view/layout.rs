//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// Render the full frame
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three rows: title bar, main content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    // Navigation on the left, page content on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(content_area);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);

    components::statusbar::render(app, frame, status_area);

    // Modal on top of everything
    components::modal::render(app, frame);
}

/// Render the title bar, with the active connection on the right of the name.
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let title = match app.backend.active_profile() {
        Some(profile) => format!(
            " Mongo Voyager v0.1.0 · {} ({}:{}/{})",
            profile.name, profile.host, profile.port, profile.database
        ),
        None => " Mongo Voyager v0.1.0".to_string(),
    };

    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// Render the current page inside a bordered block.
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.focus.is_content() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Connections => pages::connections::render(app, frame, inner_area),
        Page::Collections => pages::collections::render(app, frame, inner_area),
        Page::Query => pages::query::render(app, frame, inner_area),
    }
}
