//! Query page: editor on top, result table below

use bson::Bson;
use mongo_voyager_core::types::ResultPage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// Longest cell text before truncation
const CELL_WIDTH: usize = 40;

/// Render the query page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_editor(app, frame, rows[0]);
    render_results(app, frame, rows[1]);
}

/// Render the filter and projection editors side by side
fn render_editor(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let content_focus = app.focus.is_content();
    let query_title = match app.query.collection {
        Some(ref collection) => format!(" Query · {collection} "),
        None => " Query ".to_string(),
    };

    render_text_box(
        frame,
        columns[0],
        &query_title,
        &app.query.query_text,
        " { status: \"active\" }  or  db.users.find({ ... })",
        content_focus && !app.query.editing_projection,
    );
    render_text_box(
        frame,
        columns[1],
        " Projection (Alt+o) ",
        &app.query.projection_text,
        " { name: 1 }",
        content_focus && app.query.editing_projection,
    );
}

fn render_text_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    placeholder: &str,
    editing: bool,
) {
    let c = colors();

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if text.is_empty() && !editing {
        Line::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else if editing {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(text.to_string(), Style::default().fg(c.fg)),
            Span::styled("▎", Style::default().fg(c.highlight)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(text.to_string(), Style::default().fg(c.fg)),
        ])
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// Render the results area: error, hint, or table
fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(ref err) = app.query.error {
        let content = vec![
            Line::from(""),
            Line::styled(format!("  ⚠ {err}"), Style::default().fg(colors().error)),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    let Some(ref results) = app.query.results else {
        let content = vec![
            Line::from(""),
            Line::styled(
                "  Type a filter or a pipeline and press Enter",
                Style::default().fg(Color::Gray),
            ),
            Line::from(""),
            Line::styled(
                "  An empty query matches everything",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    };

    let rows_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_table(app, frame, rows_layout[0], results);
    render_page_line(frame, rows_layout[1], results);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect, results: &ResultPage) {
    let c = colors();

    if results.documents.is_empty() {
        let content = vec![
            Line::from(""),
            Line::styled("  No matching documents", Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    let header = Row::new(
        app.query
            .columns
            .iter()
            .map(|col| Cell::from(col.as_str()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = results
        .documents
        .iter()
        .map(|doc| {
            Row::new(
                app.query
                    .columns
                    .iter()
                    .map(|col| Cell::from(cell_text(doc.get(col))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let count = app.query.columns.len().max(1);
    let widths = vec![Constraint::Ratio(1, count as u32); count];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.query.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_page_line(frame: &mut Frame, area: Rect, results: &ResultPage) {
    let more = if results.has_more { " · more available" } else { "" };
    let line = Line::styled(
        format!(
            " Page {} · {} documents{more}",
            results.page + 1,
            results.documents.len()
        ),
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// Short single-line rendering of a field value.
fn cell_text(value: Option<&Bson>) -> String {
    let text = match value {
        None => String::new(),
        Some(Bson::String(s)) => s.clone(),
        Some(Bson::ObjectId(id)) => id.to_hex(),
        Some(Bson::Document(doc)) => format!("{{…{} fields}}", doc.len()),
        Some(Bson::Array(items)) => format!("[…{} items]", items.len()),
        Some(Bson::Null) => "null".to_string(),
        Some(other) => other.to_string(),
    };
    truncate(&text, CELL_WIDTH)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn cell_text_summarizes_nested_values() {
        let doc = doc! { "sub": { "a": 1, "b": 2 }, "list": [1, 2, 3] };
        assert_eq!(cell_text(doc.get("sub")), "{…2 fields}");
        assert_eq!(cell_text(doc.get("list")), "[…3 items]");
        assert_eq!(cell_text(doc.get("missing")), "");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }
}
