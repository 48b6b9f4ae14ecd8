//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // Status message on the right, when there is one
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current focus and page
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    hints.push(("Tab", "Switch Panel"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Connections => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Connect"));
                hints.push(("Alt+a", "Add"));
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+d", "Delete"));
                hints.push(("Alt+t", "Test"));
            }
            Page::Collections => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Query"));
                hints.push(("Alt+s", "Sample"));
                hints.push(("Alt+i", "Indexes"));
            }
            Page::Query => {
                hints.push(("Enter", "Run"));
                hints.push(("Alt+o", "Projection"));
                hints.push(("Alt+n/p", "Page"));
                hints.push(("Alt+v", "View Doc"));
                hints.push(("Alt+x", "Explain"));
            }
        },
    }

    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
