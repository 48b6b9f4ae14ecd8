//! Modal rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::state::{Modal, ProfileForm, PROFILE_FORM_FIELDS, TLS_FIELD};
use crate::model::App;

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ProfileForm(form) => render_profile_form(frame, form),
        Modal::ConfirmDelete { name, focus } => render_confirm_delete(frame, name, *focus),
        Modal::Preview {
            title,
            content,
            scroll,
        } => render_preview(frame, title, content, *scroll),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// Centered modal area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the profile create/edit form
fn render_profile_form(frame: &mut Frame, form: &ProfileForm) {
    // Two lines per text field, the TLS toggle, error, hints, border
    let height = (PROFILE_FORM_FIELDS as u16) * 2 + 6;
    let area = centered_rect(52, height, frame.area());

    frame.render_widget(Clear, area);

    let title = if form.original_name.is_some() {
        " Edit Profile "
    } else {
        " New Profile "
    };

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let mut lines = Vec::new();

    for index in 0..PROFILE_FORM_FIELDS {
        let focused = form.focus == index;
        let label_style = Style::default().fg(Color::Gray);

        if index == TLS_FIELD {
            lines.push(Line::from(vec![
                Span::styled(ProfileForm::label(index), label_style),
                if focused {
                    Span::styled(" (←→ to toggle)", Style::default().fg(Color::DarkGray))
                } else {
                    Span::raw("")
                },
            ]));

            let display = format!(
                "  {} {} {}",
                if focused { "◀" } else { " " },
                if form.tls { "enabled" } else { "disabled" },
                if focused { "▶" } else { " " }
            );
            let style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::styled(display, style));
            continue;
        }

        let mut label = ProfileForm::label(index).to_string();
        if index == 5 {
            label.push_str(if form.show_secret {
                " (Alt+s to hide)"
            } else {
                " (Alt+s to show)"
            });
            if form.original_name.is_some() {
                label.push_str(" · empty keeps current");
            }
        }
        lines.push(Line::from(Span::styled(label, label_style)));

        let value = form.text(index);
        let display_value = if index == 5 && !form.show_secret {
            "•".repeat(value.chars().count().min(20))
        } else {
            value.to_string()
        };

        let value_display = if focused {
            format!("  {display_value}▎")
        } else {
            format!("  {display_value}")
        };
        let value_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(value_display, value_style));
    }

    if let Some(ref err) = form.error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Save | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the delete confirmation
fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  Delete this profile and its stored password?",
            Style::default().fg(Color::White),
        ),
        Line::styled(format!("  \"{name}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render a scrollable read-only preview
fn render_preview(frame: &mut Frame, title: &str, content: &str, scroll: u16) {
    let area = frame.area();
    let height = area.height.saturating_sub(4).max(8);
    let modal_area = centered_rect(area.width.saturating_sub(10).min(90), height, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(" ↑↓ Scroll | Esc Close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, inner);
}

/// Render the error modal
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 2, area.width - 4, area.height - 4);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Render the keyboard help
fn render_help(frame: &mut Frame) {
    let area = centered_rect(58, 29, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let section = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        section("Global"),
        Line::from(""),
        entry("Tab", "Switch panel"),
        entry("↑↓/jk", "Move up/down"),
        entry("Enter", "Confirm"),
        entry("Esc", "Back / cancel"),
        entry("Alt+r", "Refresh"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        section("Connections"),
        Line::from(""),
        entry("Alt+a", "Add profile"),
        entry("Alt+e", "Edit profile"),
        entry("Alt+d", "Delete profile"),
        entry("Alt+t", "Test connection"),
        Line::from(""),
        section("Collections & query"),
        Line::from(""),
        entry("Alt+s", "Sample documents"),
        entry("Alt+i", "List indexes"),
        entry("Alt+o", "Toggle projection editor"),
        entry("Alt+x", "Explain query"),
        entry("Alt+v", "View selected document"),
        entry("Alt+n/p", "Next / previous page"),
        Line::from(""),
        Line::styled(
            "Press Esc to close the help",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
