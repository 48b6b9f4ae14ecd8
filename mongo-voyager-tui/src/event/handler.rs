//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// Poll for an input event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next loop turn anyway
        _ => AppMessage::Noop,
    }
}

/// Handle a keyboard event
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Release and Repeat cause double input on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal captures all input
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // Global shortcuts
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?') && !is_query_editor(app))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: toggle the focused panel
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// Whether content focus is currently a text editor (plain chars are input)
fn is_query_editor(app: &App) -> bool {
    app.focus.is_content() && app.current_page == Page::Query
}

/// Navigation panel keys
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Content panel keys
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_TEST.matches(&key) {
        return AppMessage::Content(ContentMessage::Test);
    }
    if DefaultKeymap::ACTION_SAMPLE.matches(&key) {
        return AppMessage::Content(ContentMessage::Sample);
    }
    if DefaultKeymap::ACTION_INDEXES.matches(&key) {
        return AppMessage::Content(ContentMessage::Indexes);
    }

    match app.current_page {
        Page::Query => handle_query_keys(key),
        _ => handle_list_keys(key),
    }
}

/// List page keys (connections, collections)
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Query page keys: the editor takes plain characters, results navigation
/// and paging run on arrows and Alt shortcuts.
fn handle_query_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EXPLAIN.matches(&key) {
        return AppMessage::Content(ContentMessage::Explain);
    }
    if DefaultKeymap::ACTION_PROJECTION.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleProjection);
    }
    if DefaultKeymap::ACTION_PREVIEW.matches(&key) {
        return AppMessage::Content(ContentMessage::Preview);
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }
    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevPage);
    }

    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::NextPage),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Content(ContentMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// Modal keys
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    use crate::model::state::Modal;

    // Esc and Ctrl+C always close
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ProfileForm(_) => handle_profile_form_keys(key),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Preview { .. } => handle_preview_keys(key),
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// Profile form keys
fn handle_profile_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Left | KeyCode::Right => AppMessage::Modal(ModalMessage::ToggleFlag),
        KeyCode::Char(ch) => {
            // Alt+s toggles password visibility
            if key.modifiers.contains(KeyModifiers::ALT) && ch == 's' {
                AppMessage::Modal(ModalMessage::ToggleSecrets)
            } else if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                AppMessage::Modal(ModalMessage::Input(ch))
            } else {
                AppMessage::Noop
            }
        }
        _ => AppMessage::Noop,
    }
}

/// Delete confirmation keys
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// Preview modal keys
fn handle_preview_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::ScrollDown),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}
