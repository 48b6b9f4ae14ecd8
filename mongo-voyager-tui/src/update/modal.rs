//! Modal update logic

use mongo_voyager_core::types::ConnectionProfile;

use crate::message::ModalMessage;
use crate::model::state::{Modal, PROFILE_FORM_FIELDS, TLS_FIELD};
use crate::model::App;

/// Handle a modal message
pub fn update(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close) {
        app.modal.close();
        return;
    }

    match app.modal.active {
        Some(Modal::ProfileForm(_)) => handle_profile_form(app, msg),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Preview { .. }) => handle_preview(app, msg),
        Some(Modal::Help | Modal::Error { .. }) | None => {}
    }
}

// ========== Profile form ==========

fn handle_profile_form(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ProfileForm(ref mut form)) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::NextField => {
            form.focus = (form.focus + 1) % PROFILE_FORM_FIELDS;
        }
        ModalMessage::PrevField => {
            form.focus = (form.focus + PROFILE_FORM_FIELDS - 1) % PROFILE_FORM_FIELDS;
        }
        ModalMessage::ToggleFlag => {
            if form.focus == TLS_FIELD {
                form.tls = !form.tls;
            }
        }
        ModalMessage::ToggleSecrets => {
            form.show_secret = !form.show_secret;
        }
        ModalMessage::Input(ch) => {
            if let Some(text) = form.focused_text_mut() {
                text.push(ch);
                form.error = None;
            }
        }
        ModalMessage::Backspace => {
            if let Some(text) = form.focused_text_mut() {
                text.pop();
            }
        }
        ModalMessage::Confirm => submit_profile_form(app),
        _ => {}
    }
}

/// Validate the form, build a profile, and save it through the backend.
fn submit_profile_form(app: &mut App) {
    let Some(Modal::ProfileForm(ref mut form)) = app.modal.active else {
        return;
    };

    let name = form.name.trim().to_string();
    let host = form.host.trim().to_string();
    let database = form.database.trim().to_string();

    if name.is_empty() || host.is_empty() || database.is_empty() {
        form.error = Some("Name, host and database are required".to_string());
        return;
    }

    let port = if form.port.trim().is_empty() {
        27017
    } else {
        match form.port.trim().parse::<u16>() {
            Ok(p) => p,
            Err(_) => {
                form.error = Some(format!("Invalid port: {}", form.port));
                return;
            }
        }
    };

    let username = {
        let trimmed = form.username.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    let profile = ConnectionProfile::new(name.clone(), host, port, database, username, form.tls);
    let password = form.password.clone();
    let original_name = form.original_name.clone();

    let result = match original_name {
        Some(ref old) if *old != name => app.backend.rename_profile(old, profile, &password),
        _ => app.backend.save_profile(profile, &password),
    };

    match result {
        Ok(()) => {
            app.modal.close();
            super::content::reload_profiles(app);
            app.set_status(format!("Profile saved: {name}"));
        }
        Err(e) => {
            if let Some(Modal::ProfileForm(ref mut form)) = app.modal.active {
                form.error = Some(e.to_string());
            }
        }
    }
}

// ========== Delete confirmation ==========

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref name,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::ToggleDeleteFocus => {
            *focus = 1 - *focus;
        }
        ModalMessage::Confirm => {
            if *focus == 0 {
                app.modal.close();
                return;
            }
            let name = name.clone();
            match app.backend.delete_profile(&name) {
                Ok(()) => {
                    app.modal.close();
                    // Deleting the connected profile drops the connection too
                    if app.collections.profile.as_deref() == Some(name.as_str()) {
                        app.collections.clear();
                        app.query = crate::model::QueryState::new();
                    }
                    super::content::reload_profiles(app);
                    app.set_status(format!("Profile deleted: {name}"));
                }
                Err(e) => {
                    app.modal.close();
                    app.modal.show_error("Delete failed", &e.to_string());
                }
            }
        }
        _ => {}
    }
}

// ========== Preview ==========

fn handle_preview(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Preview { ref mut scroll, .. }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::ScrollUp => {
            *scroll = scroll.saturating_sub(1);
        }
        ModalMessage::ScrollDown => {
            *scroll = scroll.saturating_add(1);
        }
        _ => {}
    }
}
