//! Content panel update logic
//!
//! Dispatches per page and talks to the backend. Every backend failure
//! lands either in the page's error field or in an error modal; the loop
//! never unwinds on a failed call.

use mongo_voyager_core::services::DEFAULT_PAGE_SIZE;

use crate::message::ContentMessage;
use crate::model::state::ProfileForm;
use crate::model::{App, Page};

/// Handle a content message
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Connections => update_connections(app, msg),
        Page::Collections => update_collections(app, msg),
        Page::Query => update_query(app, msg),
    }
}

/// Reload the data behind the current page
pub fn refresh(app: &mut App) {
    match app.current_page {
        Page::Connections => reload_profiles(app),
        Page::Collections => match app.backend.list_collections() {
            Ok(collections) => {
                if let Some(profile) = app.backend.active_profile() {
                    let name = profile.name.clone();
                    app.collections.set_collections(name, collections);
                }
                app.set_status("Collections reloaded");
            }
            Err(e) => app.set_status(e.to_string()),
        },
        Page::Query => {
            if app.query.results.is_some() {
                let page = app.query.page;
                run_query(app, page);
            }
        }
    }
}

/// Reload the saved profiles list
pub fn reload_profiles(app: &mut App) {
    match app.backend.list_profiles() {
        Ok(profiles) => app.connections.set_profiles(profiles),
        Err(e) => app.connections.error = Some(e.to_string()),
    }
}

// ========== Connections ==========

fn update_connections(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.connections.select_previous(),
        ContentMessage::SelectNext => app.connections.select_next(),
        ContentMessage::SelectFirst => app.connections.select_first(),
        ContentMessage::SelectLast => app.connections.select_last(),

        ContentMessage::Confirm => connect_selected(app),

        ContentMessage::Add => {
            app.modal.show_profile_form(ProfileForm::new());
        }

        ContentMessage::Edit => {
            if let Some(profile) = app.connections.selected_profile() {
                let form = ProfileForm::edit(profile);
                app.modal.show_profile_form(form);
            }
        }

        ContentMessage::Delete => {
            if let Some(profile) = app.connections.selected_profile() {
                let name = profile.name.clone();
                app.modal.show_confirm_delete(&name);
            }
        }

        ContentMessage::Test => test_selected(app),

        _ => {}
    }
}

/// Open a connection to the selected profile and load its collections.
fn connect_selected(app: &mut App) {
    let Some(profile) = app.connections.selected_profile() else {
        return;
    };
    let name = profile.name.clone();

    app.set_status(format!("Connecting to {name}..."));
    match app.backend.connect(&name) {
        Ok(collections) => {
            let count = collections.len();
            app.collections.set_collections(name.clone(), collections);
            app.current_page = Page::Collections;
            app.set_status(format!("Connected to {name} ({count} collections)"));
        }
        Err(e) => {
            app.clear_status();
            app.modal.show_error("Connection failed", &e.to_string());
        }
    }
}

/// Test the selected profile with its stored password.
fn test_selected(app: &mut App) {
    let Some(profile) = app.connections.selected_profile() else {
        return;
    };
    let name = profile.name.clone();

    app.set_status(format!("Testing {name}..."));
    match app.backend.test_saved_profile(&name) {
        Ok(report) => app.set_status(report.message),
        Err(e) => app.set_status(e.to_string()),
    }
}

// ========== Collections ==========

fn update_collections(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.collections.select_previous(),
        ContentMessage::SelectNext => app.collections.select_next(),
        ContentMessage::SelectFirst => app.collections.select_first(),
        ContentMessage::SelectLast => app.collections.select_last(),

        ContentMessage::Confirm => {
            if let Some(collection) = app.collections.selected_collection() {
                app.query.set_collection(collection.to_string());
                app.current_page = Page::Query;
                app.clear_status();
            }
        }

        ContentMessage::Sample => sample_selected(app),
        ContentMessage::Indexes => indexes_selected(app),

        _ => {}
    }
}

/// Sample size for the structure preview
const SAMPLE_LIMIT: u64 = 10;

fn sample_selected(app: &mut App) {
    let Some(collection) = app.collections.selected_collection() else {
        return;
    };
    let collection = collection.to_string();

    match app.backend.sample_documents(&collection, SAMPLE_LIMIT) {
        Ok(documents) => {
            let content = if documents.is_empty() {
                "(empty collection)".to_string()
            } else {
                documents
                    .iter()
                    .map(pretty_document)
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            app.modal.show_preview(format!("Sample: {collection}"), content);
        }
        Err(e) => app.modal.show_error("Sample failed", &e.to_string()),
    }
}

fn indexes_selected(app: &mut App) {
    let Some(collection) = app.collections.selected_collection() else {
        return;
    };
    let collection = collection.to_string();

    match app.backend.list_indexes(&collection) {
        Ok(indexes) => {
            let content = indexes
                .iter()
                .map(pretty_document)
                .collect::<Vec<_>>()
                .join("\n");
            app.modal
                .show_preview(format!("Indexes: {collection}"), content);
        }
        Err(e) => app.modal.show_error("Indexes failed", &e.to_string()),
    }
}

// ========== Query ==========

fn update_query(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::Input(ch) => {
            app.query.active_editor_mut().push(ch);
            app.query.error = None;
        }
        ContentMessage::Backspace => {
            app.query.active_editor_mut().pop();
        }
        ContentMessage::ToggleProjection => {
            app.query.editing_projection = !app.query.editing_projection;
        }

        ContentMessage::Confirm => run_query(app, 0),

        ContentMessage::NextPage => {
            let has_more = app.query.results.as_ref().is_some_and(|r| r.has_more);
            if has_more {
                let page = app.query.page + 1;
                run_query(app, page);
            }
        }
        ContentMessage::PrevPage => {
            if app.query.page > 0 {
                let page = app.query.page - 1;
                run_query(app, page);
            }
        }

        ContentMessage::SelectPrevious => app.query.select_previous(),
        ContentMessage::SelectNext => app.query.select_next(),

        ContentMessage::Preview => {
            if let Some(doc) = app.query.selected_document() {
                let content = pretty_document(doc);
                app.modal.show_preview("Document", content);
            }
        }

        ContentMessage::Explain => explain_query(app),

        _ => {}
    }
}

/// Execute the query text against the target collection.
fn run_query(app: &mut App, page: u64) {
    let Some(collection) = target_collection(app) else {
        app.query
            .set_error("Select a collection first (Collections page, Enter)".to_string());
        return;
    };

    let text = app.query.query_text.clone();
    let projection = app.query.projection_text.trim().to_string();
    let projection = (!projection.is_empty()).then_some(projection);

    match app.backend.execute_query(
        &collection,
        &text,
        projection.as_deref(),
        page,
        DEFAULT_PAGE_SIZE,
    ) {
        Ok(results) => {
            let shown = results.documents.len();
            app.query.set_results(results);
            app.set_status(format!("Page {} ({shown} documents)", page + 1));
        }
        Err(e) => {
            app.clear_status();
            app.query.set_error(e.to_string());
        }
    }
}

fn explain_query(app: &mut App) {
    let Some(collection) = target_collection(app) else {
        return;
    };
    let text = app.query.query_text.clone();

    match app.backend.explain_query(&collection, &text) {
        Ok(plan) => app.modal.show_preview("Query plan", pretty_document(&plan)),
        Err(e) => app.modal.show_error("Explain failed", &e.to_string()),
    }
}

/// The collection a query runs against. Shell-form text carries its own
/// collection name, so an unset target is only an error for plain text.
fn target_collection(app: &App) -> Option<String> {
    if let Some(ref collection) = app.query.collection {
        return Some(collection.clone());
    }
    if app.query.query_text.trim_start().starts_with("db.") {
        return Some(String::new());
    }
    None
}

fn pretty_document(doc: &bson::Document) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| format!("{doc}"))
}
