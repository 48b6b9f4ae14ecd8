//! Navigation update logic

use crate::message::NavigationMessage;
use crate::model::{App, NavItemId, Page};

/// Handle a navigation message
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.current_page = page_from_nav_id(id);
                app.clear_status();
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}

fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Connections => Page::Connections,
        NavItemId::Collections => Page::Collections,
        NavItemId::Query => Page::Query,
    }
}
