use crate::app::AppState;

use super::types::{ActionId, CommandOutcome};

pub(crate) fn next_page(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::NextPage);

    if !app.nav.next() {
        app.status.message = format!(
            "already at last page ({}/{})",
            app.nav.current_page(),
            app.nav.total_pages()
        );
        return CommandOutcome::Noop;
    }

    app.status.message = page_message(app);
    CommandOutcome::Applied
}

pub(crate) fn prev_page(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::PrevPage);

    if !app.nav.previous() {
        app.status.message = "already at first page (1)".to_string();
        return CommandOutcome::Noop;
    }

    app.status.message = page_message(app);
    CommandOutcome::Applied
}

pub(crate) fn first_page(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::FirstPage);

    if !app.nav.first() {
        app.status.message = "already at first page (1)".to_string();
        return CommandOutcome::Noop;
    }

    app.status.message = page_message(app);
    CommandOutcome::Applied
}

pub(crate) fn last_page(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::LastPage);

    if !app.nav.last() {
        app.status.message = format!(
            "already at last page ({}/{})",
            app.nav.current_page(),
            app.nav.total_pages()
        );
        return CommandOutcome::Noop;
    }

    app.status.message = page_message(app);
    CommandOutcome::Applied
}

pub(crate) fn toggle_debug_status(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::DebugStatusToggle);
    app.debug_status_visible = !app.debug_status_visible;
    let state = if app.debug_status_visible { "on" } else { "off" };
    app.status.message = format!("debug status: {state}");
    CommandOutcome::Applied
}

fn page_message(app: &AppState) -> String {
    format!("page {}/{}", app.nav.current_page(), app.nav.total_pages())
}
