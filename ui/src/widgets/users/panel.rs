//! Main panel for user management.

use egui::{Response, RichText, TextEdit, Ui};
use portal_business::{LoadStatus, UserListState, controller};
use portal_states::StateCtx;

use super::table::users_table;
use super::{
    ADD_USER, LOADING, PAGE_TITLE, PageAction, SEARCH_HINT, TRY_AGAIN, confirm, form,
};
use crate::utils::colors::COLOR_RED;
use crate::utils::format::format_footer;

/// Displays the whole page and applies whatever was clicked.
///
/// Fetches the list the first time it is shown.
pub fn users_page(ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    controller::ensure_loaded(ctx);

    let mut actions = Vec::new();
    let state = ctx.state::<UserListState>();
    // Windows are not modal in egui; keep the page inert while one is up.
    let blocked = state.modal().is_open() || state.pending_delete().is_some();

    let response = ui
        .add_enabled_ui(!blocked, |ui| match state.status() {
            LoadStatus::Idle | LoadStatus::Loading => loading_view(ui),
            LoadStatus::Failed(message) => error_view(ui, message, &mut actions),
            LoadStatus::Loaded => list_view(ui, state, &mut actions),
        })
        .response;

    for action in actions {
        apply(ctx, action);
    }

    form::user_form(ctx, ui.ctx());
    confirm::delete_confirmation(ctx, ui.ctx());

    if ctx.has_running_tasks() {
        ui.ctx().request_repaint();
    }

    response
}

fn apply(ctx: &mut StateCtx, action: PageAction) {
    match action {
        PageAction::Retry => controller::list_users(ctx),
        PageAction::OpenAdd => controller::open_add(ctx),
        PageAction::Edit(record) => controller::open_edit(ctx, &record),
        PageAction::Delete(record) => controller::request_delete(ctx, &record),
        PageAction::Search(term) => controller::set_search_term(ctx, term),
    }
}

fn loading_view(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.spinner();
        ui.label(LOADING);
    });
}

fn error_view(ui: &mut Ui, message: &str, actions: &mut Vec<PageAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(RichText::new("Error").color(COLOR_RED));
        ui.label(message);
        ui.add_space(8.0);
        if ui.button(TRY_AGAIN).clicked() {
            actions.push(PageAction::Retry);
        }
    });
}

fn list_view(ui: &mut Ui, state: &UserListState, actions: &mut Vec<PageAction>) {
    ui.horizontal(|ui| {
        ui.heading(PAGE_TITLE);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(ADD_USER).clicked() {
                actions.push(PageAction::OpenAdd);
            }
        });
    });
    ui.add_space(8.0);

    let mut term = state.search_term().to_owned();
    let search = ui.add(
        TextEdit::singleline(&mut term)
            .hint_text(SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        actions.push(PageAction::Search(term));
    }
    ui.add_space(8.0);

    let rows = state.filtered();
    if let Some(action) = users_table(ui, &rows, state.is_deleting()) {
        actions.push(action);
    }

    ui.add_space(8.0);
    ui.label(format_footer(rows.len(), state.users().len()));
}
