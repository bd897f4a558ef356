//! Delete confirmation window.

use egui::{Align2, Window};
use portal_business::{UserListState, controller};
use portal_states::StateCtx;

pub const DELETE_TITLE: &str = "Delete User";
pub const CONFIRM: &str = "OK";
pub const DECLINE: &str = "Cancel";

/// Shows the confirmation for `pending_delete`, if any.
pub fn delete_confirmation(ctx: &mut StateCtx, egui_ctx: &egui::Context) {
    let Some(pending) = ctx.state::<UserListState>().pending_delete() else {
        return;
    };
    let prompt = controller::delete_prompt(pending);

    let mut answer = None;
    Window::new(DELETE_TITLE)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(egui_ctx, |ui| {
            ui.label(prompt);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(CONFIRM).clicked() {
                    answer = Some(true);
                }
                if ui.button(DECLINE).clicked() {
                    answer = Some(false);
                }
            });
        });

    match answer {
        Some(true) => controller::confirm_delete(ctx),
        Some(false) => controller::cancel_delete(ctx),
        None => {}
    }
}
