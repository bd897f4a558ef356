//! Row rendering for the users table.

use egui::{Button, Color32, RichText, Ui};
use portal_business::UserRecord;

use super::cells::{data_cell, render_balance_cell, render_role_cell, render_text_cell};
use crate::widgets::users::{NO_MATCHES, PageAction};

pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";

/// Renders one user and returns the action clicked in its Actions cell.
pub fn render_row(ui: &mut Ui, user: &UserRecord, is_deleting: bool) -> Option<PageAction> {
    render_text_cell(ui, &user.name);
    render_text_cell(ui, &user.email);
    render_role_cell(ui, user.role);
    render_text_cell(ui, &user.employee_code);
    render_text_cell(ui, &user.medical_card_number);
    render_balance_cell(ui, user.balance);

    let action = data_cell(ui, |ui| {
        ui.horizontal(|ui| {
            let mut action = None;
            if ui.button(EDIT).clicked() {
                action = Some(PageAction::Edit(user.clone()));
            }
            if ui.add_enabled(!is_deleting, Button::new(DELETE)).clicked() {
                action = Some(PageAction::Delete(user.clone()));
            }
            action
        })
        .inner
    })
    .inner;

    ui.end_row();
    action
}

/// Stand-in row when no user matches the search.
pub fn render_empty_row(ui: &mut Ui) {
    data_cell(ui, |ui| {
        ui.label(RichText::new(NO_MATCHES).color(Color32::GRAY));
    });
    ui.end_row();
}
