//! Cell rendering for the users table.

use egui::{Color32, CornerRadius, Frame, InnerResponse, Margin, RichText, Ui};
use portal_business::Role;

use crate::utils::colors::{COLOR_ADMIN, COLOR_USER};
use crate::utils::format::format_balance;

/// Data cell with the table's padding.
pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    data_cell(ui, |ui| {
        ui.label(text);
    });
}

/// Coloured pill with "Admin" or "User".
pub fn render_role_cell(ui: &mut Ui, role: Role) {
    let fill = match role {
        Role::Admin => COLOR_ADMIN,
        Role::User => COLOR_USER,
    };
    data_cell(ui, |ui| {
        Frame::NONE
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(RichText::new(role.label()).color(Color32::WHITE).small());
            });
    });
}

#[inline]
pub fn render_balance_cell(ui: &mut Ui, balance: f64) {
    data_cell(ui, |ui| {
        ui.label(RichText::new(format_balance(balance)).monospace());
    });
}
