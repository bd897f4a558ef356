use egui::{Frame, InnerResponse, Margin, Ui};

use crate::utils::colors::HEADER_BG_COLOR;

pub const COLUMNS: [&str; 7] = [
    "Name",
    "Email",
    "Role",
    "Employee Code",
    "Medical Card",
    "Balance",
    "Actions",
];

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

pub fn render_header(ui: &mut Ui) {
    for title in COLUMNS {
        header_cell(ui, |ui| {
            ui.strong(title);
        });
    }
    ui.end_row();
}
