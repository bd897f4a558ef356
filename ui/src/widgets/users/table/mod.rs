//! Users grid.
//!
//! - `header`: column titles
//! - `row`: one user per row
//! - `cells`: per-column rendering (role badge, balance)
//!
//! Uses `egui::Grid` rather than a virtualised table so every row button is
//! reachable through accesskit.

mod cells;
pub mod header;
pub mod row;

use egui::{Frame, Margin, ScrollArea, Stroke, Ui};
use portal_business::UserRecord;

use super::PageAction;
use crate::utils::colors::TABLE_BORDER_COLOR;

pub use header::COLUMNS;

/// Renders `rows` and returns the row action clicked this frame, if any.
pub fn users_table(ui: &mut Ui, rows: &[&UserRecord], is_deleting: bool) -> Option<PageAction> {
    let mut clicked = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::both().auto_shrink([false, true]).show(ui, |ui| {
                egui::Grid::new("users_table")
                    .num_columns(COLUMNS.len())
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        header::render_header(ui);
                        if rows.is_empty() {
                            row::render_empty_row(ui);
                        }
                        for user in rows {
                            if let Some(action) = row::render_row(ui, user, is_deleting) {
                                clicked = Some(action);
                            }
                        }
                    });
            });
        });

    clicked
}
