//! Bottom-right toast overlay.

use std::time::Duration;

use egui::{Align2, Color32, CornerRadius, Frame, Id, Margin, Order, RichText};
use portal_business::{Notifications, ToastKind};
use portal_states::{StateCtx, Time};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Renders live toasts, newest last, and drops the expired ones.
pub fn toasts(ctx: &mut StateCtx, egui_ctx: &egui::Context) {
    let now = *ctx.state::<Time>().as_ref();
    let notifications = ctx.state_mut::<Notifications>();
    notifications.prune(now);
    if notifications.toasts().is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(Id::new("toasts"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(egui_ctx, |ui| {
            for (index, toast) in notifications.toasts().iter().enumerate() {
                let fill = match toast.kind {
                    ToastKind::Success => COLOR_GREEN,
                    ToastKind::Error => COLOR_RED,
                };
                Frame::NONE
                    .fill(fill)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                            if ui.small_button("×").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        notifications.dismiss(index);
    }
    // Keep frames coming so toasts disappear on time without input.
    egui_ctx.request_repaint_after(Duration::from_millis(250));
}
