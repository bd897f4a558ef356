use chrono::Utc;
use portal_states::Time;

use crate::{state::State, widgets};

pub struct PortalApp {
    state: State,
}

impl PortalApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for PortalApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results of finished commands before anything reads state.
        self.state.ctx.sync();
        *self.state.ctx.state_mut::<Time>().as_mut() = Utc::now();

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_page(&mut self.state.ctx, ui);
        });

        widgets::toasts(&mut self.state.ctx, ctx);

        if self.state.ctx.has_running_tasks() {
            ctx.request_repaint();
        }
    }
}
