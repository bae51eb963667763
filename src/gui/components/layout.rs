use eframe::egui;

use crate::gui::{
    components::navbar::{
        Navbar,
        NavbarAction,
    },
    theme::Theme,
};

pub const MAX_CONTENT_WIDTH: f32 = 1280.0;

/// Shared chrome for every route: navbar on top, scrollable content column below.
pub struct Layout;

impl Layout {
    pub fn show<R>(
        ctx: &egui::Context,
        theme: &Theme,
        navbar: &mut Navbar,
        current_path: &str,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> (Option<NavbarAction>, R) {
        let nav_action = navbar.show(ctx, theme, current_path);

        let inner = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme.background(ctx)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(MAX_CONTENT_WIDTH) - 48.0;
                        let side = ((ui.available_width() - width) / 2.0).max(0.0);

                        ui.add_space(24.0);
                        ui.horizontal_top(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width.max(200.0));
                                add_contents(ui)
                            })
                            .inner
                        })
                        .inner
                    })
                    .inner
            })
            .inner;

        (nav_action, inner)
    }
}
