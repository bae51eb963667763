use eframe::egui::{
    self,
    RichText,
};

use crate::gui::{
    router::{
        self,
        ROUTES,
    },
    theme::Theme,
};

pub const BRAND: &str = "TalentMatch AI";

/// Windows narrower than this get the collapsed menu.
pub const COMPACT_BREAKPOINT: f32 = 1024.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarAction {
    Navigate(String),
    OpenSettings,
}

#[derive(Debug, Default)]
pub struct Navbar {
    mobile_menu_open: bool,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Following any link closes the collapsed menu.
    pub fn activate(&mut self, path: &str) -> NavbarAction {
        self.close_mobile_menu();
        NavbarAction::Navigate(path.to_string())
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        current_path: &str,
    ) -> Option<NavbarAction> {
        let mut action = None;
        let compact = ctx.screen_rect().width() < COMPACT_BREAKPOINT;

        if !compact {
            self.close_mobile_menu();
        }

        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::NONE
                    .fill(theme.surface(ctx))
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = ui.add(
                        egui::Label::new(
                            RichText::new(BRAND).size(20.0).strong().color(theme.primary(ctx)),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if brand.clicked() {
                        action = Some(self.activate(router::HOME));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⚙").on_hover_text("Settings").clicked() {
                            action = Some(NavbarAction::OpenSettings);
                        }
                        egui::widgets::global_theme_preference_switch(ui);

                        if compact {
                            let icon = if self.mobile_menu_open { "✕" } else { "☰" };
                            if ui.button(icon).on_hover_text("Open main menu").clicked() {
                                self.toggle_mobile_menu();
                            }
                        } else {
                            // Right-to-left, so walk the routes backwards to keep navbar order.
                            for route in ROUTES.iter().rev() {
                                if nav_link(ui, theme, route.label, route.path, current_path) {
                                    action = Some(self.activate(route.path));
                                }
                                ui.add_space(16.0);
                            }
                        }
                    });
                });

                if compact && self.mobile_menu_open {
                    ui.add_space(8.0);
                    ui.separator();
                    for route in ROUTES {
                        let active = router::is_active(current_path, route.path);
                        let text = RichText::new(route.label).size(16.0).strong().color(
                            if active { theme.primary(ctx) } else { theme.foreground(ctx) },
                        );
                        if ui.selectable_label(active, text).clicked() {
                            action = Some(self.activate(route.path));
                        }
                    }
                }
            });

        action
    }
}

fn nav_link(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    path: &str,
    current_path: &str,
) -> bool {
    let ctx = ui.ctx().clone();
    let active = router::is_active(current_path, path);
    let color = if active { theme.primary(&ctx) } else { theme.foreground(&ctx) };

    let response = ui
        .add(
            egui::Label::new(RichText::new(label).strong().color(color))
                .sense(egui::Sense::click()),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if active {
        let rect = response.rect;
        ui.painter().hline(
            rect.x_range(),
            rect.bottom() + 3.0,
            egui::Stroke::new(2.0, theme.primary(&ctx)),
        );
    }

    response.clicked()
}
