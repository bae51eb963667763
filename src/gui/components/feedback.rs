use eframe::egui::{
    self,
    RichText,
};

use crate::gui::{
    components::button::Button,
    theme::Theme,
};

pub fn loading_spinner(ui: &mut egui::Ui) {
    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(48.0));
    });
    ui.add_space(64.0);
}

/// Red panel carrying one fixed message. Used both full-page and as a banner.
pub fn error_panel(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    let red = theme.red(ui.ctx());

    egui::Frame::NONE
        .fill(red.gamma_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, red.gamma_multiply(0.4)))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").size(18.0).color(red));
                ui.vertical(|ui| {
                    ui.label(RichText::new("Error").strong().color(red));
                    ui.label(RichText::new(message).color(red));
                });
            });
        });
}

pub fn notice_panel(ui: &mut egui::Ui, color: egui::Color32, message: &str) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.12))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(color));
        });
}

/// Centered "nothing here yet" block. Returns true when its action button is clicked.
pub fn empty_state(
    ui: &mut egui::Ui,
    theme: &Theme,
    icon: &str,
    title: &str,
    message: &str,
    action: Option<&str>,
) -> bool {
    let mut clicked = false;

    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(40.0).color(theme.muted_color(ui.ctx())));
        ui.add_space(8.0);
        ui.label(theme.heading(ui.ctx(), title));
        ui.label(theme.muted(ui.ctx(), message));

        if let Some(action) = action {
            ui.add_space(20.0);
            clicked = Button::new(action).show(ui, theme).clicked();
        }
    });
    ui.add_space(48.0);

    clicked
}

pub fn page_header(ui: &mut egui::Ui, theme: &Theme, title: &str, subtitle: Option<&str>) {
    ui.label(RichText::new(title).size(28.0).strong().color(theme.foreground(ui.ctx())));
    if let Some(subtitle) = subtitle {
        ui.add_space(4.0);
        ui.label(theme.muted(ui.ctx(), subtitle));
    }
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(12.0);
}

/// Page header with a primary button on the right. Returns true when it is clicked.
pub fn page_header_with_action(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    subtitle: Option<&str>,
    action: &str,
) -> bool {
    let mut clicked = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).size(28.0).strong().color(theme.foreground(ui.ctx())));
            if let Some(subtitle) = subtitle {
                ui.add_space(4.0);
                ui.label(theme.muted(ui.ctx(), subtitle));
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked = Button::new(action).show(ui, theme).clicked();
        });
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(12.0);

    clicked
}
