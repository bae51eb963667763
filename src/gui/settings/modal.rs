use eframe::egui;
use reqwest::Url;

use super::data::SettingsData;
use crate::gui::theme::Theme;

const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Clone, Default)]
pub struct SettingsModalData {
    pub settings: SettingsData,
    pub original_settings: SettingsData,
}

impl SettingsModalData {
    pub fn is_dirty(&self) -> bool {
        self.settings != self.original_settings
    }
}

/// Edits the service URL, request timeout and theme.
pub struct SettingsModal {
    open: bool,
    data: SettingsModalData,
    env_override: Option<String>,
}

impl SettingsModal {
    pub fn new(env_override: Option<String>) -> Self {
        Self { open: false, data: SettingsModalData::default(), env_override }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.data.settings = current_settings.clone();
        self.data.original_settings = current_settings;
        self.open = true;
    }

    pub fn is_settings_open(&self) -> bool {
        self.open
    }

    /// Returns the new settings once the user saves them.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(460.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            self.ui_connection(ui, theme);
            ui.add_space(10.0);

            ui.checkbox(&mut self.data.settings.dark_mode, "Dark mode");
            ui.add_space(10.0);

            ui.separator();

            let is_dirty = self.data.is_dirty();
            let url_error = validate_api_url(&self.data.settings.api_url);

            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(theme.yellow(ui.ctx()), "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.colored_label(egui::Color32::TRANSPARENT, "⚠");
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let can_save = is_dirty && url_error.is_none();
                let save_clicked =
                    ui.add_enabled(can_save, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    let mut settings = self.data.settings.clone();
                    settings.api_url = settings.api_url.trim().to_string();
                    self.data.original_settings = settings.clone();
                    result = Some(settings);
                    ui.close();
                } else if cancel_clicked {
                    self.data.settings = self.data.original_settings.clone();
                    ui.close();
                } else if reset_clicked {
                    self.data.settings = SettingsData::default();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_connection(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        egui::Grid::new("settings_connection_grid").num_columns(2).spacing([12.0, 8.0]).show(
            ui,
            |ui| {
                ui.label("API URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.data.settings.api_url)
                        .hint_text(crate::api::DEFAULT_API_URL)
                        .desired_width(280.0),
                );
                ui.end_row();

                ui.label("Request timeout:");
                ui.add(
                    egui::DragValue::new(&mut self.data.settings.request_timeout_secs)
                        .speed(1.0)
                        .range(1..=MAX_TIMEOUT_SECS)
                        .suffix(" s"),
                );
                ui.end_row();
            },
        );

        if let Some(message) = validate_api_url(&self.data.settings.api_url) {
            ui.colored_label(theme.red(ui.ctx()), format!("⚠ {message}"));
        }

        if let Some(env_url) = &self.env_override {
            ui.add_space(5.0);
            ui.label(theme.muted(
                ui.ctx(),
                &format!("{} is set; {env_url} is used until it is removed.", super::API_URL_ENV),
            ));
        }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Blank is allowed and means the default service address.
pub fn validate_api_url(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(_) => Some("URL must start with http:// or https://"),
        Err(_) => Some("Not a valid URL"),
    }
}
