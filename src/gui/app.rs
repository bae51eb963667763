use eframe::egui::{
    self,
    RichText,
};
use tracing::{
    error,
    info,
};

use super::{
    components::{
        Layout,
        Navbar,
        NavbarAction,
    },
    error_modal::ErrorModal,
    settings::{
        SettingsData,
        SettingsModal,
        SETTINGS_FILE,
    },
    shell::{
        Dispatch,
        Shell,
    },
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    api::ApiClient,
    core::tasks::TaskManager,
    gui::router,
    persistence::save_json,
};

pub struct TalentMatchApp {
    settings_data: SettingsData,
    env_api_url: Option<String>,
    theme: Theme,
    shell: Shell,
    navbar: Navbar,
    settings_modal: SettingsModal,
    error_modal: ErrorModal,
    task_manager: TaskManager,
}

impl TalentMatchApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        env_api_url: Option<String>,
        mut task_manager: TaskManager,
    ) -> Self {
        task_manager.set_repaint_context(cc.egui_ctx.clone());

        let theme = Theme::talentmatch();
        set_theme(&cc.egui_ctx, &theme);
        apply_theme_preference(&cc.egui_ctx, settings_data.dark_mode);

        let (shell, dispatches) = Shell::new(router::HOME);

        let app = Self {
            settings_modal: SettingsModal::new(env_api_url.clone()),
            settings_data,
            env_api_url,
            theme,
            shell,
            navbar: Navbar::new(),
            error_modal: ErrorModal::new(),
            task_manager,
        };

        info!(api_url = app.task_manager.api().base_url(), "TalentMatch started");
        app.dispatch_all(dispatches);

        app
    }

    fn dispatch_all(&self, dispatches: Vec<Dispatch>) {
        for (tag, task) in dispatches {
            self.task_manager.dispatch(tag, task);
        }
    }

    fn handle_navbar_action(&mut self, action: NavbarAction) {
        match action {
            NavbarAction::Navigate(path) => {
                let dispatches = self.shell.navigate(&path);
                self.dispatch_all(dispatches);
            }
            NavbarAction::OpenSettings => {
                self.settings_modal.open_settings(self.settings_data.clone());
            }
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: SettingsData) {
        let api_url = settings.resolved_api_url(self.env_api_url.as_deref());
        let api_changed = api_url != self.task_manager.api().base_url()
            || settings.request_timeout_secs != self.settings_data.request_timeout_secs;

        if api_changed {
            match ApiClient::new(&api_url, settings.request_timeout()) {
                Ok(api) => {
                    info!(api_url = api.base_url(), "API client rebuilt");
                    self.task_manager.replace_api(api);
                }
                Err(e) => {
                    error!("Rejected API settings: {e}");
                    self.error_modal.show_error(
                        "Invalid API URL",
                        "The service address could not be used. Settings were not saved.",
                        Some(e.to_string()),
                    );
                    return;
                }
            }
        }

        apply_theme_preference(ctx, settings.dark_mode);
        self.settings_data = settings;
        self.save_settings();

        if api_changed {
            let dispatches = self.shell.reload();
            self.dispatch_all(dispatches);
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            error!("Failed to save settings: {e}");
            self.error_modal.show_error(
                "Failed to save settings",
                "Your changes apply to this session only.",
                Some(e.to_string()),
            );
        }
    }

    /// Keeps the saved preference in step with the navbar's theme switch.
    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }
}

pub fn apply_theme_preference(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
    ctx.options_mut(|o| {
        o.theme_preference =
            if dark_mode { egui::ThemePreference::Dark } else { egui::ThemePreference::Light };
    });
}

impl eframe::App for TalentMatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            let dispatches = self.shell.accept(result);
            self.dispatch_all(dispatches);
        }

        let theme = self.theme.clone();
        let current_path = self.shell.current_path().to_string();
        let shell = &mut self.shell;

        let (nav_action, page_output) =
            Layout::show(ctx, &theme, &mut self.navbar, &current_path, |ui| match shell.page_mut() {
                Some(page) => Some(page.show(ui, &theme)),
                None => {
                    page_not_available(ui, &theme);
                    None
                }
            });

        if let Some(output) = page_output {
            let dispatches = self.shell.handle_output(output);
            self.dispatch_all(dispatches);
        }

        if let Some(action) = nav_action {
            self.handle_navbar_action(action);
        }

        if self.settings_modal.is_settings_open() {
            if let Some(settings) = self.settings_modal.show(ctx, &theme) {
                self.apply_settings(ctx, settings);
            }
        } else {
            self.sync_dark_mode(ctx);
        }

        self.error_modal.show(ctx, &theme);
    }
}

fn page_not_available(ui: &mut egui::Ui, theme: &Theme) {
    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🚧").size(40.0).color(theme.muted_color(ui.ctx())));
        ui.add_space(8.0);
        ui.label(theme.heading(ui.ctx(), "This page is not available yet."));
    });
}
