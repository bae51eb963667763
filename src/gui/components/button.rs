use eframe::egui::{
    self,
    RichText,
};

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn font_size(self) -> f32 {
        match self {
            ButtonSize::Sm => 12.0,
            ButtonSize::Md => 14.0,
            ButtonSize::Lg => 16.0,
        }
    }

    fn padding(self) -> egui::Vec2 {
        match self {
            ButtonSize::Sm => egui::vec2(10.0, 6.0),
            ButtonSize::Md => egui::vec2(16.0, 8.0),
            ButtonSize::Lg => egui::vec2(24.0, 12.0),
        }
    }
}

/// Themed push button. `busy` shows a wait cursor on hover.
pub struct Button<'a> {
    text: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    enabled: bool,
    busy: bool,
    full_width: bool,
}

impl<'a> Button<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            enabled: true,
            busy: false,
            full_width: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn show(self, ui: &mut egui::Ui, theme: &Theme) -> egui::Response {
        let ctx = ui.ctx().clone();
        let primary = theme.primary(&ctx);

        let (fill, text_color, stroke) = match self.variant {
            ButtonVariant::Primary => (primary, egui::Color32::WHITE, egui::Stroke::NONE),
            ButtonVariant::Secondary => (theme.primary_soft(&ctx), primary, egui::Stroke::NONE),
            ButtonVariant::Outline => (
                theme.surface(&ctx),
                theme.foreground(&ctx),
                egui::Stroke::new(1.0, theme.border(&ctx)),
            ),
            ButtonVariant::Danger => (theme.red(&ctx), egui::Color32::WHITE, egui::Stroke::NONE),
        };

        let text = RichText::new(self.text).size(self.size.font_size()).color(text_color).strong();
        let mut button = egui::Button::new(text)
            .fill(fill)
            .stroke(stroke)
            .corner_radius(egui::CornerRadius::same(6));

        if self.full_width {
            button = button.min_size(egui::vec2(ui.available_width(), 0.0));
        }

        let response = ui
            .scope(|ui| {
                ui.spacing_mut().button_padding = self.size.padding();
                ui.add_enabled(self.enabled, button)
            })
            .inner;

        if self.busy && response.contains_pointer() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Wait);
            response
        } else if self.enabled {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        } else {
            response
        }
    }
}
