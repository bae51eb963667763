use eframe::egui::{
    self,
    RichText,
};

use crate::gui::theme::Theme;

/// Bordered surface with an optional title row and footer.
#[derive(Default)]
pub struct Card<'a> {
    title: Option<&'a str>,
    footer: Option<&'a str>,
    clickable: bool,
    width: Option<f32>,
}

pub struct CardResponse<R> {
    pub inner: R,
    pub clicked: bool,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// The whole card becomes a click target with a hover highlight.
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        theme: &Theme,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> CardResponse<R> {
        let ctx = ui.ctx().clone();

        let frame = egui::Frame::NONE
            .fill(theme.surface(&ctx))
            .stroke(egui::Stroke::new(1.0, theme.border(&ctx)))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(16));

        let response = frame.show(ui, |ui| {
            if let Some(width) = self.width {
                ui.set_width(width);
            }

            if let Some(title) = self.title {
                ui.label(RichText::new(title).size(17.0).strong().color(theme.foreground(&ctx)));
                ui.separator();
            }

            let inner = add_contents(ui);

            if let Some(footer) = self.footer {
                ui.separator();
                ui.label(theme.muted(&ctx, footer));
            }

            inner
        });

        let mut clicked = false;
        if self.clickable {
            let area = response.response.interact(egui::Sense::click());
            if area.hovered() {
                ui.painter().rect_stroke(
                    area.rect,
                    egui::CornerRadius::same(8),
                    egui::Stroke::new(1.5, theme.primary(&ctx)),
                    egui::StrokeKind::Inside,
                );
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            clicked = area.clicked();
        }

        CardResponse { inner: response.inner, clicked }
    }
}
