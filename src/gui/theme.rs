use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::core::models::ScoreTier;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::talentmatch()
    }
}

impl Theme {
    pub fn talentmatch() -> Self {
        Theme { dark: ThemeDetails::indigo_night(), light: ThemeDetails::indigo_day() }
    }

    pub fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).foreground).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).muted)
    }

    pub fn muted_color(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary
    }

    pub fn primary_soft(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary_soft
    }

    pub fn background(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).surface
    }

    pub fn border(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).border
    }

    pub fn foreground(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).foreground
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).yellow
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn blue(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue
    }

    pub fn amber(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).amber
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).purple
    }

    /// Badge colours (background, text) for a match score.
    pub fn tier_colors(&self, ctx: &egui::Context, tier: ScoreTier) -> (Color32, Color32) {
        let accent = match tier {
            ScoreTier::High => self.green(ctx),
            ScoreTier::Mid => self.yellow(ctx),
            ScoreTier::Low => self.red(ctx),
        };
        (accent.gamma_multiply(0.18), accent)
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    surface: Color32,
    foreground: Color32,
    muted: Color32,
    border: Color32,
    selection: Color32,
    primary: Color32,
    primary_soft: Color32,
    red: Color32,
    yellow: Color32,
    green: Color32,
    blue: Color32,
    amber: Color32,
    purple: Color32,
}

impl ThemeDetails {
    fn indigo_day() -> Self {
        Self {
            background: Color32::from_rgb(249, 250, 251),
            surface: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(17, 24, 39),
            muted: Color32::from_rgb(107, 114, 128),
            border: Color32::from_rgb(229, 231, 235),
            selection: Color32::from_rgb(224, 231, 255),
            primary: Color32::from_rgb(79, 70, 229),
            primary_soft: Color32::from_rgb(224, 231, 255),
            red: Color32::from_rgb(185, 28, 28),
            yellow: Color32::from_rgb(161, 98, 7),
            green: Color32::from_rgb(21, 128, 61),
            blue: Color32::from_rgb(29, 78, 216),
            amber: Color32::from_rgb(245, 158, 11),
            purple: Color32::from_rgb(168, 85, 247),
        }
    }

    fn indigo_night() -> Self {
        Self {
            background: Color32::from_rgb(17, 24, 39),
            surface: Color32::from_rgb(31, 41, 55),
            foreground: Color32::from_rgb(243, 244, 246),
            muted: Color32::from_rgb(156, 163, 175),
            border: Color32::from_rgb(55, 65, 81),
            selection: Color32::from_rgb(55, 48, 163),
            primary: Color32::from_rgb(129, 140, 248),
            primary_soft: Color32::from_rgb(49, 46, 129),
            red: Color32::from_rgb(248, 113, 113),
            yellow: Color32::from_rgb(250, 204, 21),
            green: Color32::from_rgb(74, 222, 128),
            blue: Color32::from_rgb(96, 165, 250),
            amber: Color32::from_rgb(251, 191, 36),
            purple: Color32::from_rgb(192, 132, 252),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke {
                        color: theme.border,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.border, ..default.widgets.inactive.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.hovered.bg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.active.bg_stroke },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.primary, ..default.selection.stroke },
            },
            hyperlink_color: theme.primary,
            faint_bg_color: theme.background,
            extreme_bg_color: theme.surface,
            error_fg_color: theme.red,
            warn_fg_color: theme.amber,
            window_shadow: Shadow { color: Color32::from_black_alpha(40), ..default.window_shadow },
            window_fill: theme.surface,
            window_stroke: Stroke { color: theme.border, ..default.window_stroke },
            panel_fill: theme.background,
            ..default
        },
    );
}
