use eframe::egui::{
    self,
    RichText,
};
use tracing::warn;

use super::{
    LoadState,
    PageOutput,
};
use crate::{
    core::{
        models::DashboardStats,
        tasks::{
            ApiOutcome,
            ApiTask,
        },
    },
    gui::{
        components::{
            feedback,
            Button,
            ButtonVariant,
            Card,
        },
        router,
        theme::Theme,
    },
};

pub const LOAD_FAILED: &str = "Failed to load dashboard data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAccent {
    Blue,
    Green,
    Purple,
    Amber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub name: &'static str,
    pub icon: &'static str,
    pub value: u64,
    pub accent: StatAccent,
    pub path: &'static str,
}

pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard {
            name: "Job Descriptions",
            icon: "💼",
            value: stats.jobs as u64,
            accent: StatAccent::Blue,
            path: router::JOBS,
        },
        StatCard {
            name: "Candidates",
            icon: "👥",
            value: stats.candidates as u64,
            accent: StatAccent::Green,
            path: router::CANDIDATES,
        },
        StatCard {
            name: "Shortlisted",
            icon: "✔",
            value: stats.shortlisted,
            accent: StatAccent::Purple,
            path: router::MATCHING,
        },
        StatCard {
            name: "Interviews Scheduled",
            icon: "📈",
            value: stats.interviews,
            accent: StatAccent::Amber,
            path: router::MATCHING,
        },
    ]
}

const SYSTEM_STATUS: [(&str, &str); 4] = [
    ("AI Services", "Operational"),
    ("Database", "Connected"),
    ("API Services", "Operational"),
    ("LLM Services", "Running"),
];

#[derive(Debug, Default)]
pub struct DashboardPage {
    stats: LoadState<DashboardStats>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &LoadState<DashboardStats> {
        &self.stats
    }

    pub fn mount(&mut self) -> Vec<ApiTask> {
        self.stats.start();
        vec![ApiTask::DashboardStats]
    }

    pub fn apply(&mut self, outcome: ApiOutcome) -> Vec<ApiTask> {
        match outcome {
            ApiOutcome::DashboardStats(result) => self.stats.finish(result, LOAD_FAILED),
            other => warn!("Dashboard ignoring unexpected outcome: {:?}", other),
        }
        Vec::new()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> PageOutput {
        let mut output = PageOutput::default();

        let stats = match &self.stats {
            LoadState::Idle | LoadState::Loading => {
                feedback::loading_spinner(ui);
                return output;
            }
            LoadState::Failed(message) => {
                feedback::error_panel(ui, theme, message);
                return output;
            }
            LoadState::Loaded(stats) => *stats,
        };

        feedback::page_header(
            ui,
            theme,
            "Dashboard",
            Some("Overview of your recruitment activities and statistics."),
        );

        let ctx = ui.ctx().clone();
        let spacing = 16.0;
        let card_width = ((ui.available_width() - spacing * 3.0) / 4.0 - 34.0).max(160.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
            for card in stat_cards(&stats) {
                let accent = match card.accent {
                    StatAccent::Blue => theme.blue(&ctx),
                    StatAccent::Green => theme.green(&ctx),
                    StatAccent::Purple => theme.purple(&ctx),
                    StatAccent::Amber => theme.amber(&ctx),
                };

                let response = Card::new().clickable(true).width(card_width).show(ui, theme, |ui| {
                    ui.horizontal(|ui| {
                        egui::Frame::NONE
                            .fill(accent)
                            .corner_radius(egui::CornerRadius::same(6))
                            .inner_margin(egui::Margin::same(10))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(card.icon).size(20.0).color(egui::Color32::WHITE),
                                );
                            });
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            ui.label(theme.muted(&ctx, card.name));
                            ui.label(
                                RichText::new(card.value.to_string())
                                    .size(28.0)
                                    .strong()
                                    .color(theme.foreground(&ctx)),
                            );
                        });
                    });
                });

                if response.clicked {
                    output.navigate_to = Some(card.path.to_string());
                }
            }
        });

        ui.add_space(24.0);

        let half_width = ((ui.available_width() - spacing) / 2.0 - 34.0).max(240.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

            Card::new().title("Quick Actions").width(half_width).show(ui, theme, |ui| {
                ui.label(theme.muted(&ctx, "Get started with these common tasks:"));
                ui.add_space(8.0);

                let quick_actions = [
                    ("Add New Job", ButtonVariant::Primary, router::NEW_JOB),
                    ("Add New Candidate", ButtonVariant::Secondary, router::NEW_CANDIDATE),
                    ("Match Candidates", ButtonVariant::Outline, router::MATCHING),
                ];
                for (label, variant, path) in quick_actions {
                    let button = Button::new(label).variant(variant).full_width(true);
                    if button.show(ui, theme).clicked() {
                        output.navigate_to = Some(path.to_string());
                    }
                    ui.add_space(4.0);
                }
            });

            Card::new().title("System Status").width(half_width).show(ui, theme, |ui| {
                for (service, status) in SYSTEM_STATUS {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().circle_filled(rect.center(), 5.0, theme.green(&ctx));
                        ui.label(RichText::new(service).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(theme.muted(&ctx, status));
                        });
                    });
                    ui.add_space(6.0);
                }
            });
        });

        output
    }
}
