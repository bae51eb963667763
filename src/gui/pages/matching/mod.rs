mod state;

use eframe::egui::{
    self,
    RichText,
};
pub use state::MatchingPage;

use super::{
    LoadState,
    PageOutput,
};
use crate::{
    core::{
        models::{
            format_interview_date,
            or_placeholder,
            present,
            JobId,
            MatchedCandidate,
        },
        tasks::MatchingAction,
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

const ACTIONS: [(MatchingAction, ButtonVariant); 3] = [
    (MatchingAction::MatchAll, ButtonVariant::Primary),
    (MatchingAction::Shortlist, ButtonVariant::Secondary),
    (MatchingAction::ScheduleInterviews, ButtonVariant::Outline),
];

impl MatchingPage {
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> PageOutput {
        let mut output = PageOutput::default();

        match self.jobs() {
            LoadState::Idle | LoadState::Loading => {
                feedback::loading_spinner(ui);
                return output;
            }
            LoadState::Failed(message) => {
                feedback::error_panel(ui, theme, message);
                return output;
            }
            LoadState::Loaded(jobs) if jobs.is_empty() => {
                let add = feedback::empty_state(
                    ui,
                    theme,
                    "💼",
                    "No job descriptions",
                    "You need to add job descriptions before matching candidates.",
                    Some("Add Job Description"),
                );
                if add {
                    output.navigate_to = Some(router::NEW_JOB.to_string());
                }
                return output;
            }
            LoadState::Loaded(_) => {}
        }

        feedback::page_header(
            ui,
            theme,
            "Candidate Matching",
            Some("Match, shortlist, and schedule interviews with candidates."),
        );

        if let Some(job_id) = self.job_selector(ui, theme) {
            output.tasks.extend(self.select_job(job_id));
        }
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for (action, variant) in ACTIONS {
                let busy = self.is_busy(action);
                let clicked = Button::new(action.label(busy))
                    .variant(variant)
                    .enabled(self.can_run(action))
                    .busy(busy)
                    .show(ui, theme)
                    .clicked();

                if clicked {
                    output.tasks.extend(self.start_action(action));
                }
                ui.add_space(8.0);
            }
        });
        ui.add_space(12.0);

        if let Some(message) = self.error() {
            feedback::error_panel(ui, theme, message);
            ui.add_space(12.0);
        }

        if self.selected_job().is_none() {
            return output;
        }

        if self.is_loading_candidates() {
            feedback::loading_spinner(ui);
        } else if self.candidates().is_empty() {
            let mut match_all = false;
            Card::new().show(ui, theme, |ui| {
                ui.set_width(ui.available_width());
                match_all = feedback::empty_state(
                    ui,
                    theme,
                    "👤",
                    "No candidates matched",
                    "Get started by matching candidates to this job.",
                    Some(MatchingAction::MatchAll.label(false)),
                );
            });
            if match_all {
                output.tasks.extend(self.start_action(MatchingAction::MatchAll));
            }
        } else {
            ui.label(
                RichText::new("Matched Candidates")
                    .size(20.0)
                    .strong()
                    .color(theme.foreground(ui.ctx())),
            );
            ui.add_space(8.0);

            let mut toggled = None;
            for candidate in self.candidates() {
                if self.candidate_row(ui, theme, candidate) {
                    toggled = Some(candidate.id());
                }
                ui.add_space(8.0);
            }
            if let Some(candidate_id) = toggled {
                self.toggle_interview(candidate_id);
            }
        }

        output
    }

    /// Returns the newly picked job, if the selection changed this frame.
    fn job_selector(&self, ui: &mut egui::Ui, theme: &Theme) -> Option<JobId> {
        let jobs = self.jobs().data()?;
        let selected = self.selected_job();
        let mut picked = selected;

        ui.label(
            RichText::new("Select Job Description").strong().color(theme.foreground(ui.ctx())),
        );
        ui.add_space(4.0);

        let selected_text = selected
            .and_then(|id| jobs.iter().find(|job| job.id == id))
            .map(|job| job.display_label())
            .unwrap_or_else(|| "Select a job...".to_string());

        egui::ComboBox::from_id_salt("matching_job_select")
            .width(ui.available_width().min(640.0))
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for job in jobs {
                    ui.selectable_value(&mut picked, Some(job.id), job.display_label());
                }
            });

        picked.filter(|id| Some(*id) != selected)
    }

    /// Draws one matched candidate. Returns true when the interview toggle is clicked.
    fn candidate_row(
        &self,
        ui: &mut egui::Ui,
        theme: &Theme,
        candidate: &MatchedCandidate,
    ) -> bool {
        let ctx = ui.ctx().clone();
        let mut toggled = false;

        let fill = if candidate.is_shortlisted {
            theme.green(&ctx).gamma_multiply(0.08)
        } else {
            theme.surface(&ctx)
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, theme.border(&ctx)))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(16, 12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(RichText::new("👤").size(28.0).color(theme.muted_color(&ctx)));
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&candidate.candidate.name)
                                .strong()
                                .color(theme.primary(&ctx)),
                        );
                        ui.label(theme.muted(&ctx, &format!("✉ {}", candidate.candidate.email)));
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if candidate.is_shortlisted {
                            let blue = theme.blue(&ctx);
                            badge(ui, blue.gamma_multiply(0.18), blue, "✔ Shortlisted");
                        }
                        let (bg, fg) = theme.tier_colors(&ctx, candidate.tier());
                        badge(ui, bg, fg, &candidate.score_label());
                    });
                });

                ui.add_space(6.0);
                ui.columns(3, |columns| {
                    let details = [
                        ("Skills:", candidate.candidate.skills.as_deref()),
                        ("Experience:", candidate.candidate.experience.as_deref()),
                        ("Education:", candidate.candidate.education.as_deref()),
                    ];
                    for (column, (label, value)) in columns.iter_mut().zip(details) {
                        column.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(label).strong());
                            ui.label(or_placeholder(value, "None listed"));
                        });
                    }
                });

                if candidate.interview_scheduled {
                    toggled = self.interview_details(ui, theme, candidate);
                }
            });

        toggled
    }

    fn interview_details(
        &self,
        ui: &mut egui::Ui,
        theme: &Theme,
        candidate: &MatchedCandidate,
    ) -> bool {
        let ctx = ui.ctx().clone();
        let expanded = self.is_expanded(candidate.id());

        ui.add_space(6.0);
        let label =
            if expanded { "⏶ Hide Interview Details" } else { "⏷ Show Interview Details" };
        let toggled = ui
            .add(
                egui::Label::new(RichText::new(label).strong().color(theme.primary(&ctx)))
                    .sense(egui::Sense::click()),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked();

        if expanded {
            ui.add_space(6.0);
            egui::Frame::NONE
                .fill(theme.background(&ctx))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("Interview Invitation Email").strong());
                    ui.add(
                        egui::Label::new(or_placeholder(
                            candidate.interview_email.as_deref(),
                            "Interview details will be generated when scheduling is complete.",
                        ))
                        .wrap(),
                    );

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Interview Format:").strong());
                        ui.label(or_placeholder(
                            candidate.interview_format.as_deref(),
                            "Not specified",
                        ));
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Suggested Date:").strong());
                        let date = present(candidate.interview_date.as_deref())
                            .map(format_interview_date)
                            .unwrap_or_else(|| "Not scheduled".to_string());
                        ui.label(date);
                    });
                });
        }

        toggled
    }
}

fn badge(ui: &mut egui::Ui, fill: egui::Color32, text: egui::Color32, label: &str) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().strong().color(text));
        });
}
