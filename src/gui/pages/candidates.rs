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
        models::{
            or_placeholder,
            Candidate,
        },
        tasks::{
            ApiOutcome,
            ApiTask,
        },
    },
    gui::{
        components::{
            feedback,
            Card,
        },
        theme::Theme,
    },
};

pub const LOAD_FAILED: &str = "Failed to load candidates. Please try again.";
pub const EMPTY_MESSAGE: &str = "No candidates found. Upload resumes to add candidates.";

#[derive(Debug, Default)]
pub struct CandidatesPage {
    candidates: LoadState<Vec<Candidate>>,
}

impl CandidatesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &LoadState<Vec<Candidate>> {
        &self.candidates
    }

    pub fn mount(&mut self) -> Vec<ApiTask> {
        self.candidates.start();
        vec![ApiTask::ListCandidates]
    }

    pub fn apply(&mut self, outcome: ApiOutcome) -> Vec<ApiTask> {
        match outcome {
            ApiOutcome::Candidates(result) => self.candidates.finish(result, LOAD_FAILED),
            other => warn!("Candidates page ignoring unexpected outcome: {:?}", other),
        }
        Vec::new()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> PageOutput {
        let output = PageOutput::default();

        let candidates = match &self.candidates {
            LoadState::Idle | LoadState::Loading => {
                feedback::loading_spinner(ui);
                return output;
            }
            LoadState::Failed(message) => {
                feedback::error_panel(ui, theme, message);
                return output;
            }
            LoadState::Loaded(candidates) => candidates,
        };

        feedback::page_header(
            ui,
            theme,
            "Candidates",
            Some("View and manage all candidates in the system"),
        );

        if candidates.is_empty() {
            feedback::notice_panel(ui, theme.yellow(ui.ctx()), EMPTY_MESSAGE);
            return output;
        }

        let ctx = ui.ctx().clone();
        let spacing = 16.0;
        let columns = match ui.available_width() {
            w if w > 1000.0 => 3.0,
            w if w > 640.0 => 2.0,
            _ => 1.0,
        };
        let card_width =
            ((ui.available_width() - spacing * (columns - 1.0)) / columns - 34.0).max(220.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

            for candidate in candidates {
                Card::new().width(card_width).show(ui, theme, |ui| {
                    ui.label(
                        RichText::new(&candidate.name)
                            .size(18.0)
                            .strong()
                            .color(theme.foreground(&ctx)),
                    );
                    ui.label(theme.muted(&ctx, &candidate.email));

                    let sections = [
                        ("SKILLS", candidate.skills.as_deref(), "No skills listed"),
                        ("EXPERIENCE", candidate.experience.as_deref(), "No experience listed"),
                        ("EDUCATION", candidate.education.as_deref(), "No education listed"),
                    ];
                    for (heading, value, placeholder) in sections {
                        ui.add_space(8.0);
                        ui.separator();
                        ui.label(theme.muted(&ctx, heading).small().strong());
                        ui.add(egui::Label::new(or_placeholder(value, placeholder)).wrap());
                    }
                });
            }
        });

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i64, name: &str) -> Candidate {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
        }))
        .unwrap()
    }

    #[test]
    fn test_mount_requests_candidates() {
        let mut page = CandidatesPage::new();
        assert_eq!(page.mount(), vec![ApiTask::ListCandidates]);
        assert!(page.candidates().is_pending());
    }

    #[test]
    fn test_loaded_candidates() {
        let mut page = CandidatesPage::new();
        page.mount();
        page.apply(ApiOutcome::Candidates(Ok(vec![candidate(1, "Ada"), candidate(2, "Grace")])));

        let names: Vec<&str> = page
            .candidates()
            .data()
            .map(|c| c.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[test]
    fn test_failure_message() {
        let mut page = CandidatesPage::new();
        page.mount();
        page.apply(ApiOutcome::Candidates(Err("HTTP 502".to_string())));
        assert_eq!(page.candidates().error(), Some(LOAD_FAILED));
    }
}
