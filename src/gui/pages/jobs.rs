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
            present,
            JobDescription,
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
        router,
        theme::Theme,
    },
};

pub const LOAD_FAILED: &str = "Failed to load job descriptions";

#[derive(Debug, Default)]
pub struct JobsPage {
    jobs: LoadState<Vec<JobDescription>>,
}

impl JobsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &LoadState<Vec<JobDescription>> {
        &self.jobs
    }

    pub fn mount(&mut self) -> Vec<ApiTask> {
        self.jobs.start();
        vec![ApiTask::ListJobs]
    }

    pub fn apply(&mut self, outcome: ApiOutcome) -> Vec<ApiTask> {
        match outcome {
            ApiOutcome::Jobs(result) => self.jobs.finish(result, LOAD_FAILED),
            other => warn!("Jobs page ignoring unexpected outcome: {:?}", other),
        }
        Vec::new()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> PageOutput {
        let mut output = PageOutput::default();

        let jobs = match &self.jobs {
            LoadState::Idle | LoadState::Loading => {
                feedback::loading_spinner(ui);
                return output;
            }
            LoadState::Failed(message) => {
                feedback::error_panel(ui, theme, message);
                return output;
            }
            LoadState::Loaded(jobs) => jobs,
        };

        let add_new = feedback::page_header_with_action(
            ui,
            theme,
            "Job Descriptions",
            Some("Manage your job descriptions and requirements."),
            "Add New Job",
        );
        if add_new {
            output.navigate_to = Some(router::NEW_JOB.to_string());
        }

        if jobs.is_empty() {
            let add = feedback::empty_state(
                ui,
                theme,
                "💼",
                "No job descriptions",
                "Get started by creating a new job description.",
                Some("Add Job Description"),
            );
            if add {
                output.navigate_to = Some(router::NEW_JOB.to_string());
            }
            return output;
        }

        let ctx = ui.ctx().clone();
        let spacing = 16.0;
        let columns = if ui.available_width() > 900.0 { 3.0 } else { 1.0 };
        let card_width =
            ((ui.available_width() - spacing * (columns - 1.0)) / columns - 34.0).max(220.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

            for job in jobs {
                let response = Card::new().clickable(true).width(card_width).show(ui, theme, |ui| {
                    ui.label(
                        RichText::new(&job.title).size(17.0).strong().color(theme.foreground(&ctx)),
                    );
                    if let Some(company) = present(job.company.as_deref()) {
                        ui.label(theme.muted(&ctx, company));
                    }
                    if let Some(summary) = present(job.summary.as_deref()) {
                        ui.add_space(6.0);
                        ui.add(egui::Label::new(summary).wrap());
                    }
                    if let Some(skills) = present(job.required_skills.as_deref()) {
                        ui.add_space(6.0);
                        ui.label(RichText::new("Required Skills").strong().small());
                        ui.add(egui::Label::new(theme.muted(&ctx, skills)).wrap());
                    }
                });

                if response.clicked {
                    output.navigate_to = Some(router::job_detail(job.id));
                }
            }
        });

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, title: &str) -> JobDescription {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn test_mount_and_load() {
        let mut page = JobsPage::new();
        assert_eq!(page.mount(), vec![ApiTask::ListJobs]);
        assert_eq!(page.jobs(), &LoadState::Loading);

        page.apply(ApiOutcome::Jobs(Ok(vec![job(1, "QA"), job(2, "SRE")])));
        assert_eq!(page.jobs().data().map(Vec::len), Some(2));
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let mut page = JobsPage::new();
        page.mount();
        page.apply(ApiOutcome::Jobs(Ok(Vec::new())));
        assert_eq!(page.jobs().data(), Some(&Vec::new()));
        assert_eq!(page.jobs().error(), None);
    }

    #[test]
    fn test_failure_message() {
        let mut page = JobsPage::new();
        page.mount();
        page.apply(ApiOutcome::Jobs(Err("timeout".to_string())));
        assert_eq!(page.jobs().error(), Some("Failed to load job descriptions"));
    }
}
