use std::collections::HashSet;

use tracing::{
    debug,
    warn,
};

use crate::{
    core::{
        models::{
            present,
            CandidateId,
            JobDescription,
            JobId,
            MatchedCandidate,
        },
        tasks::{
            ApiOutcome,
            ApiTask,
            MatchingAction,
        },
    },
    gui::pages::LoadState,
};

pub const JOBS_FAILED: &str = "Failed to load job descriptions";
pub const CANDIDATES_FAILED: &str = "Failed to load candidates for this job";
pub const FALLBACK_COMPANY: &str = "Acme Corp";

impl MatchingAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            MatchingAction::MatchAll => "Failed to match candidates to this job",
            MatchingAction::Shortlist => "Failed to shortlist candidates",
            MatchingAction::ScheduleInterviews => "Failed to schedule interviews",
        }
    }

    pub fn label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (MatchingAction::MatchAll, false) => "Match All Candidates",
            (MatchingAction::MatchAll, true) => "Matching...",
            (MatchingAction::Shortlist, false) => "Shortlist Candidates",
            (MatchingAction::Shortlist, true) => "Shortlisting...",
            (MatchingAction::ScheduleInterviews, false) => "Schedule Interviews",
            (MatchingAction::ScheduleInterviews, true) => "Scheduling...",
        }
    }
}

/// Job selection, matched candidates and the three matching actions.
#[derive(Debug, Default)]
pub struct MatchingPage {
    jobs: LoadState<Vec<JobDescription>>,
    selected_job: Option<JobId>,
    candidates: Vec<MatchedCandidate>,
    loading_candidates: bool,
    matching: bool,
    shortlisting: bool,
    scheduling: bool,
    error: Option<&'static str>,
    expanded: HashSet<CandidateId>,
}

impl MatchingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &LoadState<Vec<JobDescription>> {
        &self.jobs
    }

    pub fn selected_job(&self) -> Option<JobId> {
        self.selected_job
    }

    pub fn candidates(&self) -> &[MatchedCandidate] {
        &self.candidates
    }

    pub fn is_loading_candidates(&self) -> bool {
        self.loading_candidates
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_busy(&self, action: MatchingAction) -> bool {
        match action {
            MatchingAction::MatchAll => self.matching,
            MatchingAction::Shortlist => self.shortlisting,
            MatchingAction::ScheduleInterviews => self.scheduling,
        }
    }

    fn set_busy(&mut self, action: MatchingAction, busy: bool) {
        match action {
            MatchingAction::MatchAll => self.matching = busy,
            MatchingAction::Shortlist => self.shortlisting = busy,
            MatchingAction::ScheduleInterviews => self.scheduling = busy,
        }
    }

    pub fn mount(&mut self) -> Vec<ApiTask> {
        *self = Self::default();
        self.jobs.start();
        vec![ApiTask::ListJobs]
    }

    pub fn apply(&mut self, outcome: ApiOutcome) -> Vec<ApiTask> {
        match outcome {
            ApiOutcome::Jobs(result) => {
                self.jobs.finish(result, JOBS_FAILED);

                let first = self.jobs.data().and_then(|jobs| jobs.first()).map(|job| job.id);
                match first {
                    Some(job_id) => return self.select_job(job_id),
                    None => debug!("No job to select"),
                }
            }

            ApiOutcome::JobCandidates { job_id, result } => {
                if self.selected_job != Some(job_id) {
                    debug!(job_id, "Dropping candidates for a job that is no longer selected");
                    return Vec::new();
                }

                self.loading_candidates = false;
                match result {
                    Ok(candidates) => self.candidates = candidates,
                    Err(_) => self.error = Some(CANDIDATES_FAILED),
                }
            }

            ApiOutcome::ActionFinished { action, job_id, result } => {
                self.set_busy(action, false);

                match result {
                    Ok(candidates) if self.selected_job == Some(job_id) => {
                        self.candidates = candidates;
                    }
                    Ok(_) => debug!(job_id, "Action finished for a job that is no longer selected"),
                    Err(_) => self.error = Some(action.failure_message()),
                }
            }

            other => warn!("Matching page ignoring unexpected outcome: {:?}", other),
        }

        Vec::new()
    }

    /// Switches to another job; its candidates replace the current list once loaded.
    pub fn select_job(&mut self, job_id: JobId) -> Vec<ApiTask> {
        self.selected_job = Some(job_id);
        self.candidates.clear();
        self.expanded.clear();
        self.error = None;
        self.loading_candidates = true;

        vec![ApiTask::JobCandidates(job_id)]
    }

    pub fn can_run(&self, action: MatchingAction) -> bool {
        if self.selected_job.is_none() || self.is_busy(action) {
            return false;
        }

        match action {
            MatchingAction::MatchAll => true,
            MatchingAction::Shortlist => !self.candidates.is_empty(),
            MatchingAction::ScheduleInterviews => self.candidates.iter().any(|c| c.is_shortlisted),
        }
    }

    /// Marks the action busy and returns the task to run, or `None` while it is disabled.
    pub fn start_action(&mut self, action: MatchingAction) -> Option<ApiTask> {
        if !self.can_run(action) {
            return None;
        }
        let job_id = self.selected_job?;

        self.error = None;
        self.set_busy(action, true);

        Some(match action {
            MatchingAction::MatchAll => ApiTask::MatchAll(job_id),
            MatchingAction::Shortlist => ApiTask::Shortlist(job_id),
            MatchingAction::ScheduleInterviews => {
                ApiTask::ScheduleInterviews { job_id, company_name: self.company_name() }
            }
        })
    }

    pub fn toggle_interview(&mut self, candidate_id: CandidateId) {
        if !self.expanded.remove(&candidate_id) {
            self.expanded.insert(candidate_id);
        }
    }

    pub fn is_expanded(&self, candidate_id: CandidateId) -> bool {
        self.expanded.contains(&candidate_id)
    }

    /// Company of the selected job as recorded in the loaded job list.
    pub fn company_name(&self) -> String {
        let company = self
            .jobs
            .data()
            .and_then(|jobs| jobs.iter().find(|job| Some(job.id) == self.selected_job))
            .and_then(|job| present(job.company.as_deref()));

        match company {
            Some(company) => company.to_string(),
            None => {
                warn!(job_id = ?self.selected_job, "No company for selected job, using fallback");
                FALLBACK_COMPANY.to_string()
            }
        }
    }
}
