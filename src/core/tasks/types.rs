use crate::{
    core::models::{
        Candidate,
        DashboardStats,
        JobDescription,
        JobId,
        MatchedCandidate,
    },
    gui::router::PageKind,
};

/// Identifies the page instance a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTag {
    pub page: PageKind,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchingAction {
    MatchAll,
    Shortlist,
    ScheduleInterviews,
}

/// Work a page asks the task manager to run against the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiTask {
    ListJobs,
    ListCandidates,
    DashboardStats,
    JobCandidates(JobId),
    MatchAll(JobId),
    Shortlist(JobId),
    ScheduleInterviews { job_id: JobId, company_name: String },
}

impl ApiTask {
    pub fn task_type(&self) -> &'static str {
        match self {
            ApiTask::ListJobs => "list_jobs",
            ApiTask::ListCandidates => "list_candidates",
            ApiTask::DashboardStats => "dashboard_stats",
            ApiTask::JobCandidates(_) => "job_candidates",
            ApiTask::MatchAll(_) => "match_all",
            ApiTask::Shortlist(_) => "shortlist",
            ApiTask::ScheduleInterviews { .. } => "schedule_interviews",
        }
    }
}

/// Result of an `ApiTask`. Errors are already logged and flattened to text.
#[derive(Debug, Clone)]
pub enum ApiOutcome {
    Jobs(Result<Vec<JobDescription>, String>),
    Candidates(Result<Vec<Candidate>, String>),
    DashboardStats(Result<DashboardStats, String>),
    JobCandidates { job_id: JobId, result: Result<Vec<MatchedCandidate>, String> },
    /// A matching action followed by a fresh read of the job's candidates.
    ActionFinished {
        action: MatchingAction,
        job_id: JobId,
        result: Result<Vec<MatchedCandidate>, String>,
    },
}

#[derive(Debug, Clone)]
pub struct TaskResult {
    pub tag: PageTag,
    pub outcome: ApiOutcome,
}
