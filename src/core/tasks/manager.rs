use std::sync::{
    mpsc,
    Arc,
};

use eframe::egui;
use tokio::runtime::Runtime;
use tracing::{
    debug,
    error,
};

use super::types::{
    ApiOutcome,
    ApiTask,
    MatchingAction,
    PageTag,
    TaskResult,
};
use crate::{
    api::ApiClient,
    core::{
        models::{
            DashboardStats,
            JobId,
            MatchedCandidate,
        },
        TalentMatchError,
    },
};

/// Runs API work off the UI thread and hands results back through a channel.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    api: Arc<ApiClient>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<egui::Context>,
}

impl TaskManager {
    pub fn new(api: ApiClient) -> Result<Self, TalentMatchError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("talentmatch-tasks")
            .enable_all()
            .build()?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime: Arc::new(runtime), api: Arc::new(api), receiver, sender, repaint: None })
    }

    /// Wakes the UI when a result arrives so it is drained without user input.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Requests already in flight keep the client they started with.
    pub fn replace_api(&mut self, api: ApiClient) {
        self.api = Arc::new(api);
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn dispatch(&self, tag: PageTag, task: ApiTask) {
        let sender = self.sender.clone();
        let api = Arc::clone(&self.api);
        let repaint = self.repaint.clone();

        debug!(page = ?tag.page, generation = tag.generation, task = task.task_type(), "dispatch");

        self.runtime.spawn(async move {
            let outcome = execute(&api, task).await;

            // The receiver only goes away when the app shuts down.
            let _ = sender.send(TaskResult { tag, outcome });

            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

pub async fn execute(api: &ApiClient, task: ApiTask) -> ApiOutcome {
    let task_type = task.task_type();

    match task {
        ApiTask::ListJobs => {
            ApiOutcome::Jobs(api.list_jobs().await.map_err(|e| report(task_type, e)))
        }

        ApiTask::ListCandidates => {
            ApiOutcome::Candidates(api.list_candidates().await.map_err(|e| report(task_type, e)))
        }

        ApiTask::DashboardStats => {
            ApiOutcome::DashboardStats(dashboard_stats(api).await.map_err(|e| report(task_type, e)))
        }

        ApiTask::JobCandidates(job_id) => ApiOutcome::JobCandidates {
            job_id,
            result: candidates_for(api, job_id).await.map_err(|e| report(task_type, e)),
        },

        ApiTask::MatchAll(job_id) => {
            let result = async {
                api.match_all(job_id).await?;
                candidates_for(api, job_id).await
            }
            .await;

            ApiOutcome::ActionFinished {
                action: MatchingAction::MatchAll,
                job_id,
                result: result.map_err(|e| report(task_type, e)),
            }
        }

        ApiTask::Shortlist(job_id) => {
            let result = async {
                api.shortlist(job_id).await?;
                candidates_for(api, job_id).await
            }
            .await;

            ApiOutcome::ActionFinished {
                action: MatchingAction::Shortlist,
                job_id,
                result: result.map_err(|e| report(task_type, e)),
            }
        }

        ApiTask::ScheduleInterviews { job_id, company_name } => {
            let result = async {
                api.schedule_interviews(job_id, &company_name).await?;
                candidates_for(api, job_id).await
            }
            .await;

            ApiOutcome::ActionFinished {
                action: MatchingAction::ScheduleInterviews,
                job_id,
                result: result.map_err(|e| report(task_type, e)),
            }
        }
    }
}

async fn candidates_for(
    api: &ApiClient,
    job_id: JobId,
) -> Result<Vec<MatchedCandidate>, TalentMatchError> {
    Ok(api.job_with_candidates(job_id).await?.candidates)
}

async fn dashboard_stats(api: &ApiClient) -> Result<DashboardStats, TalentMatchError> {
    let (jobs, candidates, shortlisted, interviews) = futures::try_join!(
        api.list_jobs(),
        api.list_candidates(),
        api.shortlisted_count(),
        api.interviews_count(),
    )?;

    Ok(DashboardStats { jobs: jobs.len(), candidates: candidates.len(), shortlisted, interviews })
}

fn report(task_type: &str, error: TalentMatchError) -> String {
    error!(task = task_type, "API request failed: {error}");
    error.to_string()
}
