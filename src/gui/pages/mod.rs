pub mod candidates;
pub mod dashboard;
pub mod jobs;
pub mod load_state;
pub mod matching;

use eframe::egui;
pub use load_state::LoadState;

use self::{
    candidates::CandidatesPage,
    dashboard::DashboardPage,
    jobs::JobsPage,
    matching::MatchingPage,
};
use crate::{
    core::tasks::{
        ApiOutcome,
        ApiTask,
    },
    gui::{
        router::PageKind,
        theme::Theme,
    },
};

/// What a page wants done after drawing a frame.
#[derive(Debug, Default, PartialEq)]
pub struct PageOutput {
    pub tasks: Vec<ApiTask>,
    pub navigate_to: Option<String>,
}

/// The mounted page container. Each variant owns its own fetch lifecycle.
#[derive(Debug)]
pub enum Page {
    Dashboard(DashboardPage),
    Jobs(JobsPage),
    Candidates(CandidatesPage),
    Matching(MatchingPage),
}

impl Page {
    pub fn new(kind: PageKind) -> Self {
        match kind {
            PageKind::Dashboard => Page::Dashboard(DashboardPage::new()),
            PageKind::Jobs => Page::Jobs(JobsPage::new()),
            PageKind::Candidates => Page::Candidates(CandidatesPage::new()),
            PageKind::Matching => Page::Matching(MatchingPage::new()),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Page::Dashboard(_) => PageKind::Dashboard,
            Page::Jobs(_) => PageKind::Jobs,
            Page::Candidates(_) => PageKind::Candidates,
            Page::Matching(_) => PageKind::Matching,
        }
    }

    pub fn mount(&mut self) -> Vec<ApiTask> {
        match self {
            Page::Dashboard(page) => page.mount(),
            Page::Jobs(page) => page.mount(),
            Page::Candidates(page) => page.mount(),
            Page::Matching(page) => page.mount(),
        }
    }

    pub fn apply(&mut self, outcome: ApiOutcome) -> Vec<ApiTask> {
        match self {
            Page::Dashboard(page) => page.apply(outcome),
            Page::Jobs(page) => page.apply(outcome),
            Page::Candidates(page) => page.apply(outcome),
            Page::Matching(page) => page.apply(outcome),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> PageOutput {
        match self {
            Page::Dashboard(page) => page.show(ui, theme),
            Page::Jobs(page) => page.show(ui, theme),
            Page::Candidates(page) => page.show(ui, theme),
            Page::Matching(page) => page.show(ui, theme),
        }
    }
}
