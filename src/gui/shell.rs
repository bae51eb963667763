use tracing::{
    debug,
    info,
};

use crate::{
    core::tasks::{
        ApiTask,
        PageTag,
        TaskResult,
    },
    gui::{
        pages::{
            Page,
            PageOutput,
        },
        router::{
            self,
            Router,
        },
    },
};

/// A request ready to hand to the task manager.
pub type Dispatch = (PageTag, ApiTask);

/// Route state plus the mounted page. Knows nothing about egui or the network.
#[derive(Debug)]
pub struct Shell {
    router: Router,
    page: Option<Page>,
    generation: u64,
}

impl Shell {
    /// Starts on `path` and mounts its page.
    pub fn new(path: &str) -> (Self, Vec<Dispatch>) {
        let mut shell = Self { router: Router::new(path), page: None, generation: 0 };
        let dispatches = shell.mount_current();
        (shell, dispatches)
    }

    pub fn current_path(&self) -> &str {
        self.router.current()
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn page_mut(&mut self) -> Option<&mut Page> {
        self.page.as_mut()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Same-path navigation keeps the mounted page as it is.
    pub fn navigate(&mut self, path: &str) -> Vec<Dispatch> {
        if !self.router.navigate(path) {
            debug!(path, "Already on route");
            return Vec::new();
        }
        info!(path, "Navigating");
        self.mount_current()
    }

    /// Remounts the current page, e.g. after the service address changed.
    pub fn reload(&mut self) -> Vec<Dispatch> {
        info!(path = self.router.current(), "Reloading route");
        self.mount_current()
    }

    /// Routes a finished task to the mounted page, dropping results for earlier mounts.
    pub fn accept(&mut self, result: TaskResult) -> Vec<Dispatch> {
        let tag = result.tag;
        if Some(tag) != self.current_tag() {
            debug!(
                page = ?tag.page,
                generation = tag.generation,
                current = self.generation,
                "Dropping stale result"
            );
            return Vec::new();
        }

        let Some(page) = self.page.as_mut() else {
            return Vec::new();
        };
        let tasks = page.apply(result.outcome);
        self.tag_all(tasks)
    }

    /// Tags the page's requests and extracts any navigation it asked for.
    pub fn handle_output(&mut self, output: PageOutput) -> Vec<Dispatch> {
        let mut dispatches = self.tag_all(output.tasks);
        if let Some(path) = output.navigate_to {
            dispatches.extend(self.navigate(&path));
        }
        dispatches
    }

    fn mount_current(&mut self) -> Vec<Dispatch> {
        self.generation += 1;

        self.page = router::resolve(self.router.current()).map(Page::new);
        let tasks = match self.page.as_mut() {
            Some(page) => page.mount(),
            None => {
                info!(path = self.router.current(), "No page for route");
                Vec::new()
            }
        };
        self.tag_all(tasks)
    }

    fn current_tag(&self) -> Option<PageTag> {
        self.page.as_ref().map(|page| PageTag { page: page.kind(), generation: self.generation })
    }

    fn tag_all(&self, tasks: Vec<ApiTask>) -> Vec<Dispatch> {
        match self.current_tag() {
            Some(tag) => tasks.into_iter().map(|task| (tag, task)).collect(),
            None => Vec::new(),
        }
    }
}
