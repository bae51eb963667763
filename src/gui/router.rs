use crate::core::models::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    Jobs,
    Candidates,
    Matching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
    pub page: PageKind,
}

/// Every path the shell can render. Order is the navbar order.
pub const ROUTES: &[Route] = &[
    Route { path: "/", label: "Dashboard", page: PageKind::Dashboard },
    Route { path: "/jobs", label: "Jobs", page: PageKind::Jobs },
    Route { path: "/candidates", label: "Candidates", page: PageKind::Candidates },
    Route { path: "/matching", label: "Matching", page: PageKind::Matching },
];

pub const HOME: &str = "/";
pub const JOBS: &str = "/jobs";
pub const CANDIDATES: &str = "/candidates";
pub const MATCHING: &str = "/matching";

// Linked from several pages; no route renders these yet.
pub const NEW_JOB: &str = "/jobs/new";
pub const NEW_CANDIDATE: &str = "/candidates/new";

pub fn job_detail(id: JobId) -> String {
    format!("/jobs/{id}")
}

pub fn resolve(path: &str) -> Option<PageKind> {
    ROUTES.iter().find(|route| route.path == path).map(|route| route.page)
}

pub fn is_active(current_path: &str, route_path: &str) -> bool {
    current_path == route_path
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: String,
}

impl Router {
    pub fn new(path: impl Into<String>) -> Self {
        Self { current: path.into() }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Returns `false` when already on `path`, so the caller can skip remounting.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.current == path {
            return false;
        }
        self.current = path.to_string();
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(resolve("/"), Some(PageKind::Dashboard));
        assert_eq!(resolve("/jobs"), Some(PageKind::Jobs));
        assert_eq!(resolve("/candidates"), Some(PageKind::Candidates));
        assert_eq!(resolve("/matching"), Some(PageKind::Matching));
    }

    #[test]
    fn test_dead_links_do_not_resolve() {
        assert_eq!(resolve(NEW_JOB), None);
        assert_eq!(resolve(NEW_CANDIDATE), None);
        assert_eq!(resolve(&job_detail(12)), None);
        assert_eq!(resolve("/jobs/"), None);
    }

    #[test]
    fn test_active_is_exact_match() {
        assert!(is_active("/jobs", "/jobs"));
        assert!(!is_active("/jobs/new", "/jobs"));
        assert!(!is_active("/jobs", "/"));
        assert!(!is_active("/", "/jobs"));
    }

    #[test]
    fn test_navigate_same_path_is_noop() {
        let mut router = Router::default();
        assert_eq!(router.current(), "/");
        assert!(!router.navigate("/"));
        assert!(router.navigate("/matching"));
        assert_eq!(router.current(), "/matching");
        assert!(!router.navigate("/matching"));
    }

    #[test]
    fn test_every_route_has_unique_path() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.page, b.page);
            }
        }
    }
}
