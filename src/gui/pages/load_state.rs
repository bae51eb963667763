/// Lifecycle of one page's primary data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Holds the fixed, user-facing message for the call site that failed.
    Failed(&'static str),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn start(&mut self) {
        *self = LoadState::Loading;
    }

    pub fn finish<E>(&mut self, result: Result<T, E>, failure: &'static str) {
        *self = match result {
            Ok(data) => LoadState::Loaded(data),
            Err(_) => LoadState::Failed(failure),
        };
    }

    /// Nothing to show yet: either not started or waiting on the service.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
