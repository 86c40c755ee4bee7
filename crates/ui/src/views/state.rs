use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LoadFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::LoadFailed => "question bank could not be loaded",
            ViewError::Unknown => "unexpected view failure",
        }
    }
}

/// Where a view's startup resource stands.
///
/// Failures are kept apart from `Loading` so they can be logged, but the quiz
/// pages render both the same way: the bank either arrives or the page keeps
/// showing "Cargando...".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(ViewError),
}

impl LoadState {
    #[must_use]
    pub fn is_ready(self) -> bool {
        self == LoadState::Ready
    }
}

#[must_use]
pub fn load_state(resource: Resource<Result<(), ViewError>>) -> LoadState {
    match resource.state().cloned() {
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(())) => LoadState::Ready,
            Some(Err(err)) => LoadState::Failed(*err),
            None => LoadState::Failed(ViewError::Unknown),
        },
        UseResourceState::Pending | UseResourceState::Paused | UseResourceState::Stopped => {
            LoadState::Loading
        }
    }
}
