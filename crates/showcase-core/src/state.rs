//! Application state machine
//!
//! Requests are pure decisions (`request_*` returns the transition that would
//! happen, if any); [`StateMachine::apply`] is the only way the state
//! changes.

use std::fmt;

/// Current application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Landing,
    Gallery,
    Detail,
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppState::Landing => write!(f, "landing"),
            AppState::Gallery => write!(f, "gallery"),
            AppState::Detail => write!(f, "detail"),
        }
    }
}

/// A legal state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Landing -> Gallery
    EnterGallery,
    /// Gallery -> Detail for the framework at this registry index
    ShowDetail { framework: usize },
    /// Landing -> Detail, from a framework link opened directly
    OpenDetail { framework: usize },
    /// Detail -> Gallery
    ReturnToGallery,
}

impl Transition {
    pub fn from(&self) -> AppState {
        match self {
            Transition::EnterGallery | Transition::OpenDetail { .. } => AppState::Landing,
            Transition::ShowDetail { .. } => AppState::Gallery,
            Transition::ReturnToGallery => AppState::Detail,
        }
    }

    pub fn to(&self) -> AppState {
        match self {
            Transition::EnterGallery | Transition::ReturnToGallery => AppState::Gallery,
            Transition::ShowDetail { .. } | Transition::OpenDetail { .. } => AppState::Detail,
        }
    }

    /// Framework selected by this transition, if it enters Detail
    pub fn framework(&self) -> Option<usize> {
        match self {
            Transition::ShowDetail { framework } | Transition::OpenDetail { framework } => {
                Some(*framework)
            }
            Transition::EnterGallery | Transition::ReturnToGallery => None,
        }
    }
}

/// Holds the application state and the selected framework
///
/// Invariant: `selected` is `Some` iff the state is `Detail`.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    state: AppState,
    selected: Option<usize>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Gallery is reachable from Landing and Detail; already in Gallery is a no-op
    pub fn request_gallery(&self) -> Option<Transition> {
        match self.state {
            AppState::Landing => Some(Transition::EnterGallery),
            AppState::Detail => Some(Transition::ReturnToGallery),
            AppState::Gallery => None,
        }
    }

    /// Detail is entered from Gallery or straight from Landing, never
    /// re-entered from Detail
    pub fn request_detail(&self, framework: usize) -> Option<Transition> {
        match self.state {
            AppState::Landing => Some(Transition::OpenDetail { framework }),
            AppState::Gallery => Some(Transition::ShowDetail { framework }),
            AppState::Detail => None,
        }
    }

    /// The enter control only exists in Landing
    pub fn request_enter(&self) -> Option<Transition> {
        match self.state {
            AppState::Landing => Some(Transition::EnterGallery),
            AppState::Gallery | AppState::Detail => None,
        }
    }

    /// The back action only exists in Detail
    pub fn request_back(&self) -> Option<Transition> {
        match self.state {
            AppState::Detail => Some(Transition::ReturnToGallery),
            AppState::Landing | AppState::Gallery => None,
        }
    }

    /// Perform a transition; returns false (and changes nothing) if it does
    /// not start from the current state
    pub fn apply(&mut self, transition: Transition) -> bool {
        if transition.from() != self.state {
            return false;
        }

        self.state = transition.to();
        self.selected = transition.framework();
        true
    }
}
