use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::{Illustration, WordEntry};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User asked for a term
    Search(String),
    LookupFinished {
        cycle: SearchCycle,
        result: Result<WordEntry, LookupFailure>,
    },
    IllustrationFinished {
        cycle: SearchCycle,
        result: Result<Illustration, String>,
    },
    Searching {
        cycle: SearchCycle,
        term: String,
    },
    ShowEntry(WordEntry),
    ShowIllustration(Illustration),
    ShowNotice(Notice),
    /// No further output will arrive for this cycle
    CycleSettled(SearchCycle),
    UiEvent(UiEvent),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Close,
}

/// Identifier of one search cycle. Strictly increasing per driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SearchCycle(pub u64);

impl SearchCycle {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SearchCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Terminal lookup failure as seen by the presentation side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    NotFound { term: String },
    Unavailable { reason: String },
}

/// User-facing message shown when a search cycle fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    Found,
    ImagePending,
    ImageReady,
    ImageFailed,
    NotFound,
}
