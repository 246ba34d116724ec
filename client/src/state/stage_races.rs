//! Stage-race list state and its reducer.
//!
//! DESIGN
//! ======
//! `StageRaceState::apply` is the only place list/modal/error fields change.
//! It performs no I/O; network calls live in `state::effects`, which dispatch
//! a `StageRaceAction` once each request resolves.
//!
//! Fetch results are tagged with the `fetch_seq` issued by `FetchStarted`.
//! Starting a newer fetch or completing an add/delete bumps the sequence, so a
//! late list response can never overwrite a more recent mutation. A mutation
//! that lands while a fetch is pending drops that fetch, and the effect layer
//! issues a fresh one (see `supersedes_fetch`).

#[cfg(test)]
#[path = "stage_races_test.rs"]
mod stage_races_test;

use crate::net::types::{StageRace, StageRaceId, sort_by_earliest_date};

/// Operation a failure is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageRaceOp {
    Fetch,
    Create,
    Delete,
}

impl StageRaceOp {
    /// Fixed banner message shown for a failed operation.
    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Fetch => "Error loading stage races",
            Self::Create => "Error adding stage race",
            Self::Delete => "Error deleting stage race",
        }
    }
}

/// Everything that can happen to the stage-race screen.
#[derive(Clone, Debug, PartialEq)]
pub enum StageRaceAction {
    /// A list request is about to be sent.
    FetchStarted,
    /// A list request finished; `seq` is the value current when it started.
    FetchSuccess { seq: u64, payload: Vec<StageRace> },
    /// A list request failed.
    FetchError { seq: u64, message: String },
    /// A create or delete request failed.
    HasError { message: String },
    /// The server persisted a new stage race.
    AddStageRace(StageRace),
    /// The server deleted the stage race with this id.
    DeleteStageRace(StageRaceId),
    /// Switch between the "add race" and "add stage" sub-forms.
    ToggleStagesForm,
    /// Open or close the creation modal.
    ToggleModal,
    /// Dismiss the error banner.
    ClearError,
}

/// Stage-race screen state, shared through Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct StageRaceState {
    pub loading: bool,
    pub error: bool,
    pub error_message: String,
    pub stage_races: Vec<StageRace>,
    pub add_stages: bool,
    pub modal_open: bool,
    pub fetch_seq: u64,
}

impl Default for StageRaceState {
    fn default() -> Self {
        Self {
            loading: true,
            error: false,
            error_message: String::new(),
            stage_races: Vec::new(),
            add_stages: false,
            modal_open: false,
            fetch_seq: 0,
        }
    }
}

impl StageRaceState {
    /// Apply one action.
    pub fn apply(&mut self, action: StageRaceAction) {
        match action {
            StageRaceAction::FetchStarted => {
                self.loading = true;
                self.fetch_seq += 1;
            }
            StageRaceAction::FetchSuccess { seq, payload } => {
                if seq != self.fetch_seq {
                    return;
                }
                self.loading = false;
                self.stage_races = sort_by_earliest_date(&payload);
            }
            StageRaceAction::FetchError { seq, message } => {
                if seq != self.fetch_seq {
                    return;
                }
                self.set_error(message);
            }
            StageRaceAction::HasError { message } => self.set_error(message),
            StageRaceAction::AddStageRace(race) => {
                let mut races = self.stage_races.clone();
                races.push(race);
                self.stage_races = sort_by_earliest_date(&races);
                self.modal_open = false;
                self.add_stages = false;
                self.invalidate_pending_fetch();
            }
            StageRaceAction::DeleteStageRace(id) => {
                self.stage_races.retain(|race| race.id != id);
                self.invalidate_pending_fetch();
            }
            StageRaceAction::ToggleStagesForm => self.add_stages = !self.add_stages,
            StageRaceAction::ToggleModal => {
                self.modal_open = !self.modal_open;
                if !self.modal_open {
                    self.add_stages = false;
                }
            }
            StageRaceAction::ClearError => {
                self.error = false;
                self.error_message.clear();
            }
        }
    }

    /// True when applying `action` would drop a pending list request.
    ///
    /// The dropped response may have carried changes made elsewhere, so the
    /// caller should start a new fetch after dispatching.
    #[must_use]
    pub fn supersedes_fetch(&self, action: &StageRaceAction) -> bool {
        self.loading
            && matches!(action, StageRaceAction::AddStageRace(_) | StageRaceAction::DeleteStageRace(_))
    }

    /// `apply` for callers that hold the state by value.
    #[must_use]
    pub fn reduce(mut self, action: StageRaceAction) -> Self {
        self.apply(action);
        self
    }

    fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = true;
        self.error_message = message;
    }

    fn invalidate_pending_fetch(&mut self) {
        self.fetch_seq += 1;
        self.loading = false;
    }
}
