//! Add-stage-race form state.
//!
//! Holds the race name, the stages collected so far, and the raw inputs of
//! the "add stage" sub-form. Stages are kept ordered by date as they are
//! added so the form list never needs re-sorting.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::{DraftError, ProvisionalStage, ProvisionalStageRace, insert_by_date};

/// Draft stage race being edited in the creation modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageRaceDraft {
    pub name: String,
    pub stages: Vec<ProvisionalStage>,
    pub stage_name: String,
    pub stage_date: String,
    pub error: Option<String>,
    /// A create request for this draft is in flight.
    pub saving: bool,
}

impl StageRaceDraft {
    /// The "Add Stage" button is enabled once the race has a name.
    #[must_use]
    pub fn can_add_stage(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The race can be saved once it has a name and at least one stage,
    /// and no earlier save is still pending.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.saving && self.can_add_stage() && !self.stages.is_empty()
    }

    /// Validate the stage inputs and insert the stage in date order.
    ///
    /// On success the stage inputs are cleared. On failure the inputs are
    /// kept and `error` carries the validation message.
    ///
    /// # Errors
    ///
    /// Returns the [`DraftError`] describing the invalid input.
    pub fn add_stage(&mut self) -> Result<(), DraftError> {
        match ProvisionalStage::new(&self.stage_name, &self.stage_date) {
            Ok(stage) => {
                insert_by_date(&mut self.stages, stage);
                self.stage_name.clear();
                self.stage_date.clear();
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Drop the stage at `index`; out-of-range indices are ignored.
    pub fn remove_stage(&mut self, index: usize) {
        if index < self.stages.len() {
            self.stages.remove(index);
        }
    }

    /// Discard the pending stage inputs.
    pub fn clear_stage_inputs(&mut self) {
        self.stage_name.clear();
        self.stage_date.clear();
        self.error = None;
    }

    /// Build the creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyName`] or [`DraftError::NoStages`]; the
    /// message is also stored in `error`.
    pub fn to_provisional(&mut self) -> Result<ProvisionalStageRace, DraftError> {
        ProvisionalStageRace::new(&self.name, self.stages.clone()).inspect_err(|err| {
            self.error = Some(err.to_string());
        })
    }

    /// Build the payload and mark the draft as saving.
    ///
    /// Returns `None` while a save is already pending or when the draft is
    /// invalid (the message is then stored in `error`).
    pub fn start_save(&mut self) -> Option<ProvisionalStageRace> {
        if self.saving {
            return None;
        }
        let payload = self.to_provisional().ok()?;
        self.saving = true;
        Some(payload)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
