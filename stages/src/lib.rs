//! Shared stage-race model and date helpers.
//!
//! This crate owns the JSON representation exchanged with the stage-race API
//! and is used by the `client`, the host, and the `cli`. Derived values
//! (display date, duration) are computed here so every surface renders a race
//! the same way.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format used for stage dates on the wire and in form inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder rendered for a race that has no stages yet.
pub const NO_DATE: &str = "—";

/// Server-assigned identifier of a stage race.
pub type StageRaceId = u64;

/// Error returned when a draft stage or stage race is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The stage race name is blank.
    #[error("stage race name is required")]
    EmptyName,
    /// The stage name is blank.
    #[error("stage name is required")]
    EmptyStageName,
    /// The stage date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid stage date: {0:?}")]
    InvalidDate(String),
    /// A stage race needs at least one stage before it can be saved.
    #[error("stage race needs at least one stage")]
    NoStages,
}

/// One dated leg of a stage race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: u64,
    pub name: String,
    pub date: NaiveDate,
}

/// A persisted stage race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRace {
    pub id: StageRaceId,
    pub name: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

/// A stage that has not been assigned an id by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionalStage {
    pub name: String,
    pub date: NaiveDate,
}

/// Creation payload for `POST /stage-races`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionalStageRace {
    pub name: String,
    pub stages: Vec<ProvisionalStage>,
}

/// Anything carrying a stage date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Stage {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ProvisionalStage {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parse a `YYYY-MM-DD` date as produced by `<input type="date">`.
///
/// # Errors
///
/// Returns [`DraftError::InvalidDate`] when the input is not a valid calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DraftError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| DraftError::InvalidDate(trimmed.to_owned()))
}

/// Earliest date across `stages`, or `None` when there are no stages.
pub fn earliest_date<T: Dated>(stages: &[T]) -> Option<NaiveDate> {
    stages.iter().map(Dated::date).min()
}

/// Human-readable duration: one day per stage.
pub fn duration_label<T>(stages: &[T]) -> String {
    match stages.len() {
        1 => "1 day".to_owned(),
        n => format!("{n} days"),
    }
}

/// Return `races` ordered by earliest stage date, ascending.
///
/// The sort is stable, so races sharing an earliest date keep their input
/// order. Races without stages go last. The input slice is left untouched.
#[must_use]
pub fn sort_by_earliest_date(races: &[StageRace]) -> Vec<StageRace> {
    let mut sorted = races.to_vec();
    sorted.sort_by_key(|race| {
        let earliest = race.earliest_date();
        (earliest.is_none(), earliest)
    });
    sorted
}

/// Insert `stage` after every stage dated on or before it.
pub fn insert_by_date(stages: &mut Vec<ProvisionalStage>, stage: ProvisionalStage) {
    let at = stages.partition_point(|existing| existing.date <= stage.date);
    stages.insert(at, stage);
}

impl StageRace {
    #[must_use]
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        earliest_date(&self.stages)
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        duration_label(&self.stages)
    }

    /// Earliest stage date as `YYYY-MM-DD`, or [`NO_DATE`].
    #[must_use]
    pub fn display_date(&self) -> String {
        self.earliest_date()
            .map_or_else(|| NO_DATE.to_owned(), |date| date.format(DATE_FORMAT).to_string())
    }
}

impl ProvisionalStage {
    /// Build a stage from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyStageName`] for a blank name and
    /// [`DraftError::InvalidDate`] for an unparseable date.
    pub fn new(name: &str, date: &str) -> Result<Self, DraftError> {
        Self::dated(name, parse_date(date)?)
    }

    /// Build a stage from an already-parsed date.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyStageName`] for a blank name.
    pub fn dated(name: &str, date: NaiveDate) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyStageName);
        }
        Ok(Self { name: name.to_owned(), date })
    }

    /// Date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl ProvisionalStageRace {
    /// Build a validated creation payload with stages ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyName`] for a blank name and
    /// [`DraftError::NoStages`] when `stages` is empty.
    pub fn new(name: &str, stages: Vec<ProvisionalStage>) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        if stages.is_empty() {
            return Err(DraftError::NoStages);
        }
        let mut ordered = stages;
        ordered.sort_by_key(|stage| stage.date);
        Ok(Self { name: name.to_owned(), stages: ordered })
    }

    /// Re-apply every draft rule to a payload that arrived already
    /// deserialized: names trimmed, blank stage names rejected, stages
    /// ordered by date.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found.
    pub fn normalized(&self) -> Result<Self, DraftError> {
        let stages = self
            .stages
            .iter()
            .map(|stage| ProvisionalStage::dated(&stage.name, stage.date))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&self.name, stages)
    }
}
