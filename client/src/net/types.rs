//! Wire types for the stage-race REST API.
//!
//! The model lives in the shared `stages` crate so the host and the CLI
//! deserialize exactly what the UI renders.

pub use stages::{
    DATE_FORMAT, DraftError, NO_DATE, ProvisionalStage, ProvisionalStageRace, Stage, StageRace, StageRaceId,
    duration_label, earliest_date, insert_by_date, parse_date, sort_by_earliest_date,
};
