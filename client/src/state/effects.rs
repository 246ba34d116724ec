//! Effect layer: issues stage-race API calls and dispatches their results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these helpers from event handlers. Each helper dispatches any
//! "started" action synchronously, spawns the request on the browser task
//! queue, and dispatches exactly one completion action. The reducer itself
//! never sees a future or a signal.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use leptos::prelude::*;

use super::draft::StageRaceDraft;
#[cfg(any(test, feature = "hydrate"))]
use super::stage_races::StageRaceOp;
use super::stage_races::{StageRaceAction, StageRaceState};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::StageRace;
use crate::net::types::{ProvisionalStageRace, StageRaceId};

/// Apply `action` to the shared store.
pub fn dispatch(store: RwSignal<StageRaceState>, action: StageRaceAction) {
    store.update(|s| s.apply(action));
}

/// Load the list, tagging the request so superseded responses are dropped.
pub fn fetch_stage_races(store: RwSignal<StageRaceState>) {
    dispatch(store, StageRaceAction::FetchStarted);
    let seq = store.with_untracked(|s| s.fetch_seq);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_stage_races().await;
        dispatch(store, fetch_outcome(seq, result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Persist `payload`; on success the returned race is appended and the draft reset.
pub fn create_stage_race(
    store: RwSignal<StageRaceState>,
    draft: RwSignal<StageRaceDraft>,
    payload: ProvisionalStageRace,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::create_stage_race(&payload).await;
        if result.is_ok() {
            draft.update(StageRaceDraft::reset);
        } else {
            draft.update(|d| d.saving = false);
        }
        dispatch_mutation(store, create_outcome(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, draft, payload);
}

/// Delete the race with `id` and drop it from the list once the server confirms.
pub fn delete_stage_race(store: RwSignal<StageRaceState>, id: StageRaceId) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::delete_stage_race(id).await;
        dispatch_mutation(store, delete_outcome(id, result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, id);
}

/// Dispatch a create/delete completion, re-fetching if it dropped a pending list.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn dispatch_mutation(store: RwSignal<StageRaceState>, action: StageRaceAction) {
    let refetch = store.with_untracked(|s| s.supersedes_fetch(&action));
    dispatch(store, action);
    if refetch {
        fetch_stage_races(store);
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn failure(op: StageRaceOp, err: &ApiError) -> String {
    leptos::logging::warn!("stage race request failed: op={op:?} error={err}");
    op.error_message().to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn fetch_outcome(seq: u64, result: Result<Vec<StageRace>, ApiError>) -> StageRaceAction {
    match result {
        Ok(payload) => StageRaceAction::FetchSuccess { seq, payload },
        Err(err) => StageRaceAction::FetchError { seq, message: failure(StageRaceOp::Fetch, &err) },
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn create_outcome(result: Result<StageRace, ApiError>) -> StageRaceAction {
    match result {
        Ok(race) => StageRaceAction::AddStageRace(race),
        Err(err) => StageRaceAction::HasError { message: failure(StageRaceOp::Create, &err) },
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn delete_outcome(id: StageRaceId, result: Result<(), ApiError>) -> StageRaceAction {
    match result {
        Ok(()) => StageRaceAction::DeleteStageRace(id),
        Err(err) => StageRaceAction::HasError { message: failure(StageRaceOp::Delete, &err) },
    }
}
