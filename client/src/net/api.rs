//! REST API helpers for the stage-race resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! requests are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the effect layer turns any
//! failure into the fixed banner message for the operation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ProvisionalStageRace, StageRace, StageRaceId};

/// Collection endpoint, relative to the host serving the app.
pub const STAGE_RACES_ENDPOINT: &str = "/api/stage-races";

/// Failure of a stage-race API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn stage_race_endpoint(id: StageRaceId) -> String {
    format!("{STAGE_RACES_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Fetch all stage races via `GET /api/stage-races`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not a stage-race list.
pub async fn list_stage_races() -> Result<Vec<StageRace>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STAGE_RACES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.ok(), resp.status())?;
        resp.json::<Vec<StageRace>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a stage race via `POST /api/stage-races`.
///
/// Returns the persisted entity, including server-assigned ids.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not a stage race.
pub async fn create_stage_race(draft: &ProvisionalStageRace) -> Result<StageRace, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(STAGE_RACES_ENDPOINT)
            .json(draft)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.ok(), resp.status())?;
        resp.json::<StageRace>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Delete a stage race via `DELETE /api/stage-races/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is not 2xx.
pub async fn delete_stage_race(id: StageRaceId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = stage_race_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
