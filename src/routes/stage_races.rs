//! Stage-race routes forwarded to the external API.
//!
//! The browser only ever talks to this host; each handler replays the request
//! against `{api_url}/stage-races` and re-validates the upstream body with the
//! shared `stages` types before answering.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use stages::{ProvisionalStageRace, StageRace, StageRaceId};

use crate::state::AppState;

fn collection_path() -> &'static str {
    "/stage-races"
}

fn item_path(id: StageRaceId) -> String {
    format!("/stage-races/{id}")
}

/// Failure talking to the external API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport failure, timeout, or undecodable body.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The upstream answered with a non-2xx status.
    #[error("upstream responded with status {0}")]
    Status(u16),
}

/// Client errors from upstream pass through; everything else is a bad gateway.
pub(crate) fn upstream_error_to_status(err: UpstreamError) -> StatusCode {
    tracing::warn!(error = %err, "stage race upstream call failed");
    match err {
        UpstreamError::Status(code) if (400..500).contains(&code) => {
            StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        UpstreamError::Status(_) | UpstreamError::Request(_) => StatusCode::BAD_GATEWAY,
    }
}

fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(UpstreamError::Status(status.as_u16()))
    }
}

async fn fetch_list(state: &AppState) -> Result<Vec<StageRace>, UpstreamError> {
    let resp = state.http.get(state.upstream_url(collection_path())).send().await?;
    Ok(ensure_success(resp)?.json::<Vec<StageRace>>().await?)
}

async fn post_create(state: &AppState, body: &ProvisionalStageRace) -> Result<StageRace, UpstreamError> {
    let resp = state
        .http
        .post(state.upstream_url(collection_path()))
        .json(body)
        .send()
        .await?;
    Ok(ensure_success(resp)?.json::<StageRace>().await?)
}

async fn send_delete(state: &AppState, id: StageRaceId) -> Result<(), UpstreamError> {
    let resp = state.http.delete(state.upstream_url(&item_path(id))).send().await?;
    ensure_success(resp)?;
    Ok(())
}

/// `GET /api/stage-races` — list stage races.
pub async fn list_stage_races(State(state): State<AppState>) -> Result<Json<Vec<StageRace>>, StatusCode> {
    let races = fetch_list(&state).await.map_err(upstream_error_to_status)?;
    tracing::debug!(count = races.len(), "listed stage races");
    Ok(Json(races))
}

/// `POST /api/stage-races` — create a stage race.
pub async fn create_stage_race(
    State(state): State<AppState>,
    Json(body): Json<ProvisionalStageRace>,
) -> Result<(StatusCode, Json<StageRace>), StatusCode> {
    let draft = body.normalized().map_err(|err| {
        tracing::debug!(error = %err, "rejected stage race payload");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;
    let created = post_create(&state, &draft).await.map_err(upstream_error_to_status)?;
    tracing::info!(id = created.id, name = %created.name, "created stage race");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /api/stage-races/:id` — delete a stage race.
pub async fn delete_stage_race(
    State(state): State<AppState>,
    Path(id): Path<StageRaceId>,
) -> Result<StatusCode, StatusCode> {
    send_delete(&state, id).await.map_err(upstream_error_to_status)?;
    tracing::info!(id, "deleted stage race");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "stage_races_test.rs"]
mod tests;
