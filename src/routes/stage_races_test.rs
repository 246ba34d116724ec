use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{delete, get};
use stages::{ProvisionalStage, Stage};

use super::*;

fn sample_race(id: StageRaceId) -> StageRace {
    StageRace {
        id,
        name: "Giro d'Italia".to_owned(),
        stages: vec![Stage {
            id: 1,
            name: "Stage 1".to_owned(),
            date: stages::parse_date("2021-05-08").unwrap(),
        }],
    }
}

fn sample_draft(name: &str) -> ProvisionalStageRace {
    ProvisionalStageRace {
        name: name.to_owned(),
        stages: vec![ProvisionalStage::new("Stage 1", "2021-05-08").unwrap()],
    }
}

/// In-memory stand-in for the external API.
fn fake_upstream(races: Arc<Mutex<Vec<StageRace>>>) -> Router {
    let list_races = races.clone();
    let create_races = races.clone();
    let delete_races = races;
    Router::new()
        .route(
            "/stage-races",
            get(move || {
                let races = list_races.clone();
                async move { Json(races.lock().unwrap().clone()) }
            })
            .post(move |Json(body): Json<ProvisionalStageRace>| {
                let races = create_races.clone();
                async move {
                    let mut races = races.lock().unwrap();
                    let id = u64::try_from(races.len()).unwrap() + 1;
                    let created = StageRace {
                        id,
                        name: body.name,
                        stages: body
                            .stages
                            .into_iter()
                            .zip(1_u64..)
                            .map(|(s, stage_id)| Stage { id: stage_id, name: s.name, date: s.date })
                            .collect(),
                    };
                    races.push(created.clone());
                    (StatusCode::CREATED, Json(created))
                }
            }),
        )
        .route(
            "/stage-races/{id}",
            delete(move |Path(id): Path<StageRaceId>| {
                let races = delete_races.clone();
                async move {
                    let mut races = races.lock().unwrap();
                    let before = races.len();
                    races.retain(|r| r.id != id);
                    if races.len() == before { StatusCode::NOT_FOUND } else { StatusCode::NO_CONTENT }
                }
            }),
        )
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(base: String) -> State<AppState> {
    State(AppState::with_client(reqwest::Client::new(), base))
}

#[test]
fn item_path_appends_id() {
    assert_eq!(item_path(12), "/stage-races/12");
    assert_eq!(collection_path(), "/stage-races");
}

#[test]
fn upstream_error_to_status_passes_client_errors_through() {
    assert_eq!(upstream_error_to_status(UpstreamError::Status(404)), StatusCode::NOT_FOUND);
    assert_eq!(upstream_error_to_status(UpstreamError::Status(422)), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn upstream_error_to_status_maps_server_errors_to_bad_gateway() {
    assert_eq!(upstream_error_to_status(UpstreamError::Status(500)), StatusCode::BAD_GATEWAY);
    assert_eq!(upstream_error_to_status(UpstreamError::Status(503)), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn list_forwards_upstream_races() {
    let races = Arc::new(Mutex::new(vec![sample_race(1)]));
    let base = spawn(fake_upstream(races)).await;

    let Json(listed) = list_stage_races(state_for(base)).await.unwrap();

    assert_eq!(listed, vec![sample_race(1)]);
}

#[tokio::test]
async fn create_returns_persisted_entity() {
    let races = Arc::new(Mutex::new(Vec::new()));
    let base = spawn(fake_upstream(races.clone())).await;

    let (status, Json(created)) = create_stage_race(state_for(base), Json(sample_draft("Giro")))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Giro");
    assert_eq!(created.stages.len(), 1);
    assert_eq!(races.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_invalid_draft_without_calling_upstream() {
    let races = Arc::new(Mutex::new(Vec::new()));
    let base = spawn(fake_upstream(races.clone())).await;

    let status = create_stage_race(state_for(base), Json(sample_draft("   ")))
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(races.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_blank_stage_name_without_calling_upstream() {
    let races = Arc::new(Mutex::new(Vec::new()));
    let base = spawn(fake_upstream(races.clone())).await;
    let body: ProvisionalStageRace = serde_json::from_value(serde_json::json!({
        "name": "Giro",
        "stages": [
            { "name": "   ", "date": "2021-05-09" },
            { "name": "A", "date": "2021-05-01" }
        ]
    }))
    .unwrap();

    let status = create_stage_race(state_for(base), Json(body)).await.unwrap_err();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(races.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_forwards_trimmed_name_and_date_ordered_stages() {
    let races = Arc::new(Mutex::new(Vec::new()));
    let base = spawn(fake_upstream(races.clone())).await;
    let body: ProvisionalStageRace = serde_json::from_value(serde_json::json!({
        "name": "  Giro  ",
        "stages": [
            { "name": "B", "date": "2021-05-09" },
            { "name": " A ", "date": "2021-05-01" }
        ]
    }))
    .unwrap();

    create_stage_race(state_for(base), Json(body)).await.unwrap();

    let stored = races.lock().unwrap();
    assert_eq!(stored[0].name, "Giro");
    let names: Vec<_> = stored[0].stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn delete_removes_upstream_entity() {
    let races = Arc::new(Mutex::new(vec![sample_race(1)]));
    let base = spawn(fake_upstream(races.clone())).await;

    let status = delete_stage_race(state_for(base), Path(1)).await.unwrap();

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(races.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_race_passes_not_found_through() {
    let races = Arc::new(Mutex::new(Vec::new()));
    let base = spawn(fake_upstream(races)).await;

    let status = delete_stage_race(state_for(base), Path(99)).await.unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upstream_server_error_becomes_bad_gateway() {
    let failing = Router::new().route("/stage-races", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn(failing).await;

    let status = list_stage_races(state_for(base)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn malformed_upstream_body_becomes_bad_gateway() {
    let garbled = Router::new().route("/stage-races", get(|| async { Json(serde_json::json!({ "not": "a list" })) }));
    let base = spawn(garbled).await;

    let status = list_stage_races(state_for(base)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
