use super::*;

fn date(raw: &str) -> NaiveDate {
    parse_date(raw).expect("valid date")
}

fn stage(id: u64, raw: &str) -> Stage {
    Stage { id, name: format!("Stage {id}"), date: date(raw) }
}

fn race(id: StageRaceId, dates: &[&str]) -> StageRace {
    StageRace {
        id,
        name: format!("Race {id}"),
        stages: dates
            .iter()
            .enumerate()
            .map(|(i, raw)| stage(u64::try_from(i).unwrap_or_default() + 1, raw))
            .collect(),
    }
}

fn ids(races: &[StageRace]) -> Vec<StageRaceId> {
    races.iter().map(|r| r.id).collect()
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn earliest_date_is_minimum_stage_date() {
    let r = race(1, &["2021-05-03", "2021-05-01", "2021-05-02"]);
    assert_eq!(r.earliest_date(), Some(date("2021-05-01")));
    assert_eq!(r.display_date(), "2021-05-01");
}

#[test]
fn two_stage_race_reports_two_days() {
    let r = race(1, &["2021-05-01", "2021-05-03"]);
    assert_eq!(r.display_date(), "2021-05-01");
    assert_eq!(r.duration_label(), "2 days");
}

#[test]
fn single_stage_race_uses_singular_day() {
    let r = race(1, &["2021-07-14"]);
    assert_eq!(r.duration_label(), "1 day");
}

#[test]
fn empty_race_has_no_date_and_zero_days() {
    let r = race(1, &[]);
    assert_eq!(r.earliest_date(), None);
    assert_eq!(r.display_date(), NO_DATE);
    assert_eq!(r.duration_label(), "0 days");
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_orders_by_earliest_date_ascending() {
    let races = vec![
        race(1, &["2021-06-10"]),
        race(2, &["2021-05-20", "2021-05-01"]),
        race(3, &["2021-05-15"]),
    ];
    assert_eq!(ids(&sort_by_earliest_date(&races)), vec![2, 3, 1]);
}

#[test]
fn sort_is_stable_for_equal_earliest_dates() {
    let races = vec![
        race(7, &["2021-05-01", "2021-05-09"]),
        race(3, &["2021-04-01"]),
        race(5, &["2021-05-01"]),
        race(1, &["2021-05-02", "2021-05-01"]),
    ];
    assert_eq!(ids(&sort_by_earliest_date(&races)), vec![3, 7, 5, 1]);
}

#[test]
fn sort_places_races_without_stages_last() {
    let races = vec![race(1, &[]), race(2, &["2022-01-01"]), race(3, &[])];
    assert_eq!(ids(&sort_by_earliest_date(&races)), vec![2, 1, 3]);
}

#[test]
fn sort_does_not_mutate_input() {
    let races = vec![race(1, &["2021-06-10"]), race(2, &["2021-05-01"])];
    let _ = sort_by_earliest_date(&races);
    assert_eq!(ids(&races), vec![1, 2]);
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn parse_date_rejects_garbage() {
    assert_eq!(parse_date("2021-13-01"), Err(DraftError::InvalidDate("2021-13-01".to_owned())));
    assert_eq!(parse_date(""), Err(DraftError::InvalidDate(String::new())));
}

#[test]
fn provisional_stage_trims_name() {
    let s = ProvisionalStage::new("  Prologue ", "2021-05-01").expect("stage");
    assert_eq!(s.name, "Prologue");
    assert_eq!(s.display_date(), "2021-05-01");
}

#[test]
fn provisional_stage_requires_name() {
    assert_eq!(ProvisionalStage::new("   ", "2021-05-01"), Err(DraftError::EmptyStageName));
}

#[test]
fn provisional_race_requires_name_and_stages() {
    let s = ProvisionalStage::new("Stage 1", "2021-05-01").expect("stage");
    assert_eq!(ProvisionalStageRace::new(" ", vec![s]), Err(DraftError::EmptyName));
    assert_eq!(ProvisionalStageRace::new("Giro", Vec::new()), Err(DraftError::NoStages));
}

#[test]
fn provisional_race_orders_stages_by_date() {
    let stages = vec![
        ProvisionalStage::new("B", "2021-05-03").expect("stage"),
        ProvisionalStage::new("A", "2021-05-01").expect("stage"),
    ];
    let draft = ProvisionalStageRace::new("Giro", stages).expect("draft");
    let names: Vec<_> = draft.stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn normalized_trims_sorts_and_rejects_blank_stage_names() {
    let raw: ProvisionalStageRace = serde_json::from_value(serde_json::json!({
        "name": "  Giro  ",
        "stages": [
            { "name": " Stage 2 ", "date": "2021-05-09" },
            { "name": "Stage 1", "date": "2021-05-08" }
        ]
    }))
    .expect("deserialize");

    let draft = raw.normalized().expect("valid payload");

    assert_eq!(draft.name, "Giro");
    let names: Vec<_> = draft.stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Stage 1", "Stage 2"]);

    let blank: ProvisionalStageRace = serde_json::from_value(serde_json::json!({
        "name": "Giro",
        "stages": [{ "name": "   ", "date": "2021-05-09" }]
    }))
    .expect("deserialize");
    assert_eq!(blank.normalized(), Err(DraftError::EmptyStageName));
}

#[test]
fn insert_by_date_keeps_insertion_order_for_equal_dates() {
    let mut stages = Vec::new();
    insert_by_date(&mut stages, ProvisionalStage::new("late", "2021-05-05").expect("stage"));
    insert_by_date(&mut stages, ProvisionalStage::new("first", "2021-05-01").expect("stage"));
    insert_by_date(&mut stages, ProvisionalStage::new("second", "2021-05-01").expect("stage"));
    let names: Vec<_> = stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "late"]);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn stage_race_deserializes_api_payload() {
    let json = serde_json::json!({
        "id": 4,
        "name": "Tour de Romandie",
        "stages": [
            { "id": 10, "name": "Prologue", "date": "2021-04-27" },
            { "id": 11, "name": "Stage 1", "date": "2021-04-28" }
        ]
    });
    let parsed: StageRace = serde_json::from_value(json).expect("deserialize");
    assert_eq!(parsed.id, 4);
    assert_eq!(parsed.stages.len(), 2);
    assert_eq!(parsed.display_date(), "2021-04-27");
}

#[test]
fn stage_race_without_stages_field_defaults_to_empty() {
    let parsed: StageRace = serde_json::from_value(serde_json::json!({ "id": 1, "name": "x" })).expect("deserialize");
    assert!(parsed.stages.is_empty());
}

#[test]
fn provisional_race_serializes_dates_as_iso_strings() {
    let draft = ProvisionalStageRace::new("Giro", vec![ProvisionalStage::new("Stage 1", "2021-05-08").expect("stage")])
        .expect("draft");
    let value = serde_json::to_value(&draft).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "name": "Giro", "stages": [{ "name": "Stage 1", "date": "2021-05-08" }] })
    );
}
