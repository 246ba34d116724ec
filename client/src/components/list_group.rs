//! List-group rows for stage races and draft stages.
//!
//! DESIGN
//! ======
//! Rows receive already-derived strings (display date, duration label) so
//! they stay free of date logic.

use leptos::prelude::*;

use crate::net::types::StageRaceId;

#[component]
pub fn StageRaceListGroup(children: Children) -> impl IntoView {
    view! { <ul class="list-group">{children()}</ul> }
}

/// One persisted stage race with a delete action.
#[component]
pub fn StageRaceListGroupItem(
    id: StageRaceId,
    name: String,
    date: String,
    duration: String,
    on_delete: Callback<StageRaceId>,
) -> impl IntoView {
    view! {
        <li class="list-group__item stage-race">
            <span class="stage-race__name">{name}</span>
            <span class="stage-race__date">{date}</span>
            <span class="stage-race__duration">{duration}</span>
            <button
                type="button"
                class="btn btn--outline-danger stage-race__delete"
                title="Delete stage race"
                on:click=move |_| on_delete.run(id)
            >
                "Delete"
            </button>
        </li>
    }
}

/// One stage of the draft race inside the creation modal.
#[component]
pub fn StageRaceFormStageListGroupItem(
    index: usize,
    name: String,
    date: String,
    on_delete: Callback<usize>,
) -> impl IntoView {
    view! {
        <li class="list-group__item draft-stage">
            <span class="draft-stage__name">{name}</span>
            <span class="draft-stage__date">{date}</span>
            <button
                type="button"
                class="draft-stage__delete"
                title="Remove stage"
                on:click=move |_| on_delete.run(index)
            >
                "✕"
            </button>
        </li>
    }
}
