//! Stage-race screen: list, create modal, and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `StageRaceState` store and the `StageRaceDraft` form from
//! context. Requests go through `state::effects`; every other interaction is a
//! plain dispatch.

use leptos::prelude::*;

use crate::components::buttons::{
    ButtonWrapper, DangerOutlineButton, PrimaryButton, SecondaryOutlineButton, SuccessOutlineButton,
};
use crate::components::feedback::{ErrorOverlay, LoadingSpinner};
use crate::components::form_input::FormInputGroup;
use crate::components::layout::Container;
use crate::components::list_group::{StageRaceFormStageListGroupItem, StageRaceListGroup, StageRaceListGroupItem};
use crate::components::modal::Modal;
use crate::net::types::StageRaceId;
use crate::state::draft::StageRaceDraft;
use crate::state::effects::{create_stage_race, delete_stage_race, dispatch, fetch_stage_races};
use crate::state::stage_races::{StageRaceAction, StageRaceState};

/// Root screen listing stage races.
#[component]
pub fn StageRacesPage() -> impl IntoView {
    let store = expect_context::<RwSignal<StageRaceState>>();
    let draft = expect_context::<RwSignal<StageRaceDraft>>();

    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get_untracked() {
            return;
        }
        requested_list.set(true);
        fetch_stage_races(store);
    });

    let on_open = Callback::new(move |()| {
        draft.update(StageRaceDraft::reset);
        dispatch(store, StageRaceAction::ToggleModal);
    });
    let on_clear_error = Callback::new(move |()| dispatch(store, StageRaceAction::ClearError));
    let on_delete = Callback::new(move |id: StageRaceId| delete_stage_race(store, id));

    let error_message = Signal::derive(move || store.with(|s| s.error_message.clone()));
    let modal_open = Signal::derive(move || store.with(|s| s.modal_open));

    view! {
        <Container>
            <h1 class="page-title">"Stage Races"</h1>
            <Show when=move || store.with(|s| s.error)>
                <ErrorOverlay error=error_message clear_error=on_clear_error/>
            </Show>
            <Show when=move || !store.with(|s| s.loading) fallback=|| view! { <LoadingSpinner/> }>
                <StageRaceListGroup>
                    {move || {
                        let races = store.with(|s| s.stage_races.clone());
                        if races.is_empty() {
                            return view! { <li class="list-group__empty">"No stage races"</li> }.into_any();
                        }
                        races
                            .into_iter()
                            .map(|race| {
                                let date = race.display_date();
                                let duration = race.duration_label();
                                view! {
                                    <StageRaceListGroupItem
                                        id=race.id
                                        name=race.name
                                        date=date
                                        duration=duration
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </StageRaceListGroup>
                <ButtonWrapper>
                    <PrimaryButton on_click=on_open>"Add Stage Race"</PrimaryButton>
                </ButtonWrapper>
            </Show>
            <Modal is_open=modal_open>
                <Show
                    when=move || !store.with(|s| s.add_stages)
                    fallback=move || view! { <AddStageForm store=store draft=draft/> }
                >
                    <AddStageRaceForm store=store draft=draft/>
                </Show>
            </Modal>
        </Container>
    }
}

/// First modal step: race name, collected stages, save/cancel.
#[component]
fn AddStageRaceForm(store: RwSignal<StageRaceState>, draft: RwSignal<StageRaceDraft>) -> impl IntoView {
    let on_name = Callback::new(move |value: String| draft.update(|d| d.name = value));
    let on_remove_stage = Callback::new(move |index: usize| draft.update(|d| d.remove_stage(index)));
    let on_add_stage = Callback::new(move |()| {
        draft.update(StageRaceDraft::clear_stage_inputs);
        dispatch(store, StageRaceAction::ToggleStagesForm);
    });
    let on_save = Callback::new(move |()| {
        if let Some(Some(payload)) = draft.try_update(StageRaceDraft::start_save) {
            create_stage_race(store, draft, payload);
        }
    });
    let on_cancel = Callback::new(move |()| {
        draft.update(StageRaceDraft::reset);
        dispatch(store, StageRaceAction::ToggleModal);
    });

    view! {
        <h2>"Add Stage Race"</h2>
        <FormInputGroup
            id="stage-race-name"
            placeholder="Enter stage race name"
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_input=on_name
        />
        <StageRaceListGroup>
            {move || {
                draft.with(|d| {
                    d.stages
                        .iter()
                        .enumerate()
                        .map(|(index, stage)| {
                            view! {
                                <StageRaceFormStageListGroupItem
                                    index=index
                                    name=stage.name.clone()
                                    date=stage.display_date()
                                    on_delete=on_remove_stage
                                />
                            }
                        })
                        .collect_view()
                })
            }}
        </StageRaceListGroup>
        <DraftErrorMessage draft=draft/>
        <ButtonWrapper>
            <SecondaryOutlineButton
                disabled=Signal::derive(move || !draft.with(StageRaceDraft::can_add_stage))
                on_click=on_add_stage
            >
                "Add Stage"
            </SecondaryOutlineButton>
            <SuccessOutlineButton
                disabled=Signal::derive(move || !draft.with(StageRaceDraft::can_save))
                on_click=on_save
            >
                "Save"
            </SuccessOutlineButton>
            <DangerOutlineButton on_click=on_cancel>"Cancel"</DangerOutlineButton>
        </ButtonWrapper>
    }
}

/// Second modal step: name and date of one stage.
#[component]
fn AddStageForm(store: RwSignal<StageRaceState>, draft: RwSignal<StageRaceDraft>) -> impl IntoView {
    let on_name = Callback::new(move |value: String| draft.update(|d| d.stage_name = value));
    let on_date = Callback::new(move |value: String| draft.update(|d| d.stage_date = value));
    let on_save = Callback::new(move |()| {
        if let Some(Ok(())) = draft.try_update(StageRaceDraft::add_stage) {
            dispatch(store, StageRaceAction::ToggleStagesForm);
        }
    });
    let on_cancel = Callback::new(move |()| {
        draft.update(StageRaceDraft::clear_stage_inputs);
        dispatch(store, StageRaceAction::ToggleStagesForm);
    });

    view! {
        <h2>"Add Stage"</h2>
        <FormInputGroup
            id="stage-name"
            label="Name"
            value=Signal::derive(move || draft.with(|d| d.stage_name.clone()))
            on_input=on_name
        />
        <FormInputGroup
            id="stage-date"
            input_type="date"
            label="Date"
            value=Signal::derive(move || draft.with(|d| d.stage_date.clone()))
            on_input=on_date
        />
        <DraftErrorMessage draft=draft/>
        <ButtonWrapper>
            <SuccessOutlineButton on_click=on_save>"Save"</SuccessOutlineButton>
            <DangerOutlineButton on_click=on_cancel>"Cancel"</DangerOutlineButton>
        </ButtonWrapper>
    }
}

#[component]
fn DraftErrorMessage(draft: RwSignal<StageRaceDraft>) -> impl IntoView {
    move || {
        draft
            .with(|d| d.error.clone())
            .map(|message| view! { <p class="dialog__error">{message}</p> })
    }
}
