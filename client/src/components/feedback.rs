//! Loading and error feedback shown above the stage-race list.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner__label">"Loading..."</span>
        </div>
    }
}

/// Dismissible error banner. Dismissing does not retry the failed request.
#[component]
pub fn ErrorOverlay(#[prop(into)] error: Signal<String>, clear_error: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-overlay" role="alert">
            <span class="error-overlay__message">{move || error.get()}</span>
            <button
                type="button"
                class="error-overlay__close"
                title="Dismiss"
                on:click=move |_| clear_error.run(())
            >
                "✕"
            </button>
        </div>
    }
}
