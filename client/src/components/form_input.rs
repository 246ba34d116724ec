//! Labelled form input bound to a string value.

use leptos::prelude::*;

/// A single `<input>` with optional label and placeholder.
///
/// The input is controlled: it renders `value` and reports every edit through
/// `on_input`.
#[component]
pub fn FormInputGroup(
    #[prop(into)] id: String,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] label: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let label_for = id.clone();
    view! {
        <div class="form-group">
            {label.map(|text| view! { <label class="form-group__label" for=label_for>{text}</label> })}
            <input
                id=id
                class="form-group__input"
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
