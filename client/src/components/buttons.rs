//! Button primitives and their wrapper row.

use leptos::prelude::*;

fn button_view(
    class: &'static str,
    disabled: Signal<bool>,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Filled primary action, e.g. "Add Stage Race".
#[component]
pub fn PrimaryButton(
    on_click: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    button_view("btn btn--primary", disabled, on_click, children)
}

#[component]
pub fn SecondaryOutlineButton(
    on_click: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    button_view("btn btn--outline-secondary", disabled, on_click, children)
}

#[component]
pub fn SuccessOutlineButton(
    on_click: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    button_view("btn btn--outline-success", disabled, on_click, children)
}

#[component]
pub fn DangerOutlineButton(
    on_click: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    button_view("btn btn--outline-danger", disabled, on_click, children)
}

/// Horizontal row of action buttons.
#[component]
pub fn ButtonWrapper(children: Children) -> impl IntoView {
    view! { <div class="button-wrapper">{children()}</div> }
}
