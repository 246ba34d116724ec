//! Modal overlay whose content is only mounted while open.

use leptos::prelude::*;

/// Renders `children` inside a dialog while `is_open` is true.
#[component]
pub fn Modal(#[prop(into)] is_open: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog">
                    {children()}
                </div>
            </div>
        </Show>
    }
}
