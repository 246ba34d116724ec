//! Page-level layout container.

use leptos::prelude::*;

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! { <main class="container">{children()}</main> }
}
