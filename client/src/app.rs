//! Root application component and the SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::stage_races::StageRacesPage;
use crate::state::draft::StageRaceDraft;
use crate::state::stage_races::StageRaceState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the stage-race store and the creation draft to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(StageRaceState::default());
    let draft = RwSignal::new(StageRaceDraft::default());

    provide_context(store);
    provide_context(draft);

    view! {
        <Stylesheet id="leptos" href="/pkg/stage-races.css"/>
        <Title text="Stage Races"/>
        <StageRacesPage/>
    }
}
