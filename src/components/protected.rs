//! Route guard: renders its children only for a signed-in session.
//!
//! While the session is still restoring it shows a loader instead of
//! flashing the login page; once the phase settles on `SignedOut` it
//! navigates to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::state::session::{SessionPhase, SessionState};

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let navigate = use_navigate();
    Effect::new(move || {
        if session.get().phase == SessionPhase::SignedOut {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.get().phase == SessionPhase::SignedIn
            fallback=|| view! { <Loader label="Restoring session..."/> }
        >
            {children()}
        </Show>
    }
}
