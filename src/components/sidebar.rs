//! Navigation sidebar: section links, dark mode toggle, sign out.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{SessionState, credential_store};
use crate::state::ui::UiState;
use crate::util::dark_mode;

const LINKS: [(&str, &str, &str); 6] = [
    ("/", "Dashboard", "\u{2302}"),
    ("/board", "Task Board", "\u{25a6}"),
    ("/timeline", "Timeline", "\u{2194}"),
    ("/creative", "Creative Space", "\u{270e}"),
    ("/todos", "To-Do List", "\u{2611}"),
    ("/settings", "Settings", "\u{2699}"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let user_name = move || {
        session
            .get()
            .profile
            .map_or_else(String::new, |p| p.name)
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    let on_collapse = move |_| {
        ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
    };

    let on_sign_out = move |_| {
        credential_store::clear();
        session.update(SessionState::sign_out);
    };

    let class = move || {
        if ui.get().sidebar_collapsed {
            "sidebar sidebar--collapsed"
        } else {
            "sidebar"
        }
    };

    view! {
        <nav class=class>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"orbyq"</span>
                <button class="sidebar__collapse" on:click=on_collapse title="Toggle sidebar">
                    "\u{2630}"
                </button>
            </div>
            <ul class="sidebar__links">
                {LINKS
                    .into_iter()
                    .map(|(path, label, icon)| {
                        let link_class = move || {
                            if location.pathname.get() == path {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <li>
                                <a href=path class=link_class>
                                    <span class="sidebar__icon">{icon}</span>
                                    <span class="sidebar__label">{label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar__footer">
                <span class="sidebar__user">{user_name}</span>
                <button class="sidebar__dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263d}" }}
                </button>
                <button class="sidebar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
