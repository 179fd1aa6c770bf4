//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::components::sidebar::Sidebar;
use crate::pages::creative::CreativePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::settings::SettingsPage;
use crate::pages::task_board::TaskBoardPage;
use crate::pages::timeline::TimelinePage;
use crate::pages::todos::TodosPage;
use crate::state::board::BoardState;
use crate::state::canvas::CanvasState;
use crate::state::dashboard::DashboardState;
use crate::state::session::SessionState;
use crate::state::timeline::TimelineState;
use crate::state::todos::TodoState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides all shared state contexts, kicks off session restore, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let board = RwSignal::new(BoardState::default());
    let canvas = RwSignal::new(CanvasState::default());
    let timeline = RwSignal::new(TimelineState::starting(chrono::Local::now().date_naive()));
    let todos = RwSignal::new(TodoState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);
    let ui = RwSignal::new(UiState { dark_mode: dark, sidebar_collapsed: false });

    provide_context(session);
    provide_context(board);
    provide_context(canvas);
    provide_context(timeline);
    provide_context(todos);
    provide_context(dashboard);
    provide_context(ui);

    // Validate any stored credentials before showing protected pages.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::session::restore(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/orbyq.css"/>
        <Title text="orbyq"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Shell><DashboardPage/></Shell> }
                />
                <Route
                    path=StaticSegment("board")
                    view=|| view! { <Shell><TaskBoardPage/></Shell> }
                />
                <Route
                    path=StaticSegment("timeline")
                    view=|| view! { <Shell><TimelinePage/></Shell> }
                />
                <Route
                    path=StaticSegment("creative")
                    view=|| view! { <Shell><CreativePage/></Shell> }
                />
                <Route
                    path=StaticSegment("todos")
                    view=|| view! { <Shell><TodosPage/></Shell> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <Shell><SettingsPage/></Shell> }
                />
            </Routes>
        </Router>
    }
}

/// Signed-in layout: sidebar plus the routed page, behind the session
/// guard.
#[component]
fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <Protected>
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__main">{children()}</main>
            </div>
        </Protected>
    }
}
