//! Dashboard page: greeting, stat cards, weekly productivity, and
//! recent activity. Everything here is read-only.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::net::api::Method;
use crate::net::types::DashboardSummary;
use crate::state::dashboard::DashboardState;
use crate::state::session::{self, SessionState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            dashboard.update(|d| {
                d.loading = true;
                d.error = None;
            });
            leptos::task::spawn_local(async move {
                match session::authorized::<DashboardSummary>(
                    session,
                    "dashboard",
                    Method::Get,
                    None,
                )
                .await
                {
                    Ok(summary) => dashboard.update(|d| d.adopt(summary)),
                    Err(err) => dashboard.update(|d| {
                        d.loading = false;
                        d.error = Some(err.to_string());
                    }),
                }
            });
        }
    };
    Effect::new(move || load());

    let error = Signal::derive(move || dashboard.get().error.clone());
    let greeting = move || {
        let name = dashboard
            .get()
            .summary
            .map(|s| s.user_name)
            .unwrap_or_default();
        if name.is_empty() {
            "Welcome back".to_owned()
        } else {
            format!("Welcome back, {name}")
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>

            <ErrorBanner
                message=error
                on_dismiss=Callback::new(move |()| dashboard.update(|d| d.error = None))
                on_retry=Callback::new(move |()| load())
            />

            <Show
                when=move || !dashboard.get().loading
                fallback=|| view! { <Loader label="Loading dashboard..."/> }
            >
                {move || {
                    dashboard
                        .get()
                        .summary
                        .map(|summary| {
                            let peak = dashboard.get().productivity_peak();
                            let bars = summary
                                .weekly_productivity
                                .iter()
                                .map(|day| {
                                    let height = 100.0 * f64::from(day.task_count)
                                        / f64::from(peak);
                                    view! {
                                        <div class="productivity__column">
                                            <div
                                                class="productivity__bar"
                                                style=format!("height:{height:.0}%;")
                                                title=format!("{} tasks", day.task_count)
                                            ></div>
                                            <span class="productivity__day">{day.day.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view();
                            let activities = summary
                                .recent_activities
                                .iter()
                                .chain(summary.recent_project_activities.iter())
                                .map(|activity| {
                                    view! {
                                        <li class="activity">
                                            <span class="activity__action">
                                                {activity.action.clone()}
                                            </span>
                                            <span class="activity__details">
                                                {activity.details.clone()}
                                            </span>
                                            <span class="activity__time">
                                                {activity.created_at.clone()}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view();
                            let upcoming = summary
                                .upcoming_tasks
                                .iter()
                                .map(|task| {
                                    view! {
                                        <li class="upcoming">
                                            <span class="upcoming__icon">{task.icon.clone()}</span>
                                            <span class="upcoming__title">{task.title.clone()}</span>
                                            <span class="upcoming__time">{task.time.clone()}</span>
                                        </li>
                                    }
                                })
                                .collect_view();

                            view! {
                                <div class="dashboard-page__stats">
                                    <div class="stat-card">
                                        <span class="stat-card__value">{summary.task_count}</span>
                                        <span class="stat-card__label">"Tasks"</span>
                                        <span class="stat-card__detail">
                                            {format!("{:.0}% complete", summary.task_progress)}
                                        </span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{summary.project_count}</span>
                                        <span class="stat-card__label">"Projects"</span>
                                        <span class="stat-card__detail">
                                            {format!("{:.0}% on track", summary.project_progress)}
                                        </span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{summary.idea_count}</span>
                                        <span class="stat-card__label">"Ideas"</span>
                                        <span class="stat-card__detail">
                                            {format!(
                                                "+{} since yesterday",
                                                summary.new_ideas_since_yesterday
                                            )}
                                        </span>
                                    </div>
                                </div>

                                <div class="dashboard-page__panels">
                                    <section class="panel">
                                        <h2>"Weekly Productivity"</h2>
                                        <div class="productivity">{bars}</div>
                                    </section>
                                    <section class="panel">
                                        <h2>"Recent Activity"</h2>
                                        <ul class="panel__list">{activities}</ul>
                                    </section>
                                    <section class="panel">
                                        <h2>"Coming Up"</h2>
                                        <ul class="panel__list">{upcoming}</ul>
                                    </section>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
