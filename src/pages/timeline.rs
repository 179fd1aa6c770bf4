//! Timeline page: a two-week window of project task bars, milestones,
//! and an add-task form.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::net::api::Method;
use crate::net::types::TimelineData;
use crate::state::session::{self, SessionState};
use crate::state::timeline::{TimelineDraft, TimelineState, WINDOW_DAYS};
use crate::state::validate::FieldError;

#[component]
pub fn TimelinePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let timeline = expect_context::<RwSignal<TimelineState>>();

    let show_add = RwSignal::new(false);
    let draft = RwSignal::new(TimelineDraft::default());
    let field_error = RwSignal::new(None::<FieldError>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            timeline.update(|t| {
                t.loading = true;
                t.error = None;
            });
            leptos::task::spawn_local(async move {
                match session::authorized::<TimelineData>(session, "timeline", Method::Get, None)
                    .await
                {
                    Ok(data) => timeline.update(|t| t.adopt(data)),
                    Err(err) => timeline.update(|t| {
                        t.loading = false;
                        t.error = Some(err.to_string());
                    }),
                }
            });
        }
    };
    Effect::new(move || load());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.get().validate() {
            Err(err) => field_error.set(Some(err)),
            Ok(payload) => {
                field_error.set(None);
                show_add.set(false);
                draft.set(TimelineDraft::default());
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let body = serde_json::to_value(&payload).unwrap_or_default();
                        match session::authorized_empty(
                            session,
                            "timeline/task",
                            Method::Post,
                            Some(&body),
                        )
                        .await
                        {
                            Ok(()) => load(),
                            Err(err) => timeline.update(|t| t.error = Some(err.to_string())),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = payload;
            }
        }
    };

    let error = Signal::derive(move || timeline.get().error.clone());
    let percent = |days: u32| 100.0 * f64::from(days) / f64::from(WINDOW_DAYS);

    view! {
        <div class="timeline-page">
            <header class="timeline-page__header">
                <h1>"Timeline"</h1>
                <div class="timeline-page__nav">
                    <button on:click=move |_| timeline.update(|t| t.shift_window(-1))>
                        "\u{2190} Week"
                    </button>
                    <span class="timeline-page__range">
                        {move || {
                            let t = timeline.get();
                            let days = t.window_days();
                            match (days.first(), days.last()) {
                                (Some(first), Some(last)) => format!(
                                    "{} \u{2013} {}",
                                    first.format("%b %d"),
                                    last.format("%b %d")
                                ),
                                _ => String::new(),
                            }
                        }}
                    </span>
                    <button on:click=move |_| timeline.update(|t| t.shift_window(1))>
                        "Week \u{2192}"
                    </button>
                </div>
                <button class="timeline-page__add" on:click=move |_| show_add.update(|s| *s = !*s)>
                    "+ Add Task"
                </button>
            </header>

            <ErrorBanner
                message=error
                on_dismiss=Callback::new(move |()| timeline.update(|t| t.error = None))
                on_retry=Callback::new(move |()| load())
            />

            <Show when=move || show_add.get()>
                <form class="timeline-page__form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Task name"
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.name = value);
                        }
                    />
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.project_id = value);
                    }>
                        <option value="">"Choose project"</option>
                        {move || {
                            timeline
                                .get()
                                .data
                                .projects
                                .iter()
                                .map(|p| {
                                    view! { <option value=p.id.clone()>{p.name.clone()}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="date"
                        prop:value=move || draft.get().start_day
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.start_day = value);
                        }
                    />
                    <input
                        type="number"
                        min="1"
                        placeholder="Days"
                        prop:value=move || draft.get().duration
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.duration = value);
                        }
                    />
                    <Show when=move || field_error.get().is_some()>
                        <p class="timeline-page__form-error">
                            {move || field_error.get().map(|e| e.to_string()).unwrap_or_default()}
                        </p>
                    </Show>
                    <button type="submit">"Add"</button>
                </form>
            </Show>

            <Show
                when=move || !timeline.get().loading
                fallback=|| view! { <Loader label="Loading timeline..."/> }
            >
                <div class="timeline-grid">
                    <div class="timeline-grid__days">
                        <span class="timeline-grid__corner"></span>
                        {move || {
                            timeline
                                .get()
                                .window_days()
                                .into_iter()
                                .map(|day| {
                                    view! {
                                        <span class="timeline-grid__day">
                                            {day.format("%a %d").to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    {move || {
                        let t = timeline.get();
                        t.data
                            .projects
                            .iter()
                            .map(|project| {
                                let progress = t.progress_of(&project.id);
                                let bars = project
                                    .tasks
                                    .iter()
                                    .filter_map(|task| {
                                        t.task_span(task).map(|span| {
                                            let style = format!(
                                                "left:{:.2}%;width:{:.2}%;",
                                                percent(span.offset),
                                                percent(span.length)
                                            );
                                            let class = if task.completed {
                                                format!(
                                                    "timeline-bar timeline-bar--done {}",
                                                    project.color
                                                )
                                            } else {
                                                format!("timeline-bar {}", project.color)
                                            };
                                            view! {
                                                <div class=class style=style title=task.name.clone()>
                                                    {task.name.clone()}
                                                </div>
                                            }
                                        })
                                    })
                                    .collect_view();
                                view! {
                                    <div class="timeline-grid__row">
                                        <div class="timeline-grid__project">
                                            <span>{project.name.clone()}</span>
                                            <span class="timeline-grid__progress">
                                                {format!("{progress:.0}%")}
                                            </span>
                                        </div>
                                        <div class="timeline-grid__lane">{bars}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <section class="timeline-page__milestones">
                    <h2>"Upcoming Milestones"</h2>
                    <ul>
                        {move || {
                            timeline
                                .get()
                                .data
                                .upcoming_milestones
                                .iter()
                                .map(|m| {
                                    view! {
                                        <li>
                                            <span class="milestone__name">{m.name.clone()}</span>
                                            <span class="milestone__project">
                                                {m.project.clone()}
                                            </span>
                                            <span class="milestone__date">
                                                {m.date.format("%b %d, %Y").to_string()}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
