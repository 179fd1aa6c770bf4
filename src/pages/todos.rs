//! To-do list page: quick add, completion filters, and optimistic
//! toggle/delete with per-item rollback.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::net::api::Method;
use crate::net::types::TodoItem;
use crate::state::session::{self, SessionState};
use crate::state::todos::{TodoDraft, TodoFilter, TodoState};
use crate::state::validate::FieldError;

#[component]
pub fn TodosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let todos = expect_context::<RwSignal<TodoState>>();

    let draft = RwSignal::new(TodoDraft::default());
    let field_error = RwSignal::new(None::<FieldError>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            todos.update(|t| {
                t.loading = true;
                t.error = None;
            });
            leptos::task::spawn_local(async move {
                match session::authorized::<Vec<TodoItem>>(session, "todos", Method::Get, None)
                    .await
                {
                    Ok(items) => todos.update(|t| t.adopt(items)),
                    Err(err) => todos.update(|t| {
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
        let today = chrono::Local::now().date_naive();
        match draft.get().validate(today) {
            Err(err) => field_error.set(Some(err)),
            Ok(payload) => {
                field_error.set(None);
                draft.set(TodoDraft::default());
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        let body = serde_json::to_value(&payload).unwrap_or_default();
                        match session::authorized::<TodoItem>(
                            session,
                            "todos",
                            Method::Post,
                            Some(&body),
                        )
                        .await
                        {
                            Ok(item) => todos.update(|t| t.insert(item)),
                            Err(err) => todos.update(|t| t.error = Some(err.to_string())),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = payload;
            }
        }
    };

    // Flip locally, then patch; a failure puts the old value back.
    let toggle = move |id: String| {
        let mut new_value = None;
        todos.update(|t| new_value = t.toggle(&id));
        let Some(completed) = new_value else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let endpoint = format!("todos/{id}");
                let body = serde_json::json!({ "completed": completed });
                if let Err(err) =
                    session::authorized_empty(session, &endpoint, Method::Patch, Some(&body)).await
                {
                    todos.update(|t| {
                        t.set_completed(&id, !completed);
                        t.error = Some(err.to_string());
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, completed);
    };

    // Remove locally, then delete; a failure puts the item back.
    let remove = move |id: String| {
        let mut removed = None;
        todos.update(|t| removed = t.remove(&id));
        let Some(item) = removed else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let endpoint = format!("todos/{id}");
                if let Err(err) =
                    session::authorized_empty(session, &endpoint, Method::Delete, None).await
                {
                    todos.update(|t| {
                        t.insert(item);
                        t.error = Some(err.to_string());
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, item);
    };

    let error = Signal::derive(move || todos.get().error.clone());

    view! {
        <div class="todos-page">
            <header class="todos-page__header">
                <h1>"To-Do List"</h1>
                <span class="todos-page__remaining">
                    {move || format!("{} remaining", todos.get().remaining())}
                </span>
            </header>

            <ErrorBanner
                message=error
                on_dismiss=Callback::new(move |()| todos.update(|t| t.error = None))
                on_retry=Callback::new(move |()| load())
            />

            <form class="todos-page__add" on:submit=submit>
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || draft.get().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                />
                <input
                    type="date"
                    prop:value=move || draft.get().due_date
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.due_date = value);
                    }
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.priority = value);
                }>
                    <option value="LOW">"Low"</option>
                    <option value="MEDIUM" selected=true>"Medium"</option>
                    <option value="HIGH">"High"</option>
                </select>
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || draft.get().category
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.category = value);
                    }
                />
                <button type="submit">"Add"</button>
            </form>
            <Show when=move || field_error.get().is_some()>
                <p class="todos-page__form-error">
                    {move || field_error.get().map(|e| e.to_string()).unwrap_or_default()}
                </p>
            </Show>

            <div class="todos-page__filters">
                {TodoFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let class = move || {
                            if todos.get().filter == filter {
                                "todos-page__filter todos-page__filter--active"
                            } else {
                                "todos-page__filter"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| {
                                todos.update(|t| t.filter = filter);
                            }>
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !todos.get().loading
                fallback=|| view! { <Loader label="Loading to-dos..."/> }
            >
                <ul class="todos-page__list">
                    {move || {
                        todos
                            .get()
                            .visible()
                            .into_iter()
                            .cloned()
                            .map(|item| {
                                let toggle_id = item.id.clone();
                                let remove_id = item.id.clone();
                                let item_class = if item.completed {
                                    "todo-item todo-item--done"
                                } else {
                                    "todo-item"
                                };
                                view! {
                                    <li class=item_class>
                                        <input
                                            type="checkbox"
                                            prop:checked=item.completed
                                            on:change=move |_| toggle(toggle_id.clone())
                                        />
                                        <div class="todo-item__body">
                                            <span class="todo-item__title">{item.title}</span>
                                            <span class="todo-item__meta">
                                                {format!(
                                                    "{} \u{00b7} {} \u{00b7} due {}",
                                                    item.category,
                                                    item.priority,
                                                    item.due_date.format("%b %d")
                                                )}
                                            </span>
                                        </div>
                                        <button
                                            class="todo-item__delete"
                                            on:click=move |_| remove(remove_id.clone())
                                        >
                                            "\u{2715}"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
