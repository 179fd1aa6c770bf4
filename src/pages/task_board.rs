//! Task board page: four status columns with drag-and-drop, a priority
//! filter, and a create/edit dialog.
//!
//! Every mutation follows the same shape: snapshot, apply locally, send,
//! then commit or roll the snapshot back. Cross-column drops also patch
//! the task's backend status, derived from the destination column.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::components::task_card::TaskCard;
use crate::components::task_dialog::TaskDialog;
use crate::net::api::Method;
use crate::net::types::{Priority, Task, TaskBoard};
use crate::state::board::{BoardState, DragPayload, MutationPhase, TaskDraft, TaskStatus};
use crate::state::session::{self, SessionState};
use crate::state::validate::FieldError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum DialogMode {
    Create,
    Edit(String),
}

#[component]
pub fn TaskBoardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let board = expect_context::<RwSignal<BoardState>>();

    let dialog = RwSignal::new(None::<DialogMode>);
    let draft = RwSignal::new(TaskDraft::default());
    let field_error = RwSignal::new(None::<FieldError>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            board.update(|b| {
                b.loading = true;
                b.error = None;
            });
            leptos::task::spawn_local(async move {
                match session::authorized::<TaskBoard>(session, "taskboard", Method::Get, None)
                    .await
                {
                    Ok(data) => board.update(|b| b.adopt(data)),
                    Err(err) => board.update(|b| {
                        b.loading = false;
                        b.error = Some(err.to_string());
                    }),
                }
            });
        }
    };
    Effect::new(move || load());

    // One handler for every drop, whether it lands on a card or on the
    // column body.
    let request_move = move |payload: DragPayload, to_column: String, to_index: usize| {
        board.update(|b| b.dragging = false);

        if payload.from_column == to_column {
            // Reordering inside a column has no backend counterpart.
            board.update(|b| {
                b.move_task(&payload.task_id, &payload.from_column, &to_column, to_index);
            });
            return;
        }

        let Some(status) = TaskStatus::for_column(&to_column) else {
            return;
        };
        let mut moved = false;
        board.update(|b| {
            if b.begin_mutation() {
                moved = b.move_task(&payload.task_id, &payload.from_column, &to_column, to_index);
                if !moved {
                    b.commit();
                }
            }
        });
        if !moved {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let endpoint = format!("taskboard/{}/status", payload.task_id);
            leptos::task::spawn_local(async move {
                let body = serde_json::json!({ "status": status.as_str() });
                match session::authorized_empty(session, &endpoint, Method::Patch, Some(&body))
                    .await
                {
                    Ok(()) => board.update(BoardState::commit),
                    Err(err) => board.update(|b| b.roll_back(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = status;
            board.update(BoardState::commit);
        }
    };

    let open_create = move |_| {
        draft.set(TaskDraft::default());
        field_error.set(None);
        dialog.set(Some(DialogMode::Create));
    };

    let open_edit = Callback::new(move |task_id: String| {
        // Editing is blocked while another change is still in flight.
        if matches!(board.get().mutation, MutationPhase::Pending { .. }) {
            return;
        }
        if let Some(task) = board.get().board.tasks.get(&task_id) {
            draft.set(TaskDraft::from_task(task));
            field_error.set(None);
            dialog.set(Some(DialogMode::Edit(task_id)));
        }
    });

    let close_dialog = Callback::new(move |()| dialog.set(None));

    let submit_create = move |payload: crate::state::board::TaskPayload| {
        let temp = Task {
            id: format!("temp-{}", uuid::Uuid::new_v4()),
            title: payload.title.clone(),
            description: payload.description.clone(),
            priority: payload.priority,
            due_date: payload.due_date,
            comments: 0,
            attachments: 0,
        };
        let mut began = false;
        board.update(|b| {
            began = b.begin_mutation();
            if began {
                b.insert_task("column-1", temp);
            }
        });
        if !began {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let body = serde_json::to_value(&payload).unwrap_or_default();
                let created =
                    session::authorized_empty(session, "taskboard", Method::Post, Some(&body))
                        .await;
                match created {
                    Ok(()) => {
                        // Swap the temp card for the server's board.
                        match session::authorized::<TaskBoard>(
                            session,
                            "taskboard",
                            Method::Get,
                            None,
                        )
                        .await
                        {
                            Ok(data) => board.update(|b| {
                                b.commit();
                                b.adopt(data);
                            }),
                            Err(_) => board.update(BoardState::commit),
                        }
                    }
                    Err(err) => board.update(|b| b.roll_back(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        board.update(BoardState::commit);
    };

    let submit_edit = move |task_id: String, payload: crate::state::board::TaskPayload| {
        let mut began = false;
        board.update(|b| {
            began = b.begin_mutation();
            if began {
                if let Some(existing) = b.board.tasks.get(&task_id) {
                    let updated = Task {
                        id: task_id.clone(),
                        title: payload.title.clone(),
                        description: payload.description.clone(),
                        priority: payload.priority,
                        due_date: payload.due_date,
                        comments: existing.comments,
                        attachments: existing.attachments,
                    };
                    b.update_task(updated);
                }
            }
        });
        if !began {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let endpoint = format!("taskboard/{task_id}");
                let body = serde_json::to_value(&payload).unwrap_or_default();
                match session::authorized_empty(session, &endpoint, Method::Put, Some(&body)).await
                {
                    Ok(()) => board.update(BoardState::commit),
                    Err(err) => board.update(|b| b.roll_back(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_id, payload);
            board.update(BoardState::commit);
        }
    };

    let submit = Callback::new(move |()| {
        let today = chrono::Local::now().date_naive();
        match draft.get().validate(today) {
            Err(err) => field_error.set(Some(err)),
            Ok(payload) => {
                field_error.set(None);
                match dialog.get() {
                    Some(DialogMode::Create) => submit_create(payload),
                    Some(DialogMode::Edit(task_id)) => submit_edit(task_id, payload),
                    None => {}
                }
                dialog.set(None);
            }
        }
    });

    let delete = Callback::new(move |()| {
        let Some(DialogMode::Edit(task_id)) = dialog.get() else {
            return;
        };
        dialog.set(None);
        let mut began = false;
        board.update(|b| {
            began = b.begin_mutation();
            if began {
                b.remove_task(&task_id);
            }
        });
        if !began {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let endpoint = format!("taskboard/{task_id}");
                match session::authorized_empty(session, &endpoint, Method::Delete, None).await {
                    Ok(()) => board.update(BoardState::commit),
                    Err(err) => board.update(|b| b.roll_back(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        board.update(BoardState::commit);
    });

    let load_error = Signal::derive(move || board.get().error.clone());
    let rollback_error =
        Signal::derive(move || board.get().rollback_message().map(str::to_owned));

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1>"Task Board"</h1>
                <select
                    class="board-page__filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        board.update(|b| {
                            b.filter = Priority::ALL.into_iter().find(|p| p.as_str() == value);
                        });
                    }
                >
                    <option value="all" selected=move || board.get().filter.is_none()>
                        "All priorities"
                    </option>
                    {Priority::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option
                                    value=p.as_str()
                                    selected=move || board.get().filter == Some(p)
                                >
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <Show when=move || {
                    matches!(board.get().mutation, MutationPhase::Pending { .. })
                }>
                    <span class="board-page__saving">"Saving..."</span>
                </Show>
                <button class="board-page__add" on:click=open_create>
                    "+ New Task"
                </button>
            </header>

            <ErrorBanner message=load_error on_dismiss=Callback::new(move |()| {
                board.update(|b| b.error = None);
            }) on_retry=Callback::new(move |()| load())/>
            <ErrorBanner message=rollback_error on_dismiss=Callback::new(move |()| {
                board.update(BoardState::dismiss_rollback);
            })/>

            <Show
                when=move || !board.get().loading
                fallback=|| view! { <Loader label="Loading board..."/> }
            >
                <div class="board-page__columns">
                    {move || {
                        let state = board.get();
                        state
                            .board
                            .column_order
                            .iter()
                            .map(|column_id| {
                                let column_id = column_id.clone();
                                let title = state
                                    .board
                                    .columns
                                    .get(&column_id)
                                    .map_or_else(String::new, |c| c.title.clone());
                                let visible = state.visible_task_ids(&column_id);
                                let count = visible.len();

                                let drop_column = column_id.clone();
                                let on_column_drop = move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    #[cfg(feature = "hydrate")]
                                    {
                                        let raw = ev
                                            .data_transfer()
                                            .and_then(|dt| dt.get_data("text/plain").ok())
                                            .unwrap_or_default();
                                        if let Some(payload) = DragPayload::decode(&raw) {
                                            let len = board
                                                .get_untracked()
                                                .visible_task_ids(&drop_column)
                                                .len();
                                            request_move(payload, drop_column.clone(), len);
                                        }
                                    }
                                    #[cfg(not(feature = "hydrate"))]
                                    {
                                        let _ = &drop_column;
                                    }
                                };

                                let card_column = column_id.clone();
                                let on_card_drop = Callback::new(
                                    move |(payload, index): (DragPayload, usize)| {
                                        request_move(payload, card_column.clone(), index);
                                    },
                                );

                                let cards = visible
                                    .iter()
                                    .enumerate()
                                    .filter_map(|(index, task_id)| {
                                        state.board.tasks.get(task_id).map(|task| {
                                            view! {
                                                <TaskCard
                                                    task=task.clone()
                                                    column_id=column_id.clone()
                                                    index=index
                                                    on_drop=on_card_drop
                                                    on_edit=open_edit
                                                />
                                            }
                                        })
                                    })
                                    .collect_view();

                                view! {
                                    <section
                                        class="board-column"
                                        on:dragover=|ev| ev.prevent_default()
                                        on:drop=on_column_drop
                                    >
                                        <header class="board-column__header">
                                            <h2>{title}</h2>
                                            <span class="board-column__count">{count}</span>
                                        </header>
                                        <div class="board-column__cards">{cards}</div>
                                    </section>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            {move || {
                dialog
                    .get()
                    .map(|mode| {
                        let (heading, deletable) = match &mode {
                            DialogMode::Create => ("New Task", false),
                            DialogMode::Edit(_) => ("Edit Task", true),
                        };
                        let heading = heading.to_owned();
                        view! {
                            <TaskDialog
                                heading=heading
                                draft=draft
                                error=field_error
                                on_submit=submit
                                on_cancel=close_dialog
                                on_delete=deletable.then_some(delete)
                            />
                        }
                    })
            }}
        </div>
    }
}
