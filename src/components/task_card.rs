//! A draggable card on the task board.
//!
//! Dragging writes a [`DragPayload`] into the browser's dataTransfer
//! channel; dropping on a card inserts before that card, so the card
//! forwards its own index to the drop callback.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::board::{BoardState, DragPayload};

#[component]
pub fn TaskCard(
    task: Task,
    column_id: String,
    index: usize,
    /// Invoked with the dragged payload and the index to insert at.
    #[prop(into)]
    on_drop: Callback<(DragPayload, usize)>,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let task_id = task.id.clone();
    let drag_payload = DragPayload { task_id: task.id.clone(), from_column: column_id };

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(dt) = ev.data_transfer() {
                let _ = dt.set_data("text/plain", &drag_payload.encode());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &drag_payload);
        }
        board.update(|b| b.dragging = true);
    };

    let on_dragend = move |_| {
        board.update(|b| b.dragging = false);
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_drop_card = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        {
            let raw = ev
                .data_transfer()
                .and_then(|dt| dt.get_data("text/plain").ok())
                .unwrap_or_default();
            if let Some(payload) = DragPayload::decode(&raw) {
                on_drop.run((payload, index));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, index, on_drop);
        }
    };

    let priority_class = format!("task-card__priority task-card__priority--{}", task.priority.as_str());
    let due_label = task.due_date.format("%b %d").to_string();
    let has_comments = task.comments > 0;
    let has_attachments = task.attachments > 0;

    view! {
        <div
            class="task-card"
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dragover=on_dragover
            on:drop=on_drop_card
            on:click=move |_| on_edit.run(task_id.clone())
        >
            <div class="task-card__header">
                <span class="task-card__title">{task.title}</span>
                <span class=priority_class>{task.priority.label()}</span>
            </div>
            <Show when={
                let has_description = !task.description.is_empty();
                move || has_description
            }>
                <p class="task-card__description">{task.description.clone()}</p>
            </Show>
            <div class="task-card__meta">
                <span class="task-card__due">{due_label}</span>
                <Show when=move || has_comments>
                    <span class="task-card__comments">{format!("\u{1f4ac} {}", task.comments)}</span>
                </Show>
                <Show when=move || has_attachments>
                    <span class="task-card__attachments">
                        {format!("\u{1f4ce} {}", task.attachments)}
                    </span>
                </Show>
            </div>
        </div>
    }
}
