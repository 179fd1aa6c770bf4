//! Modal dialog for creating and editing board tasks.
//!
//! The dialog edits a [`TaskDraft`] held by the page; validation happens
//! in the page's submit handler so a rejected draft stays on screen with
//! its error.

use leptos::prelude::*;

use crate::net::types::Priority;
use crate::state::board::TaskDraft;
use crate::state::validate::FieldError;

#[component]
pub fn TaskDialog(
    heading: String,
    draft: RwSignal<TaskDraft>,
    error: RwSignal<Option<FieldError>>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    /// Edit mode shows a delete button; create mode passes `None`.
    #[prop(optional_no_strip)]
    on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let set_priority = move |value: String| {
        let priority = Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .unwrap_or_default();
        draft.update(|d| d.priority = priority);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__heading">{heading}</h2>

                <label class="dialog__field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                    />
                </label>

                <label class="dialog__field">
                    <span>"Description"</span>
                    <textarea
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    ></textarea>
                </label>

                <label class="dialog__field">
                    <span>"Priority"</span>
                    <select on:change=move |ev| set_priority(event_target_value(&ev))>
                        {Priority::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option
                                        value=p.as_str()
                                        selected=move || draft.get().priority == p
                                    >
                                        {p.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="dialog__field">
                    <span>"Due date"</span>
                    <input
                        type="date"
                        prop:value=move || draft.get().due_date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.due_date = value);
                        }
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">
                        {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                    </p>
                </Show>

                <div class="dialog__actions">
                    {on_delete.map(|delete| {
                        view! {
                            <button
                                class="dialog__button dialog__button--delete"
                                on:click=move |_| delete.run(())
                            >
                                "Delete"
                            </button>
                        }
                    })}
                    <span class="dialog__spacer"></span>
                    <button class="dialog__button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="dialog__button dialog__button--primary"
                        on:click=move |_| on_submit.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
