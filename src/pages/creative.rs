//! Creative canvas page: free-form text, notes, and images with
//! pointer-drag placement and linear undo/redo.
//!
//! History is local. Position and content changes persist to the
//! backend per item; undo and redo rewind the local snapshot without
//! issuing requests.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loader::Loader;
use crate::net::api::Method;
use crate::net::types::{CanvasDoc, CanvasInfo, CanvasItem, ItemBody};
use crate::state::canvas::{CanvasState, new_note_item, new_text_item};
use crate::state::session::{self, SessionState};

#[component]
pub fn CreativePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas = expect_context::<RwSignal<CanvasState>>();

    #[cfg(feature = "hydrate")]
    let gesture = StoredValue::new_local(None::<crate::util::gesture::PointerGesture>);

    let load_doc = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            canvas.update(|c| {
                c.loading = true;
                c.error = None;
            });
            leptos::task::spawn_local(async move {
                let endpoint = format!("canvas/{id}");
                match session::authorized::<CanvasDoc>(session, &endpoint, Method::Get, None).await
                {
                    Ok(doc) => canvas.update(|c| c.adopt(doc)),
                    Err(err) => canvas.update(|c| {
                        c.loading = false;
                        c.error = Some(err.to_string());
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let load_list = move || {
        #[cfg(feature = "hydrate")]
        {
            canvas.update(|c| {
                c.loading = true;
                c.error = None;
            });
            leptos::task::spawn_local(async move {
                match session::authorized::<Vec<CanvasInfo>>(session, "canvases", Method::Get, None)
                    .await
                {
                    Ok(list) => {
                        let first = list.first().map(|c| c.id.clone());
                        canvas.update(|c| {
                            c.canvases = list;
                            c.loading = false;
                        });
                        if let Some(id) = first {
                            load_doc(id);
                        }
                    }
                    Err(err) => canvas.update(|c| {
                        c.loading = false;
                        c.error = Some(err.to_string());
                    }),
                }
            });
        }
    };
    Effect::new(move || load_list());

    // Persist one item's current shape. Items the backend has not
    // acknowledged yet have no id and are skipped.
    let save_item = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            let state = canvas.get_untracked();
            let Some(item) = state.doc.items.get(index).cloned() else {
                return;
            };
            let Some(item_id) = item.id.clone() else {
                return;
            };
            let canvas_id = state.doc.canvas.id.clone();
            let epoch = state.epoch;
            leptos::task::spawn_local(async move {
                let endpoint = format!("canvas/{canvas_id}/items/{item_id}");
                let body = serde_json::to_value(&item).unwrap_or_default();
                if let Err(err) =
                    session::authorized_empty(session, &endpoint, Method::Put, Some(&body)).await
                {
                    canvas.update(|c| {
                        if c.epoch == epoch {
                            c.error = Some(err.to_string());
                        }
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = index;
    };

    // Create an item on the backend and adopt the assigned id.
    let create_item = move |index: usize, item: CanvasItem| {
        #[cfg(feature = "hydrate")]
        {
            let state = canvas.get_untracked();
            let canvas_id = state.doc.canvas.id.clone();
            let epoch = state.epoch;
            leptos::task::spawn_local(async move {
                let endpoint = format!("canvas/{canvas_id}");
                let json = serde_json::to_value(&item).unwrap_or_default();
                match session::authorized_multipart::<CanvasItem>(
                    session,
                    &endpoint,
                    Method::Post,
                    "canvasItem",
                    &json,
                    None,
                )
                .await
                {
                    Ok(created) => canvas.update(|c| {
                        if c.epoch == epoch {
                            if let Some(slot) = c.doc.items.get_mut(index) {
                                slot.id = created.id;
                            }
                        }
                    }),
                    Err(err) => canvas.update(|c| {
                        if c.epoch == epoch {
                            c.error = Some(err.to_string());
                        }
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (index, item);
        }
    };

    let add_text = move |_| {
        let item = new_text_item(120.0, 120.0);
        let mut index = 0;
        canvas.update(|c| {
            c.add_item(item.clone());
            index = c.doc.items.len() - 1;
        });
        create_item(index, item);
    };

    let add_note = move |_| {
        let item = new_note_item(180.0, 160.0);
        let mut index = 0;
        canvas.update(|c| {
            c.add_item(item.clone());
            index = c.doc.items.len() - 1;
        });
        create_item(index, item);
    };

    let add_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::canvas::new_image_item;

            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            let state = canvas.get_untracked();
            let canvas_id = state.doc.canvas.id.clone();
            let epoch = state.epoch;
            let item = new_image_item(200.0, 200.0, "/placeholder.svg".to_owned());
            let json = serde_json::to_value(&item).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let endpoint = format!("canvas/{canvas_id}");
                match session::authorized_multipart::<CanvasItem>(
                    session,
                    &endpoint,
                    Method::Post,
                    "canvasItem",
                    &json,
                    Some(&file),
                )
                .await
                {
                    Ok(created) => canvas.update(|c| {
                        if c.epoch == epoch {
                            c.add_item(created);
                        }
                    }),
                    Err(err) => canvas.update(|c| {
                        if c.epoch == epoch {
                            c.error = Some(err.to_string());
                        }
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let delete_selected = move |_| {
        let mut removed = None;
        canvas.update(|c| {
            if let Some(index) = c.selected {
                removed = c.remove_item(index);
            }
        });
        #[cfg(feature = "hydrate")]
        {
            let Some(item_id) = removed.and_then(|item| item.id) else {
                return;
            };
            let state = canvas.get_untracked();
            let canvas_id = state.doc.canvas.id.clone();
            let epoch = state.epoch;
            leptos::task::spawn_local(async move {
                let endpoint = format!("canvas/{canvas_id}/items/{item_id}");
                if let Err(err) =
                    session::authorized_empty(session, &endpoint, Method::Delete, None).await
                {
                    canvas.update(|c| {
                        if c.epoch == epoch {
                            c.error = Some(err.to_string());
                        }
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = removed;
    };

    let new_canvas = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match session::authorized::<CanvasInfo>(session, "canvas/new", Method::Post, None)
                    .await
                {
                    Ok(info) => {
                        let id = info.id.clone();
                        canvas.update(|c| c.canvases.push(info));
                        load_doc(id);
                    }
                    Err(err) => canvas.update(|c| c.error = Some(err.to_string())),
                }
            });
        }
    };

    let begin_drag = move |index: usize, ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let state = canvas.get_untracked();
            let Some(item) = state.doc.items.get(index) else {
                return;
            };
            let origin_x = item.x;
            let origin_y = item.y;
            let start_x = f64::from(ev.client_x());
            let start_y = f64::from(ev.client_y());

            canvas.update(|c| {
                c.selected = Some(index);
                // One undo step per gesture, recorded up front.
                c.checkpoint();
            });

            let on_move = move |ev: web_sys::PointerEvent| {
                let dx = f64::from(ev.client_x()) - start_x;
                let dy = f64::from(ev.client_y()) - start_y;
                canvas.update(|c| c.place_item(index, origin_x + dx, origin_y + dy));
            };
            let on_up = move |_: web_sys::PointerEvent| {
                gesture.set_value(None);
                save_item(index);
            };
            gesture.set_value(crate::util::gesture::PointerGesture::begin(on_move, on_up));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (index, &ev);
        }
    };

    let error = Signal::derive(move || canvas.get().error.clone());

    view! {
        <div class="creative-page">
            <header class="creative-page__header">
                <h1>"Creative Space"</h1>
                <select
                    class="creative-page__picker"
                    on:change=move |ev| load_doc(event_target_value(&ev))
                >
                    {move || {
                        let state = canvas.get();
                        let current = state.doc.canvas.id.clone();
                        state
                            .canvases
                            .iter()
                            .map(|info| {
                                let selected = info.id == current;
                                view! {
                                    <option value=info.id.clone() selected=selected>
                                        {info.title.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <button on:click=new_canvas>"+ New Canvas"</button>
                <span class="creative-page__spacer"></span>
                <button on:click=add_text>"Text"</button>
                <button on:click=add_note>"Note"</button>
                <label class="creative-page__upload">
                    "Image"
                    <input type="file" accept="image/*" on:change=add_image/>
                </label>
                <button
                    on:click=move |_| canvas.update(|c| {
                        c.undo();
                    })
                    disabled=move || !canvas.get().history.can_undo()
                >
                    "Undo"
                </button>
                <button
                    on:click=move |_| canvas.update(|c| {
                        c.redo();
                    })
                    disabled=move || !canvas.get().history.can_redo()
                >
                    "Redo"
                </button>
                <button
                    on:click=delete_selected
                    disabled=move || canvas.get().selected.is_none()
                >
                    "Delete"
                </button>
            </header>

            <ErrorBanner message=error on_dismiss=Callback::new(move |()| {
                canvas.update(|c| c.error = None);
            })/>

            <Show
                when=move || !canvas.get().loading
                fallback=|| view! { <Loader label="Loading canvas..."/> }
            >
                <div class="creative-page__surface">
                    {move || {
                        let state = canvas.get();
                        let selected = state.selected;
                        state
                            .doc
                            .items
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, item)| {
                                canvas_item_view(index, item, selected == Some(index), begin_drag, move |i, text| {
                                    let mut changed = false;
                                    canvas.update(|c| changed = c.set_content(i, text));
                                    if changed {
                                        save_item(i);
                                    }
                                })
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

fn canvas_item_view(
    index: usize,
    item: CanvasItem,
    selected: bool,
    begin_drag: impl Fn(usize, leptos::ev::PointerEvent) + Copy + 'static,
    commit_text: impl Fn(usize, String) + Copy + 'static,
) -> impl IntoView {
    let position = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        item.x, item.y, item.width, item.height
    );
    let class = {
        let kind = match &item.body {
            ItemBody::Text { .. } => "canvas-item--text",
            ItemBody::Image { .. } => "canvas-item--image",
            ItemBody::Note { .. } => "canvas-item--note",
        };
        if selected {
            format!("canvas-item {kind} canvas-item--selected")
        } else {
            format!("canvas-item {kind}")
        }
    };

    let body = match item.body {
        ItemBody::Text { content, style } => {
            let inline = format!(
                "font-size:{};font-weight:{};",
                style.font_size.unwrap_or_default(),
                style.font_weight.unwrap_or_default()
            );
            let color_class = style.color_class.unwrap_or_default();
            view! {
                <textarea
                    class=format!("canvas-item__text {color_class}")
                    style=inline
                    prop:value=content
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:change=move |ev| commit_text(index, event_target_value(&ev))
                ></textarea>
            }
            .into_any()
        }
        ItemBody::Image { content } => view! {
            <img class="canvas-item__image" src=content draggable="false"/>
        }
        .into_any(),
        ItemBody::Note { content, style } => {
            let inline = format!(
                "padding:{};border-radius:{};",
                style.padding.unwrap_or_default(),
                style.border_radius.unwrap_or_default()
            );
            let background_class = style.background_class.unwrap_or_default();
            view! {
                <textarea
                    class=format!("canvas-item__note {background_class}")
                    style=inline
                    prop:value=content
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:change=move |ev| commit_text(index, event_target_value(&ev))
                ></textarea>
            }
            .into_any()
        }
    };

    view! {
        <div
            class=class
            style=position
            on:pointerdown=move |ev| begin_drag(index, ev)
        >
            {body}
        </div>
    }
}
