//! Loading indicator shown while a page's data is in flight.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(optional, into)] label: String) -> impl IntoView {
    let label = if label.is_empty() { "Loading...".to_owned() } else { label };
    view! {
        <div class="loader">
            <span class="loader__spinner"></span>
            <span class="loader__label">{label}</span>
        </div>
    }
}
