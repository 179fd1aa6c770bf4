//! Dismissible error banner with an optional retry action.
//!
//! Pages keep their error as `Option<String>` state; the banner renders
//! only while one is set.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
    #[prop(optional, into)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__message">
                    {move || message.get().unwrap_or_default()}
                </span>
                {on_retry.map(|retry| {
                    view! {
                        <button
                            class="error-banner__button error-banner__button--retry"
                            on:click=move |_| retry.run(())
                        >
                            "Retry"
                        </button>
                    }
                })}
                <button
                    class="error-banner__button error-banner__button--dismiss"
                    on:click=move |_| on_dismiss.run(())
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
