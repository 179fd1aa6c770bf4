//! Login and registration page.
//!
//! Both forms post to the auth endpoints and, on success, store the
//! returned token pair and flip the session to signed-in; the redirect
//! home falls out of the phase change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionPhase, SessionState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let registering = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        if session.get().phase == SessionPhase::SignedIn {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::{self, Method};
            use crate::net::types::AuthTokens;
            use crate::state::session::credential_store;

            let (endpoint, body) = if registering.get() {
                (
                    "auth/register",
                    serde_json::json!({
                        "name": name.get(),
                        "email": email.get(),
                        "password": password.get(),
                    }),
                )
            } else {
                (
                    "auth/login",
                    serde_json::json!({
                        "email": email.get(),
                        "password": password.get(),
                    }),
                )
            };

            busy.set(true);
            leptos::task::spawn_local(async move {
                match api::call::<AuthTokens>(endpoint, Method::Post, Some(&body), None).await {
                    Ok(tokens) => {
                        credential_store::save(&tokens);
                        session.update(|s| s.sign_in(tokens));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let tab_class = move |is_register: bool| {
        if registering.get() == is_register {
            "login-page__tab login-page__tab--active"
        } else {
            "login-page__tab"
        }
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__logo">"orbyq"</h1>
            <p class="login-page__tagline">"Your personal productivity space"</p>

            <div class="login-page__tabs">
                <button class=move || tab_class(false) on:click=move |_| registering.set(false)>
                    "Sign in"
                </button>
                <button class=move || tab_class(true) on:click=move |_| registering.set(true)>
                    "Create account"
                </button>
            </div>

            <form class="login-page__form" on:submit=on_submit>
                <Show when=move || registering.get()>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" class="login-page__submit" disabled=move || busy.get()>
                    {move || if registering.get() { "Create account" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
