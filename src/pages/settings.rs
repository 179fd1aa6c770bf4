//! Settings page: profile edits and appearance.

use leptos::prelude::*;

use crate::net::api::Method;
use crate::net::types::UserProfile;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match session::authorized::<UserProfile>(session, "user/me", Method::Get, None)
                    .await
                {
                    Ok(profile) => {
                        name.set(profile.name.clone());
                        bio.set(profile.bio.clone());
                        email.set(profile.email.clone());
                        session.update(|s| s.profile = Some(profile));
                    }
                    Err(err) => status.set(Some(err.to_string())),
                }
            });
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            status.set(None);
            leptos::task::spawn_local(async move {
                let body = serde_json::json!({ "name": name.get(), "bio": bio.get() });
                match session::authorized::<UserProfile>(
                    session,
                    "user/profile",
                    Method::Put,
                    Some(&body),
                )
                .await
                {
                    Ok(profile) => {
                        session.update(|s| s.profile = Some(profile));
                        status.set(Some("Profile saved".to_owned()));
                    }
                    Err(err) => status.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <h1>"Settings"</h1>
            </header>

            <section class="settings-page__section">
                <h2>"Profile"</h2>
                <form on:submit=on_save>
                    <label class="settings-page__field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-page__field">
                        <span>"Email"</span>
                        <input type="email" prop:value=move || email.get() disabled=true/>
                    </label>
                    <label class="settings-page__field">
                        <span>"Bio"</span>
                        <textarea
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" disabled=move || busy.get()>
                        "Save changes"
                    </button>
                    <Show when=move || status.get().is_some()>
                        <p class="settings-page__status">
                            {move || status.get().unwrap_or_default()}
                        </p>
                    </Show>
                </form>
            </section>

            <section class="settings-page__section">
                <h2>"Appearance"</h2>
                <label class="settings-page__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=on_toggle_dark
                    />
                    <span>"Dark mode"</span>
                </label>
            </section>
        </div>
    }
}
