//! Session lifecycle: credential storage, restore-on-launch, and the
//! refresh-once retry wrapped around every authorized request.
//!
//! The retry policy lives in [`run_with_refresh`], which is generic over
//! the request and refresh futures so the policy itself tests natively.
//! The rule: a request that comes back 401 triggers exactly one refresh
//! attempt, then exactly one retry with the fresh token. A second 401 is
//! reported as-is, and a failed refresh signs the user out. The backend
//! rotates the token pair on every refresh, so a rotation is reported to
//! the caller even when the retried request fails.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::api::{self, ApiError, Method};
use crate::net::types::{AuthTokens, UserProfile};

/// Where the session stands. Pages gate rendering on this: `Restoring`
/// shows a loader, `SignedOut` redirects to login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Restoring,
    SignedOut,
    SignedIn,
}

/// Session state provided via context as `RwSignal<SessionState>`.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub tokens: Option<AuthTokens>,
    pub profile: Option<UserProfile>,
}

impl SessionState {
    pub fn sign_in(&mut self, tokens: AuthTokens) {
        self.tokens = Some(tokens);
        self.phase = SessionPhase::SignedIn;
    }

    pub fn sign_out(&mut self) {
        self.tokens = None;
        self.profile = None;
        self.phase = SessionPhase::SignedOut;
    }

    /// Apply a token rotation from a successful refresh. A `None` means
    /// the original token was still good and nothing changes.
    pub fn adopt_rotation(&mut self, rotated: Option<AuthTokens>) {
        if let Some(tokens) = rotated {
            self.tokens = Some(tokens);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.as_ref().map(|t| t.token.clone())
    }
}

/// Run `call` with the access token, refreshing at most once on a 401.
///
/// The second element is the rotated token pair whenever the refresh
/// endpoint succeeded. It is reported even when the retried call then
/// fails: the old pair is already invalidated server-side, so the caller
/// must persist the rotation regardless of the retry's outcome. A refresh
/// failure of any kind maps to [`ApiError::SessionExpired`]; a 401 on the
/// retried call is returned unchanged so the caller can tell the two
/// apart.
pub async fn run_with_refresh<T, C, CFut, R, RFut>(
    tokens: AuthTokens,
    mut call: C,
    refresh: R,
) -> (Result<T, ApiError>, Option<AuthTokens>)
where
    C: FnMut(String) -> CFut,
    CFut: Future<Output = Result<T, ApiError>>,
    R: FnOnce(String) -> RFut,
    RFut: Future<Output = Result<AuthTokens, ApiError>>,
{
    match call(tokens.token.clone()).await {
        Ok(value) => (Ok(value), None),
        Err(err) if err.is_unauthorized() => {
            match refresh(tokens.refresh_token.clone()).await {
                Ok(fresh) => {
                    let retried = call(fresh.token.clone()).await;
                    (retried, Some(fresh))
                }
                Err(_) => (Err(ApiError::SessionExpired), None),
            }
        }
        Err(err) => (Err(err), None),
    }
}

// =============================================================
// Credential persistence
// =============================================================

/// localStorage-backed token store. No-ops outside the browser.
pub mod credential_store {
    use crate::net::types::AuthTokens;

    #[cfg(feature = "hydrate")]
    const TOKEN_KEY: &str = "orbyq.token";
    #[cfg(feature = "hydrate")]
    const REFRESH_KEY: &str = "orbyq.refreshToken";

    pub fn load() -> Option<AuthTokens> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            let token = storage.get_item(TOKEN_KEY).ok()??;
            let refresh_token = storage.get_item(REFRESH_KEY).ok()??;
            Some(AuthTokens { token, refresh_token })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    pub fn save(tokens: &AuthTokens) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, &tokens.token);
                    let _ = storage.set_item(REFRESH_KEY, &tokens.refresh_token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = tokens;
        }
    }

    pub fn clear() {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                    let _ = storage.remove_item(REFRESH_KEY);
                }
            }
        }
    }
}

// =============================================================
// Authorized calls against the live backend
// =============================================================

fn refresh_request(refresh_token: String) -> impl Future<Output = Result<AuthTokens, ApiError>> {
    async move {
        let body = serde_json::json!({ "refreshToken": refresh_token });
        api::call::<AuthTokens>("auth/refresh", Method::Post, Some(&body), None).await
    }
}

/// Persist a token rotation, then handle a dead session. The rotation is
/// saved first and unconditionally: a refresh that succeeded invalidated
/// the old pair even if the request it was retried for failed.
fn persist_outcome<T>(
    session: RwSignal<SessionState>,
    result: &Result<T, ApiError>,
    rotated: Option<AuthTokens>,
) {
    if let Some(tokens) = rotated {
        credential_store::save(&tokens);
        session.update(|s| s.adopt_rotation(Some(tokens)));
    }
    if matches!(result, Err(ApiError::SessionExpired)) {
        credential_store::clear();
        session.update(SessionState::sign_out);
    }
}

/// Issue an authorized JSON request and parse the response, applying the
/// refresh-once policy and persisting any token rotation.
pub async fn authorized<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let Some(tokens) = session.get_untracked().tokens else {
        return Err(ApiError::SessionExpired);
    };
    let (result, rotated) = run_with_refresh(
        tokens,
        |token| async move { api::call::<T>(endpoint, method, body, Some(&token)).await },
        refresh_request,
    )
    .await;
    persist_outcome(session, &result, rotated);
    result
}

/// Like [`authorized`] but for endpoints whose response body we discard.
pub async fn authorized_empty(
    session: RwSignal<SessionState>,
    endpoint: &str,
    method: Method,
    body: Option<&serde_json::Value>,
) -> Result<(), ApiError> {
    let Some(tokens) = session.get_untracked().tokens else {
        return Err(ApiError::SessionExpired);
    };
    let (result, rotated) = run_with_refresh(
        tokens,
        |token| async move { api::call_empty(endpoint, method, body, Some(&token)).await },
        refresh_request,
    )
    .await;
    persist_outcome(session, &result, rotated);
    result
}

/// Authorized multipart request (canvas image upload). Browser only.
#[cfg(feature = "hydrate")]
pub async fn authorized_multipart<T: DeserializeOwned>(
    session: RwSignal<SessionState>,
    endpoint: &str,
    method: Method,
    part_name: &str,
    json_part: &serde_json::Value,
    file: Option<&web_sys::File>,
) -> Result<T, ApiError> {
    let Some(tokens) = session.get_untracked().tokens else {
        return Err(ApiError::SessionExpired);
    };
    let (result, rotated) = run_with_refresh(
        tokens,
        |token| async move {
            api::call_multipart::<T>(endpoint, method, part_name, json_part, file, Some(&token))
                .await
        },
        refresh_request,
    )
    .await;
    persist_outcome(session, &result, rotated);
    result
}

// =============================================================
// Restore on launch
// =============================================================

/// The desktop shell starts the backend alongside the webview, so the
/// first requests can race it. Ping with backoff before judging the
/// stored credential.
async fn wait_for_backend() {
    for delay_ms in [250_u32, 500, 1000, 2000, 4000] {
        if api::call_empty("ping", Method::Get, None, None).await.is_ok() {
            return;
        }
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = delay_ms;
    }
}

/// Restore the session from stored credentials. Runs once on mount.
///
/// A stored token is validated against the backend; a 401 goes through
/// the usual refresh-once path. Only a definitive rejection clears the
/// stored pair, so an unreachable backend does not log the user out.
pub async fn restore(session: RwSignal<SessionState>) {
    let Some(stored) = credential_store::load() else {
        session.update(|s| s.phase = SessionPhase::SignedOut);
        return;
    };

    wait_for_backend().await;

    let (result, rotated) = run_with_refresh(
        stored.clone(),
        |token| async move {
            api::call_empty("auth/validate", Method::Get, None, Some(&token)).await
        },
        refresh_request,
    )
    .await;

    match result {
        Ok(()) => {
            let tokens = rotated.unwrap_or(stored);
            credential_store::save(&tokens);
            session.update(|s| s.sign_in(tokens));
        }
        Err(ApiError::SessionExpired) => {
            credential_store::clear();
            session.update(SessionState::sign_out);
        }
        Err(err) if err.is_unauthorized() => {
            credential_store::clear();
            session.update(SessionState::sign_out);
        }
        Err(_) => {
            // Backend never came up. A rotation that happened before the
            // failure still replaced the old pair, so store it; otherwise
            // leave the stored pair alone for the next launch.
            if let Some(tokens) = rotated {
                credential_store::save(&tokens);
            }
            session.update(|s| s.phase = SessionPhase::SignedOut);
        }
    }
}
