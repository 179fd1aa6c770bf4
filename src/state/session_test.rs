use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

fn pair(token: &str, refresh: &str) -> AuthTokens {
    AuthTokens { token: token.to_owned(), refresh_token: refresh.to_owned() }
}

fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: "token expired".to_owned() }
}

// =============================================================
// run_with_refresh: the refresh-once policy
// =============================================================

#[test]
fn success_on_first_try_never_refreshes() {
    let calls = Rc::new(Cell::new(0_u32));
    let refreshes = Rc::new(Cell::new(0_u32));

    let result = block_on(run_with_refresh(
        pair("t0", "r0"),
        {
            let calls = Rc::clone(&calls);
            move |token: String| {
                calls.set(calls.get() + 1);
                async move {
                    assert_eq!(token, "t0");
                    Ok(7_u32)
                }
            }
        },
        {
            let refreshes = Rc::clone(&refreshes);
            move |_refresh: String| {
                refreshes.set(refreshes.get() + 1);
                async move { Ok(pair("never", "never")) }
            }
        },
    ));

    assert_eq!(result, (Ok(7), None));
    assert_eq!(calls.get(), 1);
    assert_eq!(refreshes.get(), 0);
}

#[test]
fn unauthorized_refreshes_once_and_retries_with_fresh_token() {
    let calls = Rc::new(Cell::new(0_u32));
    let refreshes = Rc::new(Cell::new(0_u32));

    let result = block_on(run_with_refresh(
        pair("stale", "r0"),
        {
            let calls = Rc::clone(&calls);
            move |token: String| {
                calls.set(calls.get() + 1);
                async move {
                    if token == "stale" {
                        Err(unauthorized())
                    } else {
                        assert_eq!(token, "fresh");
                        Ok("data".to_owned())
                    }
                }
            }
        },
        {
            let refreshes = Rc::clone(&refreshes);
            move |refresh: String| {
                refreshes.set(refreshes.get() + 1);
                async move {
                    assert_eq!(refresh, "r0");
                    Ok(pair("fresh", "r1"))
                }
            }
        },
    ));

    assert_eq!(result, (Ok("data".to_owned()), Some(pair("fresh", "r1"))));
    assert_eq!(calls.get(), 2);
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn rotation_is_reported_even_when_the_retried_call_fails() {
    let calls = Rc::new(Cell::new(0_u32));

    // The refresh rotated the pair server-side; a retry that then hits a
    // 500 must not lose it, or the stored pair goes stale.
    let (result, rotated): (Result<u32, _>, _) = block_on(run_with_refresh(
        pair("stale", "r0"),
        {
            let calls = Rc::clone(&calls);
            move |token: String| {
                calls.set(calls.get() + 1);
                async move {
                    if token == "stale" {
                        Err(unauthorized())
                    } else {
                        Err(ApiError::Status { status: 500, message: "boom".to_owned() })
                    }
                }
            }
        },
        |_refresh: String| async move { Ok(pair("fresh", "r1")) },
    ));

    assert_eq!(result, Err(ApiError::Status { status: 500, message: "boom".to_owned() }));
    assert_eq!(rotated, Some(pair("fresh", "r1")));
    assert_eq!(calls.get(), 2);
}

#[test]
fn second_unauthorized_is_reported_without_another_refresh() {
    let calls = Rc::new(Cell::new(0_u32));
    let refreshes = Rc::new(Cell::new(0_u32));

    let (result, rotated): (Result<u32, _>, _) = block_on(run_with_refresh(
        pair("stale", "r0"),
        {
            let calls = Rc::clone(&calls);
            move |_token: String| {
                calls.set(calls.get() + 1);
                async move { Err(unauthorized()) }
            }
        },
        {
            let refreshes = Rc::clone(&refreshes);
            move |_refresh: String| {
                refreshes.set(refreshes.get() + 1);
                async move { Ok(pair("fresh", "r1")) }
            }
        },
    ));

    assert_eq!(result, Err(unauthorized()));
    // The rotation still happened and still has to be kept.
    assert_eq!(rotated, Some(pair("fresh", "r1")));
    assert_eq!(calls.get(), 2);
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn failed_refresh_maps_to_session_expired() {
    let calls = Rc::new(Cell::new(0_u32));

    let (result, rotated): (Result<u32, _>, _) = block_on(run_with_refresh(
        pair("stale", "r0"),
        {
            let calls = Rc::clone(&calls);
            move |_token: String| {
                calls.set(calls.get() + 1);
                async move { Err(unauthorized()) }
            }
        },
        |_refresh: String| async move {
            Err(ApiError::Status { status: 403, message: "refresh revoked".to_owned() })
        },
    ));

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(rotated, None);
    // Only the original call ran; the retry never happened.
    assert_eq!(calls.get(), 1);
}

#[test]
fn non_401_errors_pass_through_untouched() {
    let refreshes = Rc::new(Cell::new(0_u32));

    let (result, rotated): (Result<u32, _>, _) = block_on(run_with_refresh(
        pair("t0", "r0"),
        |_token: String| async move {
            Err(ApiError::Status { status: 500, message: "boom".to_owned() })
        },
        {
            let refreshes = Rc::clone(&refreshes);
            move |_refresh: String| {
                refreshes.set(refreshes.get() + 1);
                async move { Ok(pair("fresh", "r1")) }
            }
        },
    ));

    assert_eq!(result, Err(ApiError::Status { status: 500, message: "boom".to_owned() }));
    assert_eq!(rotated, None);
    assert_eq!(refreshes.get(), 0);
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn session_starts_restoring() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Restoring);
    assert!(state.tokens.is_none());
}

#[test]
fn sign_in_then_out_round_trip() {
    let mut state = SessionState::default();
    state.sign_in(pair("t", "r"));
    assert_eq!(state.phase, SessionPhase::SignedIn);
    assert_eq!(state.token().as_deref(), Some("t"));

    state.sign_out();
    assert_eq!(state.phase, SessionPhase::SignedOut);
    assert!(state.tokens.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn adopt_rotation_keeps_tokens_when_none_rotated() {
    let mut state = SessionState::default();
    state.sign_in(pair("t0", "r0"));
    state.adopt_rotation(None);
    assert_eq!(state.tokens, Some(pair("t0", "r0")));

    state.adopt_rotation(Some(pair("t1", "r1")));
    assert_eq!(state.tokens, Some(pair("t1", "r1")));
}
