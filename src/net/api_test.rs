use super::*;

#[test]
fn method_names_match_http() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
}

#[test]
fn error_message_prefers_message_then_error_then_text() {
    assert_eq!(error_message(400, r#"{"message":"m1","error":"m2"}"#), "m1");
    assert_eq!(error_message(400, r#"{"error":"m2"}"#), "m2");
    assert_eq!(error_message(502, "bad gateway"), "bad gateway");
    assert_eq!(error_message(502, "  "), "request failed with status 502");
}

#[test]
fn unauthorized_is_only_status_401() {
    let e = ApiError::Status { status: 401, message: "expired".to_owned() };
    assert!(e.is_unauthorized());
    let e = ApiError::Status { status: 403, message: "forbidden".to_owned() };
    assert!(!e.is_unauthorized());
    assert!(!ApiError::SessionExpired.is_unauthorized());
}
