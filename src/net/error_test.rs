use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_maps_to_kinds() {
    assert_eq!(ApiError::from_status(400, "").kind, ErrorKind::BadRequest);
    assert_eq!(ApiError::from_status(401, "").kind, ErrorKind::Unauthorized);
    assert_eq!(ApiError::from_status(403, "").kind, ErrorKind::Forbidden);
    assert_eq!(ApiError::from_status(404, "").kind, ErrorKind::NotFound);
    assert_eq!(ApiError::from_status(500, "").kind, ErrorKind::ServerError);
    assert_eq!(ApiError::from_status(503, "").kind, ErrorKind::ServerError);
}

#[test]
fn unlisted_4xx_is_bad_request() {
    assert_eq!(ApiError::from_status(409, "").kind, ErrorKind::BadRequest);
    assert_eq!(ApiError::from_status(422, "").kind, ErrorKind::BadRequest);
}

// =============================================================
// Detail extraction
// =============================================================

#[test]
fn string_detail_is_used_verbatim() {
    let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err.detail, "Email already registered");
}

#[test]
fn validation_list_detail_is_flattened() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"invalid email"},{"msg":"too short"}]}"#;
    let err = ApiError::from_status(422, body);
    assert_eq!(err.detail, "invalid email; too short");
    assert!(err.is_validation());
}

#[test]
fn missing_detail_falls_back_per_kind() {
    let unauthorized = ApiError::from_status(401, "not json at all");
    assert_eq!(unauthorized.detail, "Your session has expired. Please log in again.");

    let server = ApiError::from_status(500, "{}");
    assert_eq!(server.detail, "Something went wrong on the server. Please try again.");
}

#[test]
fn empty_string_detail_falls_back() {
    let err = ApiError::from_status(404, r#"{"detail":""}"#);
    assert_eq!(err.detail, "Not found.");
}

// =============================================================
// Network errors
// =============================================================

#[test]
fn network_error_keeps_transport_message() {
    let err = ApiError::network("dns failure");
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.detail, "dns failure");
}

#[test]
fn network_error_with_empty_message_falls_back() {
    let err = ApiError::network("");
    assert_eq!(err.detail, "Could not reach the server. Please try again.");
}

#[test]
fn display_shows_detail_only() {
    let err = ApiError::from_status(403, "");
    assert_eq!(err.to_string(), "You do not have access to this resource.");
}
