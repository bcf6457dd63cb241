use super::*;

#[test]
fn joins_list_messages_in_order() {
    let body: ApiErrorBody = serde_json::from_str(
        r#"{"message":["amount must be positive","cpf is required"],"statusCode":400}"#,
    )
    .expect("decode");
    assert_eq!(
        body.detail().as_deref(),
        Some("amount must be positive, cpf is required")
    );
}

#[test]
fn keeps_single_message_verbatim() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"message":"Institution not found"}"#).expect("decode");
    assert_eq!(body.detail().as_deref(), Some("Institution not found"));
}

#[test]
fn missing_or_empty_message_has_no_detail() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Bad Request"}"#).expect("decode");
    assert_eq!(body.detail(), None);

    let body: ApiErrorBody = serde_json::from_str(r#"{"message":[]}"#).expect("decode");
    assert_eq!(body.detail(), None);
}

#[test]
fn non_string_message_is_rendered_as_json() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"message":{"field":"amount"}}"#).expect("decode");
    assert_eq!(body.detail().as_deref(), Some(r#"{"field":"amount"}"#));
}
