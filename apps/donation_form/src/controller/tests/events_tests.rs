use super::*;
use client_core::{ApiOperation, ErrorDetail};

#[test]
fn invalid_base_url_is_not_reported_as_a_form_problem() {
    let err = ClientError::InvalidBaseUrl {
        url: "nope".into(),
        reason: "relative URL without a base".into(),
    };

    let ui_error = UiError::from_client_error(UiErrorContext::SubmitDonation, &err);

    assert_eq!(ui_error.category(), UiErrorCategory::Service);
    assert_eq!(ui_error.context(), UiErrorContext::SubmitDonation);
    let notice = ui_error.notice();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_ne!(notice.message, VALIDATION_NOTICE);
    assert!(notice.message.contains("invalid API base url"), "{}", notice.message);
}

#[test]
fn service_errors_keep_context_in_notice() {
    let err = ClientError::Service {
        operation: ApiOperation::ListInstitutions,
        status: 500,
        detail: ErrorDetail::Absent,
    };

    let ui_error = UiError::from_client_error(UiErrorContext::LoadInstitutions, &err);

    assert_eq!(ui_error.category(), UiErrorCategory::Service);
    assert_eq!(ui_error.context(), UiErrorContext::LoadInstitutions);
    assert_eq!(
        ui_error.notice().message,
        "Could not load institutions. HTTP error 500 while fetching institutions."
    );
}

#[test]
fn validation_failures_use_the_generic_notice() {
    let ui_error = UiError::from_validation(&ValidationFailure::InvalidAmount);

    assert_eq!(ui_error.category(), UiErrorCategory::Validation);
    assert_eq!(ui_error.message(), "amount must be a positive number");
    assert_eq!(ui_error.notice(), UserNotice::error(VALIDATION_NOTICE));
}
