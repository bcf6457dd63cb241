//! User-facing notices and error modeling for the donation form controller.

use client_core::ClientError;

use super::form::ValidationFailure;

pub const VALIDATION_NOTICE: &str =
    "Please fill in all required fields, including the institution, the amount and the payment type.";
pub const SUCCESS_NOTICE: &str = "Donation registered successfully! Thank you for your contribution.";
pub const BUSY_NOTICE: &str = "A donation is already being submitted; please wait.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Blocking message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl UserNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Network,
    Service,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    LoadInstitutions,
    SubmitDonation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Network { .. } => UiErrorCategory::Network,
            ClientError::Service { .. }
            | ClientError::Decode { .. }
            | ClientError::InvalidBaseUrl { .. } => UiErrorCategory::Service,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_validation(failure: &ValidationFailure) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::SubmitDonation,
            message: failure.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn notice(&self) -> UserNotice {
        let message = match (self.category, self.context) {
            (UiErrorCategory::Validation, UiErrorContext::SubmitDonation) => {
                VALIDATION_NOTICE.to_string()
            }
            (UiErrorCategory::Network, UiErrorContext::SubmitDonation) => format!(
                "Could not register the donation: the donation service is unreachable. ({})",
                self.message
            ),
            (_, UiErrorContext::SubmitDonation) => {
                format!("Could not register the donation. {}", self.message)
            }
            (_, UiErrorContext::LoadInstitutions) => {
                format!("Could not load institutions. {}", self.message)
            }
        };
        UserNotice::error(message)
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
