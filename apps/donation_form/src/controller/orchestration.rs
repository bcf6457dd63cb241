//! Submission state machine driving collect -> validate -> submit -> report.

use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use client_core::DonationApi;
use shared::domain::InstitutionId;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::{
    events::{UiError, UiErrorContext, UserNotice, BUSY_NOTICE, SUCCESS_NOTICE},
    form::{collect, validate, FormInput, ValidationFailure},
    institutions::{load_panel, InstitutionPanel, SelectionError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Collecting,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The frontend must clear every form field.
    Submitted {
        notice: UserNotice,
        created: serde_json::Value,
    },
    Rejected {
        notice: UserNotice,
        failure: ValidationFailure,
    },
    Failed {
        notice: UserNotice,
        error: UiError,
    },
    Busy {
        notice: UserNotice,
    },
}

impl SubmitOutcome {
    pub fn notice(&self) -> &UserNotice {
        match self {
            SubmitOutcome::Submitted { notice, .. }
            | SubmitOutcome::Rejected { notice, .. }
            | SubmitOutcome::Failed { notice, .. }
            | SubmitOutcome::Busy { notice } => notice,
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

#[derive(Default)]
struct ControllerState {
    panel: InstitutionPanel,
}

/// Holds the submission slot; dropping it (completion, cancellation or panic)
/// returns the controller to [`SubmissionState::Idle`].
struct SubmissionGuard<'a> {
    state: &'a StdMutex<SubmissionState>,
}

impl<'a> SubmissionGuard<'a> {
    fn begin(state: &'a StdMutex<SubmissionState>) -> Result<Self, SubmissionState> {
        let mut current = state.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != SubmissionState::Idle {
            return Err(*current);
        }
        let from = *current;
        debug!(?from, to = ?SubmissionState::Collecting, "submission state");
        *current = SubmissionState::Collecting;
        Ok(Self { state })
    }

    fn transition(&self, next: SubmissionState) {
        let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let from = *current;
        debug!(?from, to = ?next, "submission state");
        *current = next;
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.transition(SubmissionState::Idle);
    }
}

pub struct FormController {
    api: Arc<dyn DonationApi>,
    inner: Mutex<ControllerState>,
    submission: StdMutex<SubmissionState>,
}

impl FormController {
    pub fn new(api: Arc<dyn DonationApi>) -> Arc<Self> {
        Arc::new(Self {
            api,
            inner: Mutex::new(ControllerState::default()),
            submission: StdMutex::new(SubmissionState::Idle),
        })
    }

    /// Page-ready handler. Never fails; see [`load_panel`].
    pub async fn load_institutions(&self) -> InstitutionPanel {
        self.inner.lock().await.panel = InstitutionPanel::Loading;
        let panel = load_panel(self.api.as_ref()).await;
        self.inner.lock().await.panel = panel.clone();
        panel
    }

    pub async fn panel(&self) -> InstitutionPanel {
        self.inner.lock().await.panel.clone()
    }

    pub async fn select_institution(&self, index: usize) -> Result<InstitutionId, SelectionError> {
        let mut inner = self.inner.lock().await;
        let id = inner.panel.select_index(index)?.clone();
        info!(institution_id = %id, "institution selected");
        Ok(id)
    }

    pub async fn selected_institution(&self) -> Option<InstitutionId> {
        self.inner.lock().await.panel.selected_id().cloned()
    }

    pub fn submission_state(&self) -> SubmissionState {
        *self
            .submission
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Submit handler. Every path ends back in [`SubmissionState::Idle`],
    /// including a dropped future.
    pub async fn submit(&self, input: &FormInput) -> SubmitOutcome {
        let guard = match SubmissionGuard::begin(&self.submission) {
            Ok(guard) => guard,
            Err(state) => {
                warn!(?state, "submit ignored while another is in flight");
                return SubmitOutcome::Busy {
                    notice: UserNotice::info(BUSY_NOTICE),
                };
            }
        };

        let draft = {
            let inner = self.inner.lock().await;
            collect(input, inner.panel.selected_id())
        };
        guard.transition(SubmissionState::Validating);
        let request = match validate(&draft) {
            Ok(request) => request,
            Err(failure) => {
                debug!(%failure, "donation form rejected");
                return SubmitOutcome::Rejected {
                    notice: UiError::from_validation(&failure).notice(),
                    failure,
                };
            }
        };

        guard.transition(SubmissionState::Submitting);
        let result = self.api.create_donation(&request).await;

        match result {
            Ok(created) => {
                guard.transition(SubmissionState::Success);
                info!(institution_id = %request.institution_id, "donation registered");
                let mut inner = self.inner.lock().await;
                // A card picked while the request was in flight stays selected.
                if inner.panel.selected_id() == Some(&request.institution_id) {
                    inner.panel.clear_selection();
                }
                SubmitOutcome::Submitted {
                    notice: UserNotice::success(SUCCESS_NOTICE),
                    created,
                }
            }
            Err(err) => {
                guard.transition(SubmissionState::Failed);
                let error = UiError::from_client_error(UiErrorContext::SubmitDonation, &err);
                error!(
                    context = ?error.context(),
                    category = ?error.category(),
                    error = %err,
                    "failed to send donation"
                );
                SubmitOutcome::Failed {
                    notice: error.notice(),
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
