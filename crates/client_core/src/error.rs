use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListInstitutions,
    CreateDonation,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiOperation::ListInstitutions => f.write_str("fetching institutions"),
            ApiOperation::CreateDonation => f.write_str("creating donation"),
        }
    }
}

/// Server-provided explanation attached to a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    Provided(String),
    /// JSON body without a usable `message`.
    Absent,
    /// Body was empty or not JSON.
    Unreadable,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDetail::Provided(message) => Some(message),
            ErrorDetail::Absent | ErrorDetail::Unreadable => None,
        }
    }

    fn suffix(&self) -> String {
        self.message()
            .map(|message| format!(" Server details: {message}"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network failure while {operation} ({url}): {source}")]
    Network {
        operation: ApiOperation,
        url: String,
        source: reqwest::Error,
    },
    #[error("HTTP error {status} while {operation}.{}", .detail.suffix())]
    Service {
        operation: ApiOperation,
        status: u16,
        detail: ErrorDetail,
    },
    #[error("invalid response body while {operation}: {source}")]
    Decode {
        operation: ApiOperation,
        source: reqwest::Error,
    },
    #[error("invalid API base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network { .. })
    }
}
