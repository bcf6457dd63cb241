use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    error::ApiErrorBody,
    protocol::{DonationRequest, Institution},
};
use tracing::{debug, info, warn};

pub mod config;
pub mod error;

pub use config::ClientConfig;
pub use error::{ApiOperation, ClientError, ErrorDetail};

/// Remote operations the donation form depends on.
#[async_trait]
pub trait DonationApi: Send + Sync {
    async fn list_institutions(&self) -> Result<Vec<Institution>, ClientError>;
    /// Returns the created donation as opaque JSON.
    async fn create_donation(
        &self,
        request: &DonationRequest,
    ) -> Result<serde_json::Value, ClientError>;
}

pub struct DonationClient {
    http: Client,
    config: ClientConfig,
}

impl Default for DonationClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl DonationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::new(ClientConfig::from_base_url(base_url)?))
    }
}

#[async_trait]
impl DonationApi for DonationClient {
    async fn list_institutions(&self) -> Result<Vec<Institution>, ClientError> {
        let operation = ApiOperation::ListInstitutions;
        let url = self.config.institutions_url();
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Network {
                operation,
                url: url.clone(),
                source,
            })?;
        if !res.status().is_success() {
            return Err(service_error(operation, res).await);
        }

        let institutions: Vec<Institution> = res
            .json()
            .await
            .map_err(|source| ClientError::Decode { operation, source })?;
        info!(count = institutions.len(), "fetched institutions");
        Ok(institutions)
    }

    async fn create_donation(
        &self,
        request: &DonationRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let operation = ApiOperation::CreateDonation;
        let url = self.config.donations_url();
        debug!(
            institution_id = %request.institution_id,
            amount = request.amount,
            type_payment = %request.type_payment,
            "posting donation"
        );
        // `.json` sets `Content-Type: application/json`.
        let res = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Network {
                operation,
                url: url.clone(),
                source,
            })?;
        if !res.status().is_success() {
            return Err(service_error(operation, res).await);
        }

        let status = res.status().as_u16();
        let body = res
            .json()
            .await
            .map_err(|source| ClientError::Decode { operation, source })?;
        info!(status, "donation created");
        Ok(body)
    }
}

async fn service_error(operation: ApiOperation, res: Response) -> ClientError {
    let status = res.status().as_u16();
    let detail = match res.text().await {
        Ok(raw) => match serde_json::from_str::<ApiErrorBody>(&raw) {
            Ok(body) => body
                .detail()
                .map(ErrorDetail::Provided)
                .unwrap_or(ErrorDetail::Absent),
            Err(err) => {
                debug!(status, error = %err, "error body is not JSON");
                ErrorDetail::Unreadable
            }
        },
        Err(err) => {
            warn!(status, error = %err, "failed to read error body");
            ErrorDetail::Unreadable
        }
    };
    ClientError::Service {
        operation,
        status,
        detail,
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
