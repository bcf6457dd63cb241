use serde::{Deserialize, Serialize};

use crate::domain::{InstitutionId, PaymentOption};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: InstitutionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_image: Option<String>,
}

/// Body of `POST /donations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub institution_id: InstitutionId,
    pub donator_name: String,
    pub donator_email: String,
    pub donator_phone: String,
    pub donator_cpf: String,
    pub amount: f64,
    pub date: String,
    pub type_payment: PaymentOption,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
