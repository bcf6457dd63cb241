//! Form snapshot collection and client-side validation.

use std::fmt;

use shared::{
    domain::{InstitutionId, PaymentOption},
    protocol::DonationRequest,
};
use thiserror::Error;

/// Raw values currently entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub date: String,
    pub amount: String,
    /// Value of the checked payment option, if any.
    pub payment_option: Option<String>,
}

impl FormInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A donation as collected from the form, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationDraft {
    pub institution_id: String,
    pub donator_name: String,
    pub donator_email: String,
    pub donator_phone: String,
    pub donator_cpf: String,
    /// NaN when the amount text has no numeric prefix.
    pub amount: f64,
    pub date: String,
    pub type_payment: Option<String>,
}

pub fn collect(input: &FormInput, institution_id: Option<&InstitutionId>) -> DonationDraft {
    DonationDraft {
        institution_id: institution_id
            .map(|id| id.as_str().trim().to_string())
            .unwrap_or_default(),
        donator_name: input.name.trim().to_string(),
        donator_email: input.email.trim().to_string(),
        donator_phone: input.phone.trim().to_string(),
        donator_cpf: input.cpf.trim().to_string(),
        amount: parse_amount(&input.amount),
        date: input.date.trim().to_string(),
        type_payment: input.payment_option.clone(),
    }
}

/// Parses a user-typed amount, accepting a decimal comma (`"10,50"` is `10.5`).
///
/// Only the leading numeric part is read, so `"12abc"` is `12`. Text without a
/// numeric prefix yields NaN.
pub fn parse_amount(raw: &str) -> f64 {
    let normalized = raw.trim().replacen(',', ".", 1);
    numeric_prefix(&normalized)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_count = frac_end - (end + 1);
        if digit_count + frac_count > 0 {
            end = frac_end;
            digit_count += frac_count;
        }
    }
    if digit_count == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Date,
    Phone,
    Cpf,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Date => "donation date",
            FormField::Phone => "phone",
            FormField::Cpf => "CPF",
        };
        f.write_str(label)
    }
}

/// First rule a draft broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("{0} is required")]
    MissingField(FormField),
    #[error("no institution selected")]
    MissingInstitution,
    #[error("no payment option selected")]
    MissingPaymentOption,
    #[error("unknown payment option '{0}'")]
    UnknownPaymentOption(String),
    #[error("amount must be a positive number")]
    InvalidAmount,
}

/// Checks a draft and turns it into the request body.
pub fn validate(draft: &DonationDraft) -> Result<DonationRequest, ValidationFailure> {
    let required = [
        (FormField::Name, &draft.donator_name),
        (FormField::Email, &draft.donator_email),
        (FormField::Date, &draft.date),
        (FormField::Phone, &draft.donator_phone),
        (FormField::Cpf, &draft.donator_cpf),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationFailure::MissingField(*field));
    }
    if draft.institution_id.trim().is_empty() {
        return Err(ValidationFailure::MissingInstitution);
    }
    let type_payment = match draft.type_payment.as_deref().map(str::trim) {
        None | Some("") => return Err(ValidationFailure::MissingPaymentOption),
        Some(raw) => raw
            .parse::<PaymentOption>()
            .map_err(|err| ValidationFailure::UnknownPaymentOption(err.0))?,
    };
    if !draft.amount.is_finite() || draft.amount <= 0.0 {
        return Err(ValidationFailure::InvalidAmount);
    }

    Ok(DonationRequest {
        institution_id: InstitutionId(draft.institution_id.clone()),
        donator_name: draft.donator_name.clone(),
        donator_email: draft.donator_email.clone(),
        donator_phone: draft.donator_phone.clone(),
        donator_cpf: draft.donator_cpf.clone(),
        amount: draft.amount,
        date: draft.date.clone(),
        type_payment,
    })
}

pub fn is_valid(draft: &DonationDraft) -> bool {
    validate(draft).is_ok()
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
