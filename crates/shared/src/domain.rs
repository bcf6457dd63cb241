use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(InstitutionId);

/// Payment methods offered by the donation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOption {
    Pix,
    CreditCard,
    DebitCard,
    BankSlip,
}

impl PaymentOption {
    pub const ALL: [PaymentOption; 4] = [
        PaymentOption::Pix,
        PaymentOption::CreditCard,
        PaymentOption::DebitCard,
        PaymentOption::BankSlip,
    ];

    /// Value sent as `typePayment`.
    pub fn value(self) -> &'static str {
        match self {
            PaymentOption::Pix => "PIX",
            PaymentOption::CreditCard => "CREDIT_CARD",
            PaymentOption::DebitCard => "DEBIT_CARD",
            PaymentOption::BankSlip => "BANK_SLIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentOption::Pix => "Pix",
            PaymentOption::CreditCard => "Credit card",
            PaymentOption::DebitCard => "Debit card",
            PaymentOption::BankSlip => "Bank slip",
        }
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment option '{0}'")]
pub struct UnknownPaymentOption(pub String);

impl FromStr for PaymentOption {
    type Err = UnknownPaymentOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentOption::ALL
            .into_iter()
            .find(|option| option.value() == s)
            .ok_or_else(|| UnknownPaymentOption(s.to_string()))
    }
}
