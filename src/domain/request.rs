use super::vocab::{METHOD_LOCAL, METHOD_SWIFT, METHOD_UNSPECIFIED};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the payment is submitted.
///
/// Parsing is case-sensitive. Values outside the known vocabulary are kept
/// verbatim in `Other` and never match a named case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Local,
    Swift,
    #[default]
    Unspecified,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Local => METHOD_LOCAL,
            PaymentMethod::Swift => METHOD_SWIFT,
            PaymentMethod::Unspecified => METHOD_UNSPECIFIED,
            PaymentMethod::Other(raw) => raw,
        }
    }

    /// True for LOCAL, SWIFT and UNSPECIFIED.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PaymentMethod::Other(_))
    }
}

impl From<String> for PaymentMethod {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            METHOD_LOCAL => PaymentMethod::Local,
            METHOD_SWIFT => PaymentMethod::Swift,
            METHOD_UNSPECIFIED => PaymentMethod::Unspecified,
            _ => PaymentMethod::Other(raw),
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cross-border payment as supplied by the caller.
///
/// No field is validated. `bank_identifier` keeps its display form; rules
/// compare against [`PaymentRequest::normalized_bank_identifier`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub country: String,
    pub currency: String,
    /// Beneficiary bank SWIFT/BIC code. May be empty.
    pub bank_identifier: String,
    pub amount: Decimal,
    /// Submitted on behalf of a third party (POBO).
    pub pay_on_behalf_of: bool,
}

impl PaymentRequest {
    pub fn normalized_bank_identifier(&self) -> String {
        normalize_bank_identifier(&self.bank_identifier)
    }
}

/// Canonical comparison form of a bank identifier: trimmed and upper-cased.
pub fn normalize_bank_identifier(raw: &str) -> String {
    raw.trim().to_uppercase()
}
