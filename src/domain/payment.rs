use super::account::PaymentScheme;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single debit payment instruction.
///
/// Transient, constructed per call. Required fields are modeled as options so
/// that an incomplete request can be represented and rejected by
/// [`MakePaymentRequest::missing_fields`] instead of failing at construction.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MakePaymentRequest {
    #[serde(rename = "creditor")]
    pub creditor_account_number: String,
    #[serde(rename = "debtor")]
    pub debtor_account_number: String,
    pub amount: Option<Decimal>,
    #[serde(rename = "date", default, deserialize_with = "de_opt_datetime")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(rename = "scheme", default, deserialize_with = "de_opt_scheme")]
    pub payment_scheme: Option<PaymentScheme>,
}

/// A required field of [`MakePaymentRequest`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RequestField {
    CreditorAccountNumber,
    DebtorAccountNumber,
    Amount,
    PaymentDate,
    PaymentScheme,
}

impl MakePaymentRequest {
    /// Returns the required-field constraints this request does not satisfy.
    ///
    /// Empty-string account numbers count as missing.
    pub fn missing_fields(&self) -> Vec<RequestField> {
        let mut missing = Vec::new();
        if self.creditor_account_number.is_empty() {
            missing.push(RequestField::CreditorAccountNumber);
        }
        if self.debtor_account_number.is_empty() {
            missing.push(RequestField::DebtorAccountNumber);
        }
        if self.amount.is_none() {
            missing.push(RequestField::Amount);
        }
        if self.payment_date.is_none() {
            missing.push(RequestField::PaymentDate);
        }
        if self.payment_scheme.is_none() {
            missing.push(RequestField::PaymentScheme);
        }
        missing
    }
}

/// Outcome of a payment attempt.
///
/// Every failure collapses to `success == false`; `detail` exists in the shape
/// but is never populated by current behavior.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MakePaymentResult {
    pub success: bool,
    pub detail: Option<String>,
}

impl MakePaymentResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            detail: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            detail: None,
        }
    }
}

// CSV cells are always present as strings; empty means unset.
fn de_opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<DateTime<Utc>>()
        .map(Some)
        .map_err(serde::de::Error::custom)
}

fn de_opt_scheme<'de, D>(deserializer: D) -> Result<Option<PaymentScheme>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<PaymentScheme>()
        .map(Some)
        .map_err(serde::de::Error::custom)
}
