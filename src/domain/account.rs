use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, BitOr, Sub, SubAssign};
use std::str::FromStr;

/// Represents a signed monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for financial calculations. Balances may go negative:
/// no floor is enforced here, scheme-specific checks live in the payment service.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// The transfer mechanism a payment request travels over.
///
/// Each scheme carries its own validation predicate: Expedited requires
/// sufficient balance, Automated requires a Live account, Bank-to-Bank has
/// no additional check.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentScheme {
    BankToBankTransfer,
    ExpeditedPayments,
    AutomatedPaymentSystem,
}

impl PaymentScheme {
    fn as_str(&self) -> &'static str {
        match self {
            Self::BankToBankTransfer => "bank-to-bank-transfer",
            Self::ExpeditedPayments => "expedited-payments",
            Self::AutomatedPaymentSystem => "automated-payment-system",
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank-to-bank-transfer" => Ok(Self::BankToBankTransfer),
            "expedited-payments" => Ok(Self::ExpeditedPayments),
            "automated-payment-system" => Ok(Self::AutomatedPaymentSystem),
            other => Err(format!("unknown payment scheme: {other}")),
        }
    }
}

/// Bitmask of payment schemes an account is provisioned for.
///
/// The stored field is a flag set, but note that the payment service compares
/// the request scheme against it with exact equality, not `contains` — an
/// account provisioned for more than one scheme matches no single-scheme
/// request. That quirk is inherited behavior and covered by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemeSet(u8);

impl SchemeSet {
    pub const EMPTY: Self = Self(0);

    fn bit(scheme: PaymentScheme) -> u8 {
        match scheme {
            PaymentScheme::BankToBankTransfer => 1 << 0,
            PaymentScheme::ExpeditedPayments => 1 << 1,
            PaymentScheme::AutomatedPaymentSystem => 1 << 2,
        }
    }

    pub fn contains(&self, scheme: PaymentScheme) -> bool {
        self.0 & Self::bit(scheme) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn schemes(&self) -> impl Iterator<Item = PaymentScheme> + '_ {
        [
            PaymentScheme::BankToBankTransfer,
            PaymentScheme::ExpeditedPayments,
            PaymentScheme::AutomatedPaymentSystem,
        ]
        .into_iter()
        .filter(|s| self.contains(*s))
    }
}

impl From<PaymentScheme> for SchemeSet {
    fn from(scheme: PaymentScheme) -> Self {
        Self(Self::bit(scheme))
    }
}

impl BitOr for SchemeSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<PaymentScheme> for SchemeSet {
    type Output = Self;
    fn bitor(self, rhs: PaymentScheme) -> Self::Output {
        Self(self.0 | Self::bit(rhs))
    }
}

/// Pipe-separated scheme names, e.g. `bank-to-bank-transfer|expedited-payments`.
impl fmt::Display for SchemeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for scheme in self.schemes() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(scheme.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for SchemeSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::EMPTY;
        for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            set = set | part.parse::<PaymentScheme>()?;
        }
        Ok(set)
    }
}

impl Serialize for SchemeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SchemeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Lifecycle state of an account, gating eligibility for certain schemes.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum AccountStatus {
    Live,
    Disabled,
    InboundPaymentsOnly,
}

/// A debtor account as held by the account store.
///
/// Created and loaded externally; the only in-scope mutation is the balance
/// decrement applied by a fully validated payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Unique account number.
    #[serde(rename = "account")]
    pub account_number: String,
    /// Current signed balance.
    pub balance: Balance,
    /// Schemes this account is provisioned for.
    #[serde(rename = "allowed")]
    pub allowed_payment_schemes: SchemeSet,
    /// Lifecycle status.
    pub status: AccountStatus,
}

impl Account {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            balance: Balance::ZERO,
            allowed_payment_schemes: SchemeSet::EMPTY,
            status: AccountStatus::Live,
        }
    }
}
