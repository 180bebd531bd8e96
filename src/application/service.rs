use crate::domain::account::{Account, AccountStatus, Balance, PaymentScheme, SchemeSet};
use crate::domain::payment::{MakePaymentRequest, MakePaymentResult};
use crate::domain::ports::AccountStoreBox;
use crate::error::Result;
use rust_decimal::Decimal;
use tracing::debug;

/// Validates and executes single-account debit payments.
///
/// This is where all domain rules and control flow live. Each call is
/// independent: fetch the debtor account, run the validation chain, and on
/// success apply exactly one balance decrement through the store. Every
/// invalid-input condition collapses to a failed [`MakePaymentResult`]; the
/// outer `Result` carries storage errors only.
pub struct PaymentService {
    account_store: AccountStoreBox,
}

impl PaymentService {
    pub fn new(account_store: AccountStoreBox) -> Self {
        Self { account_store }
    }

    /// Attempts a single debit payment.
    ///
    /// The store's `update` is called exactly once on success and never
    /// otherwise. `get` is called exactly once unless the request is absent.
    /// Calls are not idempotent: submitting the same request twice debits the
    /// account twice.
    pub async fn make_payment(
        &self,
        request: Option<MakePaymentRequest>,
    ) -> Result<MakePaymentResult> {
        let Some(request) = request else {
            debug!("payment rejected: absent request");
            return Ok(MakePaymentResult::failed());
        };

        // Account presence is the first predicate of the chain, checked
        // before the request's own structure.
        let Some(mut account) = self
            .account_store
            .get(&request.debtor_account_number)
            .await?
        else {
            debug!(
                debtor = %request.debtor_account_number,
                "payment rejected: account not found"
            );
            return Ok(MakePaymentResult::failed());
        };

        let Some(amount) = Self::validate(&request, &account) else {
            return Ok(MakePaymentResult::failed());
        };

        account.balance -= Balance::new(amount);
        self.account_store.update(account).await?;

        Ok(MakePaymentResult::succeeded())
    }

    /// Runs the validation chain in order, short-circuiting on the first
    /// failed predicate. Returns the amount to debit when every predicate
    /// holds, `None` otherwise.
    fn validate(request: &MakePaymentRequest, account: &Account) -> Option<Decimal> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "payment rejected: incomplete request");
            return None;
        }

        // Present per missing_fields above.
        let amount = request.amount?;
        let scheme = request.payment_scheme?;

        // Exact equality against the stored flag set, not a containment test.
        // Inherited behavior: an account provisioned for multiple schemes
        // matches no request.
        if account.allowed_payment_schemes != SchemeSet::from(scheme) {
            debug!(
                requested = %scheme,
                allowed = %account.allowed_payment_schemes,
                "payment rejected: scheme not allowed"
            );
            return None;
        }

        if scheme == PaymentScheme::ExpeditedPayments && account.balance < Balance::new(amount) {
            debug!("payment rejected: insufficient balance for expedited payment");
            return None;
        }

        if scheme == PaymentScheme::AutomatedPaymentSystem && account.status != AccountStatus::Live
        {
            debug!(status = ?account.status, "payment rejected: account not live");
            return None;
        }

        Some(amount)
    }
}
