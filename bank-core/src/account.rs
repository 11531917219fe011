//! Account entity and the balance-mutation contract
//!
//! An [`Account`] holds identity, credential, and balance behind
//! module-private fields. The balance changes only through [`deposit`]
//! and [`withdraw`]; no other code path writes it. The withdrawal rule is
//! dispatched over [`AccountKind`]: the base rule bounds withdrawals by
//! the balance, the current-account rule extends the envelope by the
//! overdraft limit.
//!
//! [`deposit`]: Account::deposit
//! [`withdraw`]: Account::withdraw

use crate::error::{Error, Result};
use crate::types::{AccountInfo, AccountKind, AccountNumber};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A single bank account
///
/// Accounts are constructed only by [`Bank`](crate::Bank), which owns
/// them for the process lifetime; callers operate through borrowed
/// handles.
#[derive(Debug, Clone)]
pub struct Account {
    /// Identity, never changes
    number: AccountNumber,

    /// Holder name (arbitrary text, empty allowed)
    holder_name: String,

    /// Login credential, compared by exact equality
    credential: String,

    /// Balance; negative only within the overdraft envelope
    balance: Decimal,

    /// Withdrawal rule variant, immutable after creation
    kind: AccountKind,

    /// Opening timestamp
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Create new account (registry-only)
    pub(crate) fn new(
        number: AccountNumber,
        holder_name: impl Into<String>,
        credential: impl Into<String>,
        initial_balance: Decimal,
        kind: AccountKind,
    ) -> Self {
        Self {
            number,
            holder_name: holder_name.into(),
            credential: credential.into(),
            balance: initial_balance,
            kind,
            opened_at: Utc::now(),
        }
    }

    /// Account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Holder name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Account variant
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Overdraft allowance (zero for the base variant)
    pub fn overdraft_limit(&self) -> Decimal {
        self.kind.overdraft_limit()
    }

    /// Amount available for withdrawal: balance plus overdraft allowance
    pub fn available(&self) -> Decimal {
        self.balance + self.kind.overdraft_limit()
    }

    /// When the account was opened
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Deposit money
    ///
    /// The amount must be positive; there is no upper bound.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }

        self.balance += amount;
        tracing::debug!("Deposited {} into account {}", amount, self.number);

        Ok(())
    }

    /// Withdraw money
    ///
    /// The amount must be positive and covered by the variant's
    /// envelope: the balance alone for [`AccountKind::Standard`], the
    /// balance plus overdraft limit for [`AccountKind::Current`]. The
    /// envelope check is the sole gate; a withdrawal it authorizes is
    /// applied unconditionally, including into overdraft territory.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }

        let available = self.available();
        if amount > available {
            return Err(match self.kind {
                AccountKind::Standard => Error::InsufficientFunds {
                    account: self.number,
                    requested: amount,
                    available,
                },
                AccountKind::Current { .. } => Error::OverdraftExceeded {
                    account: self.number,
                    requested: amount,
                    available,
                },
            });
        }

        self.balance -= amount;
        tracing::debug!("Withdrew {} from account {}", amount, self.number);

        Ok(())
    }

    /// Check candidate credential against the stored one
    ///
    /// Pure equality comparison, no side effects.
    pub fn check_credential(&self, candidate: &str) -> bool {
        candidate == self.credential
    }

    /// Change credential after verifying the current one
    pub fn change_credential(&mut self, current: &str, new: impl Into<String>) -> Result<()> {
        if !self.check_credential(current) {
            return Err(Error::WrongCredential(self.number));
        }

        self.credential = new.into();
        tracing::debug!("Credential changed for account {}", self.number);

        Ok(())
    }

    /// Overwrite holder name
    ///
    /// No validation; arbitrary text including empty is accepted.
    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        self.holder_name = name.into();
    }

    /// Structured presentation payload for this account
    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            account_number: self.number,
            holder_name: self.holder_name.clone(),
            balance: self.balance,
            overdraft_limit: match self.kind {
                AccountKind::Standard => None,
                AccountKind::Current { overdraft_limit } => Some(overdraft_limit),
            },
            opened_at: self.opened_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_account(balance: Decimal) -> Account {
        Account::new(
            AccountNumber::new(1001),
            "Holder",
            "secret",
            balance,
            AccountKind::Standard,
        )
    }

    fn current_account(balance: Decimal, limit: Decimal) -> Account {
        Account::new(
            AccountNumber::new(1001),
            "Holder",
            "secret",
            balance,
            AccountKind::Current {
                overdraft_limit: limit,
            },
        )
    }

    #[test]
    fn test_deposit_positive() {
        let mut account = standard_account(Decimal::new(10000, 2));
        account.deposit(Decimal::new(5000, 2)).unwrap();
        assert_eq!(account.balance(), Decimal::new(15000, 2));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = standard_account(Decimal::new(10000, 2));

        let zero = account.deposit(Decimal::ZERO);
        assert!(matches!(zero, Err(Error::InvalidAmount(_))));

        let negative = account.deposit(Decimal::new(-100, 2));
        assert!(matches!(negative, Err(Error::InvalidAmount(_))));

        assert_eq!(account.balance(), Decimal::new(10000, 2));
    }

    #[test]
    fn test_standard_withdraw_within_balance() {
        let mut account = standard_account(Decimal::new(10000, 2));
        account.withdraw(Decimal::new(10000, 2)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_standard_withdraw_insufficient_funds() {
        let mut account = standard_account(Decimal::new(10000, 2));

        let result = account.withdraw(Decimal::new(10001, 2));
        assert!(matches!(result, Err(Error::InsufficientFunds { .. })));
        assert_eq!(account.balance(), Decimal::new(10000, 2));
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = current_account(Decimal::new(10000, 2), Decimal::new(5000, 2));

        let zero = account.withdraw(Decimal::ZERO);
        assert!(matches!(zero, Err(Error::InvalidAmount(_))));

        let negative = account.withdraw(Decimal::new(-100, 2));
        assert!(matches!(negative, Err(Error::InvalidAmount(_))));

        assert_eq!(account.balance(), Decimal::new(10000, 2));
    }

    #[test]
    fn test_current_withdraw_into_overdraft() {
        // Balance 100, limit 50: withdrawing 120 must succeed even though
        // 120 exceeds the balance alone.
        let mut account = current_account(Decimal::new(10000, 2), Decimal::new(5000, 2));

        account.withdraw(Decimal::new(12000, 2)).unwrap();
        assert_eq!(account.balance(), Decimal::new(-2000, 2));
    }

    #[test]
    fn test_current_withdraw_beyond_envelope() {
        let mut account = current_account(Decimal::new(-2000, 2), Decimal::new(5000, 2));

        // Available is -20 + 50 = 30; requesting 40 exceeds it.
        let result = account.withdraw(Decimal::new(4000, 2));
        assert!(matches!(result, Err(Error::OverdraftExceeded { .. })));
        assert_eq!(account.balance(), Decimal::new(-2000, 2));
    }

    #[test]
    fn test_deposit_into_overdrawn_account() {
        let mut account = current_account(Decimal::new(-2000, 2), Decimal::new(5000, 2));

        account.deposit(Decimal::new(5000, 2)).unwrap();
        assert_eq!(account.balance(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_available_includes_overdraft() {
        let account = current_account(Decimal::new(10000, 2), Decimal::new(5000, 2));
        assert_eq!(account.available(), Decimal::new(15000, 2));

        let standard = standard_account(Decimal::new(10000, 2));
        assert_eq!(standard.available(), Decimal::new(10000, 2));
    }

    #[test]
    fn test_check_credential() {
        let account = standard_account(Decimal::ZERO);
        assert!(account.check_credential("secret"));
        assert!(!account.check_credential("Secret"));
        assert!(!account.check_credential(""));
    }

    #[test]
    fn test_change_credential_requires_current() {
        let mut account = standard_account(Decimal::ZERO);

        let result = account.change_credential("wrong", "next");
        assert!(matches!(result, Err(Error::WrongCredential(_))));
        assert!(account.check_credential("secret"));

        account.change_credential("secret", "next").unwrap();
        assert!(!account.check_credential("secret"));
        assert!(account.check_credential("next"));
    }

    #[test]
    fn test_set_holder_name_unconditional() {
        let mut account = standard_account(Decimal::ZERO);

        account.set_holder_name("New Name");
        assert_eq!(account.holder_name(), "New Name");

        // Empty is accepted; the entity enforces nothing here.
        account.set_holder_name("");
        assert_eq!(account.holder_name(), "");
    }

    #[test]
    fn test_info_payload() {
        let account = current_account(Decimal::new(10000, 2), Decimal::new(5000, 2));
        let info = account.info();

        assert_eq!(info.account_number, account.number());
        assert_eq!(info.holder_name, "Holder");
        assert_eq!(info.balance, Decimal::new(10000, 2));
        assert_eq!(info.overdraft_limit, Some(Decimal::new(5000, 2)));
        assert_eq!(info.opened_at, account.opened_at());

        let standard = standard_account(Decimal::ZERO);
        assert_eq!(standard.kind(), AccountKind::Standard);
        assert_eq!(standard.info().overdraft_limit, None);
    }
}
