//! Bank registry: account allocation, lookup, and authentication
//!
//! The bank exclusively owns all accounts in an in-memory collection and
//! assigns account numbers from a monotonic counter. Callers receive
//! borrowed handles and never take ownership; no removal operation
//! exists, so numbers are never reused.

use crate::account::Account;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{AccountKind, AccountNumber};
use rust_decimal::Decimal;

/// In-memory account registry
#[derive(Debug)]
pub struct Bank {
    /// All accounts, in creation order
    accounts: Vec<Account>,

    /// Next account number to assign, incremented exactly once per
    /// successful creation
    next_number: u32,
}

impl Bank {
    /// Create empty bank with the default allocation base
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create empty bank from configuration
    pub fn with_config(config: &Config) -> Self {
        Self {
            accounts: Vec::new(),
            next_number: config.account_number_base,
        }
    }

    /// Open a current account
    ///
    /// Allocates the next account number, stores the account, and returns
    /// the assigned number. Always succeeds; the sign of
    /// `initial_balance` and `overdraft_limit` is accepted as given.
    pub fn open_current_account(
        &mut self,
        holder_name: impl Into<String>,
        credential: impl Into<String>,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> AccountNumber {
        let number = self.allocate_number();
        let account = Account::new(
            number,
            holder_name,
            credential,
            initial_balance,
            AccountKind::Current { overdraft_limit },
        );
        self.accounts.push(account);
        tracing::info!("Opened current account {}", number);

        number
    }

    fn allocate_number(&mut self) -> AccountNumber {
        let number = AccountNumber::new(self.next_number);
        self.next_number += 1;
        number
    }

    /// Find account by number
    ///
    /// Linear scan over the collection in creation order.
    pub fn find_account(&self, number: AccountNumber) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number() == number)
            .ok_or(Error::AccountNotFound(number))
    }

    /// Find account by number, returning a mutable handle
    pub fn find_account_mut(&mut self, number: AccountNumber) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(Error::AccountNotFound(number))
    }

    /// Authenticate against an account
    ///
    /// Composes lookup and credential check; an unknown number and a
    /// wrong credential are distinguished for caller-visible messaging.
    /// Returns the mutable account handle on success.
    pub fn authenticate(&mut self, number: AccountNumber, credential: &str) -> Result<&mut Account> {
        let account = self.find_account_mut(number)?;
        if !account.check_credential(credential) {
            tracing::warn!("Rejected login on account {}", number);
            return Err(Error::WrongCredential(number));
        }

        Ok(account)
    }

    /// Iterate accounts in creation order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the bank holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
