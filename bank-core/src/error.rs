//! Error types for the bank core

use crate::types::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for bank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Bank errors
///
/// All variants are recoverable at the call site; none are fatal to the
/// process. The core returns errors and never prints them.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-positive amount supplied to deposit/withdraw
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(Decimal),

    /// Withdrawal exceeds the balance of a standard account
    #[error("Insufficient funds in account {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Account the withdrawal was attempted on
        account: AccountNumber,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Amount actually available
        available: Decimal,
    },

    /// Withdrawal exceeds the balance plus overdraft allowance of a current account
    #[error("Overdraft limit exceeded in account {account}: requested {requested}, available {available}")]
    OverdraftExceeded {
        /// Account the withdrawal was attempted on
        account: AccountNumber,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Amount actually available (balance plus overdraft allowance)
        available: Decimal,
    },

    /// Account number has no matching registry entry
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// Credential comparison failed
    #[error("Wrong credential for account {0}")]
    WrongCredential(AccountNumber),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
