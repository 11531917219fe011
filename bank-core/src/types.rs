//! Core types for the bank
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Memory safety (no unsafe code)
//! - Structured presentation (rendering is the caller's job)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account number assigned by the bank
///
/// Numbers are unique, immutable after creation, and strictly increasing
/// in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Create new account number
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get as raw integer
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account variant determining the withdrawal rule
///
/// The variant carries the polymorphic part of the mutation contract;
/// everything else about an account is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Base rule: withdrawals are limited by the balance alone
    Standard,

    /// Current account: withdrawals may take the balance negative, down
    /// to the overdraft limit
    Current {
        /// Amount by which the balance may go negative; set at creation,
        /// immutable thereafter
        overdraft_limit: Decimal,
    },
}

impl AccountKind {
    /// Overdraft allowance for this variant (zero for `Standard`)
    pub fn overdraft_limit(&self) -> Decimal {
        match self {
            AccountKind::Standard => Decimal::ZERO,
            AccountKind::Current { overdraft_limit } => *overdraft_limit,
        }
    }
}

/// Structured account presentation payload
///
/// Returned by [`Account::info`](crate::Account::info). Textual rendering
/// is the caller's concern; the `Display` impl provides the conventional
/// two-decimal currency formatting for callers that want it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account number
    pub account_number: AccountNumber,

    /// Holder name
    pub holder_name: String,

    /// Current balance
    pub balance: Decimal,

    /// Overdraft limit (`None` for the base variant)
    pub overdraft_limit: Option<Decimal>,

    /// When the account was opened
    pub opened_at: DateTime<Utc>,
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account #{}", self.account_number)?;
        writeln!(f, "Holder Name    : {}", self.holder_name)?;
        write!(f, "Balance        : ${:.2}", self.balance)?;
        if let Some(limit) = self.overdraft_limit {
            write!(f, "\nOverdraft Limit: ${:.2}", limit)?;
        }
        Ok(())
    }
}
