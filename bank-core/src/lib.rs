//! MiniBank Core
//!
//! In-memory bank account ledger: account creation, credential-gated
//! access, and balance mutation with type-specific overdraft rules.
//!
//! # Architecture
//!
//! - **Tagged variants**: The withdrawal rule is dispatched over
//!   [`AccountKind`], not implementation inheritance
//! - **Arena ownership**: The [`Bank`] owns every [`Account`]; callers
//!   borrow handles and never free anything
//! - **Exact arithmetic**: `Decimal` for all money
//! - **Single writer**: One control thread drives all mutations; no
//!   locking discipline is required
//!
//! # Invariants
//!
//! - A balance changes only through `deposit` and `withdraw`
//! - After any successful mutation, balance >= -(overdraft limit)
//! - Account numbers are unique and strictly increasing in creation order
//!
//! # Example
//!
//! ```
//! use bank_core::Bank;
//! use rust_decimal::Decimal;
//!
//! let mut bank = Bank::new();
//! let number = bank.open_current_account(
//!     "Alice",
//!     "hunter2",
//!     Decimal::new(10000, 2), // $100.00
//!     Decimal::new(5000, 2),  // $50.00 overdraft
//! );
//!
//! let account = bank.authenticate(number, "hunter2")?;
//! account.withdraw(Decimal::new(12000, 2))?; // into overdraft
//! assert_eq!(account.balance(), Decimal::new(-2000, 2));
//! # Ok::<(), bank_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod account;
pub mod bank;
pub mod config;
pub mod error;
pub mod types;

// Re-exports
pub use account::Account;
pub use bank::Bank;
pub use config::Config;
pub use error::{Error, Result};
pub use types::{AccountInfo, AccountKind, AccountNumber};
