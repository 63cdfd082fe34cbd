//! Lesson 3: Encapsulation
//!
//! The balance is private; the only way in is a guarded deposit.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("deposit amount must be positive, got {amount}")]
    NonPositiveDeposit { amount: f64 },
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BankAccount {
    balance: f64,
}

impl BankAccount {
    pub fn new() -> Self {
        Self { balance: 0.0 }
    }

    /// Returns the new balance. NaN is rejected along with zero and negatives.
    pub fn try_deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(AccountError::NonPositiveDeposit { amount });
        }
        self.balance += amount;
        Ok(self.balance)
    }

    pub fn deposit(&mut self, amount: f64) {
        if let Err(err) = self.try_deposit(amount) {
            tracing::warn!(%err, "ignoring deposit");
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut account = BankAccount::new();
    account.deposit(150.75);
    writeln!(out, "Current balance: ${}", account.balance())
}
