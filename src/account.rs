use crate::{Operation, OperationType};
use serde::Serialize;

/// A single owner's account. The balance only moves through `deposit` and `withdraw`.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    owner: String,
    #[serde(serialize_with = "round_to_four_decimals")]
    balance: f64,
}

/// Result of applying one scripted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Deposited,
    Withdrawn,
    Insufficient,
}

/// Rounds f64 to 4 decimal places for serialization
fn round_to_four_decimals<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rounded = (value * 10000.0).round() / 10000.0;
    serializer.serialize_f64(rounded)
}

impl Account {
    /// Stores owner and initial balance as given. A negative initial balance is accepted.
    pub fn new(owner: impl Into<String>, initial_balance: f64) -> Self {
        Self {
            owner: owner.into(),
            balance: initial_balance,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// First word of the owner label, "John" for "John Doe"
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or("")
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds `amount` unconditionally. Negative amounts are not rejected and
    /// lower the balance.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Subtracts `amount` when the balance covers it (inclusive) and returns
    /// true. Otherwise the balance is left as is and false is returned.
    pub fn withdraw(&mut self, amount: f64) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, operation: &Operation) -> Outcome {
        match operation.op_type {
            OperationType::Deposit => {
                self.deposit(operation.amount);
                Outcome::Deposited
            }
            OperationType::Withdrawal => {
                if self.withdraw(operation.amount) {
                    Outcome::Withdrawn
                } else {
                    Outcome::Insufficient
                }
            }
        }
    }
}
