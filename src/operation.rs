use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Deposit,
    Withdrawal,
}

/// One row of an operations script
#[derive(Debug, Deserialize, Clone)]
pub struct Operation {
    #[serde(rename = "type")]
    pub op_type: OperationType,
    pub amount: f64,
}

impl Operation {
    /// Negative amounts are applied as given: a negative deposit lowers the
    /// balance and a negative withdrawal raises it.
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negative() {
        let deposit = Operation {
            op_type: OperationType::Deposit,
            amount: 100.0,
        };
        assert!(!deposit.is_negative());

        let negative = Operation {
            op_type: OperationType::Withdrawal,
            amount: -1.0,
        };
        assert!(negative.is_negative());
    }

    #[test]
    fn test_deserialize_row() {
        let data = "type,amount\nwithdrawal,200.0\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let operation: Operation = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(operation.op_type, OperationType::Withdrawal);
        assert_eq!(operation.amount, 200.0);
    }
}
