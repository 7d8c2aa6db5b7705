use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde_derive::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub enum Operation {
    #[serde(rename = "call")]
    Call,

    #[serde(rename = "undo")]
    Undo,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Call => write!(f, "call"),
            Operation::Undo => write!(f, "undo"),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AccountBalance {
    pub account: String,
    pub balance: String,
}

impl AccountBalance {
    pub fn new(account: &str, balance: f64) -> Self {
        Self {
            account: account.to_string(),
            balance: round_f64_4dp_string(balance).unwrap_or_else(|_| balance.to_string()),
        }
    }
}

/// Snapshot taken after a `call` or `undo` step of a script.
#[derive(Debug, Serialize, PartialEq)]
pub struct StepReport {
    pub step: usize,
    pub operation: Operation,
    pub command: String,
    pub succeeded: bool,
    pub balances: Vec<AccountBalance>,
}

/// One CSV record per account per step.
#[derive(Debug, Serialize)]
pub struct CsvRecord<'a> {
    pub step: usize,
    pub operation: Operation,
    pub command: &'a str,
    pub succeeded: bool,
    pub account: &'a str,
    pub balance: &'a str,
}

impl StepReport {
    pub fn csv_records(&self) -> impl Iterator<Item = CsvRecord<'_>> {
        self.balances.iter().map(move |balance| CsvRecord {
            step: self.step,
            operation: self.operation,
            command: &self.command,
            succeeded: self.succeeded,
            account: &balance.account,
            balance: &balance.balance,
        })
    }
}

/// Round an f64 to a Decimal using "Banker's Rounding" with max 4 decimal places and represent it as a String
fn round_f64_4dp_string(x: f64) -> Result<String, &'static str> {
    let d = Decimal::from_f64(x).ok_or("Error converting f64 to Decimal")?;
    let rounded_decimal = d.round_dp(4);
    Ok(format!("{:.4}", rounded_decimal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_f64_4dp_string() {
        assert_eq!(round_f64_4dp_string(800.0).unwrap(), "800.0000");
        assert_eq!(round_f64_4dp_string(-1.5).unwrap(), "-1.5000");
        assert_eq!(round_f64_4dp_string(-1.23456).unwrap(), "-1.2346");
        assert!(round_f64_4dp_string(f64::NAN).is_err());
    }

    #[test]
    fn test_csv_records_flatten_balances() {
        let report = StepReport {
            step: 4,
            operation: Operation::Undo,
            command: "t".to_string(),
            succeeded: true,
            balances: vec![AccountBalance::new("A", 1.0), AccountBalance::new("B", 2.0)],
        };

        let records: Vec<_> = report.csv_records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].account, "A");
        assert_eq!(records[1].balance, "2.0000");
        assert_eq!(records[1].step, 4);
    }
}
