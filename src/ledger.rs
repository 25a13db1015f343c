use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

/// A single money movement. Values are never mutated once built; the chart
/// keeps its own copy of whatever list it was last given.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(kind: TransactionType, category: impl Into<String>, amount: f64) -> Self {
        Transaction {
            kind,
            category: category.into(),
            amount,
        }
    }

    pub fn expense(category: impl Into<String>, amount: f64) -> Self {
        Transaction::new(TransactionType::Expense, category, amount)
    }

    pub fn income(category: impl Into<String>, amount: f64) -> Self {
        Transaction::new(TransactionType::Income, category, amount)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn load(path: &Path) -> Result<Vec<Transaction>> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let ledger = Ledger::parse(&content).map_err(|source| AppError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded {} transactions from {}", ledger.transactions.len(), path.display());

        Ok(ledger.transactions)
    }

    pub fn parse(content: &str) -> std::result::Result<Ledger, toml::de::Error> {
        toml::from_str(content)
    }

    /// Demo data shown when no ledger file is configured.
    pub fn sample() -> Vec<Transaction> {
        vec![
            Transaction::income("Salary", 85000.0),
            Transaction::expense("Rent", 22000.0),
            Transaction::expense("Food", 6400.0),
            Transaction::expense("Transport", 1850.0),
            Transaction::expense("Food", 2150.5),
            Transaction::expense("Utilities", 3200.0),
            Transaction::income("Freelance", 12000.0),
            Transaction::expense("Entertainment", 1499.0),
            Transaction::expense("Shopping", 4780.0),
            Transaction::expense("Health", 1200.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_transactions() {
        let ledger = Ledger::parse(
            r#"
[[transactions]]
type = "expense"
category = "Food"
amount = 120.5

[[transactions]]
type = "income"
category = "Salary"
amount = 5000.0
"#,
        )
        .unwrap();

        assert_eq!(
            ledger.transactions,
            vec![
                Transaction::expense("Food", 120.5),
                Transaction::income("Salary", 5000.0),
            ]
        );
    }

    #[test]
    fn empty_file_is_an_empty_ledger() {
        let ledger = Ledger::parse("").unwrap();
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let result = Ledger::parse(
            r#"
[[transactions]]
type = "transfer"
category = "Savings"
amount = 10.0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Ledger::load(Path::new("/definitely/not/here/ledger.toml")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn sample_has_expenses_and_income() {
        let sample = Ledger::sample();
        assert!(sample.iter().any(Transaction::is_expense));
        assert!(sample.iter().any(|t| !t.is_expense()));
    }
}
