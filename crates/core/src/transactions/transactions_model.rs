//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetStatus;
use crate::errors::{Result, ValidationError};
use crate::fx::{ConvertedAmount, CurrencyCode};

/// A recorded expense.
///
/// `exchange_rate` converts `amount` into the owner's base currency and is
/// frozen at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub exchange_rate: Decimal,
    pub description: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount in the owner's base currency at the captured rate.
    pub fn base_amount(&self) -> Result<Decimal> {
        self.amount.checked_mul(self.exchange_rate).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Amount {} {} is too large at rate {}",
                self.amount, self.currency, self.exchange_rate
            ))
            .into()
        })
    }
}

fn require_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "Amount must be positive, got {}",
            amount
        ))
        .into());
    }
    Ok(())
}

/// Parses an RFC 3339 timestamp, accepting a trailing `Z` as UTC.
fn parse_timestamp(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw).map_err(ValidationError::from)?;
            Ok(Some(parsed.with_timezone(&Utc)))
        }
    }
}

/// Input model for creating a new transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub description: String,
    pub category_id: String,
    /// Defaults to the user's base currency
    pub currency: Option<String>,
    /// RFC 3339 timestamp; defaults to now
    pub date: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.amount)?;
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if self.category_id.trim().is_empty() {
            return Err(ValidationError::MissingField("categoryId".to_string()).into());
        }
        Ok(())
    }

    pub fn parsed_date(&self) -> Result<Option<DateTime<Utc>>> {
        parse_timestamp(self.date.as_deref())
    }
}

/// Partial update of a transaction; `None` leaves the field unchanged.
///
/// Currency is fixed once recorded, and so is the captured exchange rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub date: Option<String>,
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            require_positive(amount)?;
        }
        if matches!(&self.description, Some(d) if d.trim().is_empty()) {
            return Err(ValidationError::InvalidInput(
                "Description must not be empty".to_string(),
            )
            .into());
        }
        if matches!(&self.category_id, Some(c) if c.trim().is_empty()) {
            return Err(ValidationError::InvalidInput(
                "Category id must not be empty".to_string(),
            )
            .into());
        }
        Ok(())
    }

    pub fn parsed_date(&self) -> Result<Option<DateTime<Utc>>> {
        parse_timestamp(self.date.as_deref())
    }
}

/// Filters for listing transactions. Empty values are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub category_id: Option<String>,
    /// `YYYY-MM`
    pub month: Option<String>,
}

/// Result of the create-transaction flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreated {
    pub transaction: Transaction,
    pub conversion: ConvertedAmount,
    /// Budget preview including this transaction, when budgeting is enabled
    pub budget_status: Option<BudgetStatus>,
}

/// Per-category spending in base currency, as aggregated by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub name: String,
    pub color: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub color: String,
    pub total: Decimal,
    /// Share of the month's total, 0-100
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub summary: Vec<CategorySummary>,
    pub total_expenses: Decimal,
    pub month: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn new_transaction() -> NewTransaction {
        NewTransaction {
            amount: dec!(25.50),
            description: "Lunch".to_string(),
            category_id: "food".to_string(),
            currency: None,
            date: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert!(new_transaction().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut tx = new_transaction();
        tx.amount = Decimal::ZERO;
        assert!(matches!(tx.validate(), Err(Error::Validation(_))));

        let mut tx = new_transaction();
        tx.description = "   ".to_string();
        assert!(matches!(
            tx.validate(),
            Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "description"
        ));

        let mut tx = new_transaction();
        tx.category_id = String::new();
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_parsed_date() {
        let mut tx = new_transaction();
        assert_eq!(tx.parsed_date().unwrap(), None);

        tx.date = Some("2024-05-03T10:15:00Z".to_string());
        assert_eq!(
            tx.parsed_date().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 5, 3, 10, 15, 0).unwrap())
        );

        tx.date = Some("2024-05-03T17:15:00+07:00".to_string());
        assert_eq!(
            tx.parsed_date().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 5, 3, 10, 15, 0).unwrap())
        );

        tx.date = Some("yesterday".to_string());
        assert!(matches!(
            tx.parsed_date(),
            Err(Error::Validation(ValidationError::DateTimeParse(_)))
        ));
    }

    #[test]
    fn test_base_amount_uses_frozen_rate() {
        let mut tx = Transaction {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            category_id: "food".to_string(),
            amount: dec!(100),
            currency: CurrencyCode::Usd,
            exchange_rate: dec!(15000),
            description: "Dinner".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap(),
        };
        assert_eq!(tx.base_amount().unwrap(), dec!(1500000));

        tx.amount = Decimal::MAX;
        assert!(matches!(tx.base_amount(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_update_validation() {
        assert!(TransactionUpdate::default().validate().is_ok());

        let update = TransactionUpdate {
            amount: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(matches!(update.validate(), Err(Error::Validation(_))));

        let update = TransactionUpdate {
            description: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = TransactionUpdate {
            category_id: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = TransactionUpdate {
            date: Some("2024-13-01".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
        assert!(update.parsed_date().is_err());
    }
}
