use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::CurrencyCode;

/// The budgeting-relevant view of a user.
///
/// A `budget_limit` of zero means budgeting is disabled for this user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub base_currency: CurrencyCode,
    pub budget_limit: Decimal,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A new user: default base currency, budgeting disabled.
    pub fn new(id: &str, username: &str, email: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            base_currency: CurrencyCode::default(),
            budget_limit: Decimal::ZERO,
            created_at,
        }
    }

    pub fn has_budget(&self) -> bool {
        self.budget_limit > Decimal::ZERO
    }
}
