//! Budget domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

/// Budget alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTier {
    Info,
    Warning,
    Danger,
}

impl NotificationTier {
    /// Highest threshold first. Classification walks this order and stops at
    /// the first match.
    pub const DESCENDING: [NotificationTier; 3] = [
        NotificationTier::Danger,
        NotificationTier::Warning,
        NotificationTier::Info,
    ];

    /// Minimum percentage of the monthly limit that triggers this tier.
    pub fn threshold(&self) -> Decimal {
        match self {
            NotificationTier::Danger => dec!(100),
            NotificationTier::Warning => dec!(90),
            NotificationTier::Info => dec!(80),
        }
    }

    /// The single tier for `percentage`, or `None` below 80%.
    pub fn classify(percentage: Decimal) -> Option<Self> {
        Self::DESCENDING
            .into_iter()
            .find(|tier| percentage >= tier.threshold())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTier::Info => "info",
            NotificationTier::Warning => "warning",
            NotificationTier::Danger => "danger",
        }
    }
}

impl fmt::Display for NotificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "info" => Ok(NotificationTier::Info),
            "warning" => Ok(NotificationTier::Warning),
            "danger" => Ok(NotificationTier::Danger),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown notification type '{}'",
                other
            ))
            .into()),
        }
    }
}

/// One fired tier with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetNotice {
    #[serde(rename = "type")]
    pub notification_type: NotificationTier,
    pub message: String,
    pub percentage: Decimal,
}

/// Budget position for the current month.
///
/// `current_spending` is in the user's base currency and already includes any
/// pending transaction that was evaluated with it. `notifications` holds at
/// most one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget_limit: Decimal,
    pub current_spending: Decimal,
    pub percentage: Decimal,
    pub notifications: Vec<BudgetNotice>,
}

impl BudgetStatus {
    /// Status reported when budgeting is disabled or unavailable.
    pub fn empty() -> Self {
        Self {
            budget_limit: Decimal::ZERO,
            current_spending: Decimal::ZERO,
            percentage: Decimal::ZERO,
            notifications: Vec::new(),
        }
    }

    pub fn tier(&self) -> Option<NotificationTier> {
        self.notifications.first().map(|n| n.notification_type)
    }
}

/// Result of changing a user's monthly limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimitUpdate {
    pub budget_limit: Decimal,
    pub budget_status: Option<BudgetStatus>,
}
