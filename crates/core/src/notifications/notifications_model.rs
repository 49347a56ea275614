use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::NotificationTier;

/// A persisted budget alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetNotification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationTier,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
