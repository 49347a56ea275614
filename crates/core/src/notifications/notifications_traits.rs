use super::notifications_model::BudgetNotification;
use crate::budget::BudgetStatus;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for notification repository operations.
#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    async fn insert(&self, notification: BudgetNotification) -> Result<BudgetNotification>;

    /// At most `limit` notifications for `user_id`, newest first.
    fn list_recent(&self, user_id: &str, limit: usize) -> Result<Vec<BudgetNotification>>;
}

/// Trait defining the contract for notification service operations.
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Persists the tier that fired in `status`, if any.
    async fn record_budget_status(
        &self,
        user_id: &str,
        status: &BudgetStatus,
    ) -> Result<Option<BudgetNotification>>;

    fn get_recent_notifications(&self, user_id: &str) -> Result<Vec<BudgetNotification>>;
}
