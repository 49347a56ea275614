use super::notifications_model::BudgetNotification;
use super::notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
use crate::budget::BudgetStatus;
use crate::constants::RECENT_NOTIFICATIONS_LIMIT;
use crate::errors::Result;
use crate::utils::{Clock, SystemClock};
use async_trait::async_trait;
use std::sync::Arc;

pub struct NotificationService {
    repository: Arc<dyn NotificationRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn record_budget_status(
        &self,
        user_id: &str,
        status: &BudgetStatus,
    ) -> Result<Option<BudgetNotification>> {
        let Some(notice) = status.notifications.first() else {
            return Ok(None);
        };

        let notification = BudgetNotification {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            message: notice.message.clone(),
            notification_type: notice.notification_type,
            is_read: false,
            created_at: self.clock.now(),
        };
        let saved = self.repository.insert(notification).await?;
        log::info!(
            "Recorded {} budget notification for {}",
            saved.notification_type,
            user_id
        );
        Ok(Some(saved))
    }

    fn get_recent_notifications(&self, user_id: &str) -> Result<Vec<BudgetNotification>> {
        let mut notifications = self
            .repository
            .list_recent(user_id, RECENT_NOTIFICATIONS_LIMIT)?;
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications.truncate(RECENT_NOTIFICATIONS_LIMIT);
        Ok(notifications)
    }
}
