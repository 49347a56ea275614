//! Notifications module - persisted budget alerts.

mod notifications_model;
mod notifications_service;
mod notifications_traits;

pub use notifications_model::BudgetNotification;
pub use notifications_service::NotificationService;
pub use notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
