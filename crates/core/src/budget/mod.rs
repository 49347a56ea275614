//! Budget module - monthly limit evaluation and notification tiers.

mod budget_evaluator;
mod budget_model;
mod budget_service;
mod budget_traits;

pub use budget_evaluator::evaluate;
pub use budget_model::{BudgetLimitUpdate, BudgetNotice, BudgetStatus, NotificationTier};
pub use budget_service::BudgetService;
pub use budget_traits::{BudgetServiceTrait, SpendingRepositoryTrait};
