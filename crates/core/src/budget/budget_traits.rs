use super::budget_model::{BudgetLimitUpdate, BudgetStatus};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Aggregates persisted spending.
pub trait SpendingRepositoryTrait: Send + Sync {
    /// Sum of `amount * exchange_rate` over the user's transactions dated in
    /// `year`-`month`, i.e. the month's spending in the user's base currency.
    fn get_monthly_spending(&self, user_id: &str, year: i32, month: u32) -> Result<Decimal>;
}

/// Trait defining the contract for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Budget status for the current month with `incoming` added on top of
    /// what is already persisted. Never fails: anything that prevents an
    /// evaluation yields `None`.
    fn check_budget(&self, user_id: &str, incoming: Decimal) -> Option<BudgetStatus>;

    /// Current status, or an all-zero status when budgeting is off.
    fn get_budget_status(&self, user_id: &str) -> Result<BudgetStatus>;

    async fn set_budget_limit(&self, user_id: &str, limit: Decimal) -> Result<BudgetLimitUpdate>;
}
