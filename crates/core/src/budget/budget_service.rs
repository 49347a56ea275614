use super::budget_evaluator::evaluate;
use super::budget_model::{BudgetLimitUpdate, BudgetStatus};
use super::budget_traits::{BudgetServiceTrait, SpendingRepositoryTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::users::UserRepositoryTrait;
use crate::utils::{year_month_of, Clock, SystemClock};
use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct BudgetService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    spending_repository: Arc<dyn SpendingRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl BudgetService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        spending_repository: Arc<dyn SpendingRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            spending_repository,
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets the clock used to decide which month is "current".
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn check_budget(&self, user_id: &str, incoming: Decimal) -> Option<BudgetStatus> {
        let user = match self.user_repository.get_by_id(user_id) {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("Budget check skipped, user {} not found", user_id);
                return None;
            }
            Err(e) => {
                warn!("Budget check failed to load user {}: {}", user_id, e);
                return None;
            }
        };
        if !user.has_budget() {
            return None;
        }

        let (year, month) = year_month_of(self.clock.now());
        let spent = match self
            .spending_repository
            .get_monthly_spending(user_id, year, month)
        {
            Ok(spent) => spent,
            Err(e) => {
                warn!(
                    "Budget check failed to aggregate {}-{:02} spending for {}: {}",
                    year, month, user_id, e
                );
                return None;
            }
        };

        evaluate(user.budget_limit, spent, incoming)
    }

    fn get_budget_status(&self, user_id: &str) -> Result<BudgetStatus> {
        Ok(self
            .check_budget(user_id, Decimal::ZERO)
            .unwrap_or_else(BudgetStatus::empty))
    }

    async fn set_budget_limit(&self, user_id: &str, limit: Decimal) -> Result<BudgetLimitUpdate> {
        if limit < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Budget limit must not be negative, got {}",
                limit
            ))
            .into());
        }
        if self.user_repository.get_by_id(user_id)?.is_none() {
            return Err(Error::NotFound(format!("User {}", user_id)));
        }

        let user = self
            .user_repository
            .update_budget_limit(user_id, limit)
            .await?;

        Ok(BudgetLimitUpdate {
            budget_limit: user.budget_limit,
            budget_status: self.check_budget(user_id, Decimal::ZERO),
        })
    }
}
