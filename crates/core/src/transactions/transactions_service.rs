use super::transactions_model::{
    CategorySummary, MonthlySummary, NewTransaction, Transaction, TransactionCreated,
    TransactionFilter, TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::budget::BudgetServiceTrait;
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::constants::SUMMARY_PERCENT_PRECISION;
use crate::errors::{Error, Result};
use crate::fx::{CurrencyCode, FxServiceTrait, RateSource};
use crate::notifications::NotificationServiceTrait;
use crate::users::UserRepositoryTrait;
use crate::utils::{parse_year_month, round_half_up, Clock, SystemClock};
use async_trait::async_trait;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Creates transactions in a user's base currency and reports on them.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    fx_service: Arc<dyn FxServiceTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    notification_service: Arc<dyn NotificationServiceTrait>,
    clock: Arc<dyn Clock>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        fx_service: Arc<dyn FxServiceTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        notification_service: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        Self {
            repository,
            category_repository,
            user_repository,
            fx_service,
            budget_service,
            notification_service,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Categories of other users are reported as missing.
    fn owned_category(&self, user_id: &str, category_id: &str) -> Result<Category> {
        self.category_repository
            .get_by_id(user_id, category_id)?
            .ok_or_else(|| Error::NotFound(format!("Category {}", category_id)))
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    /// Converts, previews the budget, then persists.
    ///
    /// Rate lookup and budget evaluation degrade instead of failing, so the
    /// only errors returned here are validation (including an amount too
    /// large to convert), missing user/category, and the final insert.
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<TransactionCreated> {
        new_transaction.validate()?;

        let user = self
            .user_repository
            .get_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User {}", user_id)))?;

        let currency = match new_transaction.currency.as_deref().map(str::trim) {
            None | Some("") => user.base_currency,
            Some(code) => code.parse::<CurrencyCode>()?,
        };

        let category_id = new_transaction.category_id.trim().to_string();
        self.owned_category(user_id, &category_id)?;

        let now = self.clock.now();
        let date = new_transaction.parsed_date()?.unwrap_or(now);

        let conversion = self
            .fx_service
            .convert_amount(new_transaction.amount, currency, user.base_currency)
            .await?;
        if matches!(conversion.source, RateSource::Fallback | RateSource::Default) {
            debug!(
                "Transaction for {} converted {}->{} at {} rate {}",
                user_id,
                currency,
                user.base_currency,
                conversion.source.as_str(),
                conversion.exchange_rate
            );
        }

        // Preview: persisted spend plus this transaction, before it is written.
        let budget_status = self
            .budget_service
            .check_budget(user_id, conversion.converted_amount);

        let transaction = self
            .repository
            .create(Transaction {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                category_id,
                amount: new_transaction.amount,
                currency,
                exchange_rate: conversion.exchange_rate,
                description: new_transaction.description.trim().to_string(),
                date,
                created_at: now,
                updated_at: now,
            })
            .await?;

        if let Some(status) = &budget_status {
            if let Err(e) = self
                .notification_service
                .record_budget_status(user_id, status)
                .await
            {
                warn!("Failed to record budget notification for {}: {}", user_id, e);
            }
        }

        Ok(TransactionCreated {
            transaction,
            conversion,
            budget_status,
        })
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.repository
            .get_by_id(user_id, transaction_id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", transaction_id)))
    }

    fn list_transactions(
        &self,
        user_id: &str,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>> {
        let category_id = filter
            .category_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let period = match filter.month.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(month) => Some(parse_year_month(month)?),
        };

        let mut transactions = self.repository.list(user_id, category_id, period)?;
        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(transactions)
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        update.validate()?;
        let date = update.parsed_date()?;
        let mut transaction = self.get_transaction(user_id, transaction_id)?;

        if let Some(category_id) = update.category_id.as_deref().map(str::trim) {
            self.owned_category(user_id, category_id)?;
            transaction.category_id = category_id.to_string();
        }
        if let Some(amount) = update.amount {
            transaction.amount = amount;
            // Re-applies the frozen rate; rejects amounts it cannot convert.
            transaction.base_amount()?;
        }
        if let Some(description) = update.description {
            transaction.description = description.trim().to_string();
        }
        if let Some(date) = date {
            transaction.date = date;
        }
        transaction.updated_at = self.clock.now();

        debug!("Updating transaction {} for {}", transaction_id, user_id);
        self.repository.update(transaction).await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        let transaction = self.get_transaction(user_id, transaction_id)?;
        self.repository.delete(&transaction.id).await?;
        info!("Deleted transaction {} for {}", transaction.id, user_id);
        Ok(())
    }

    fn get_monthly_summary(&self, user_id: &str, month: &str) -> Result<MonthlySummary> {
        let (year, month_num) = parse_year_month(month)?;
        let totals = self
            .repository
            .get_category_totals(user_id, year, month_num)?;

        let total_expenses = totals
            .iter()
            .try_fold(Decimal::ZERO, |sum, t| sum.checked_add(t.total))
            .ok_or_else(|| {
                Error::Unexpected(format!(
                    "Expense total for {:04}-{:02} overflows",
                    year, month_num
                ))
            })?;
        let summary = totals
            .into_iter()
            .map(|t| {
                let percentage = if total_expenses > Decimal::ZERO {
                    round_half_up(
                        t.total / total_expenses * dec!(100),
                        SUMMARY_PERCENT_PRECISION,
                    )
                } else {
                    Decimal::ZERO
                };
                CategorySummary {
                    name: t.name,
                    color: t.color,
                    total: t.total,
                    percentage,
                }
            })
            .collect();

        Ok(MonthlySummary {
            summary,
            total_expenses,
            month: format!("{:04}-{:02}", year, month_num),
        })
    }
}
