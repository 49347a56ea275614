//! Shared fixtures for the integration tests: an in-memory store that
//! implements every repository trait, and a scriptable rate provider.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use spendwise_core::budget::{BudgetService, SpendingRepositoryTrait};
use spendwise_core::categories::{Category, CategoryRepositoryTrait, CategoryService};
use spendwise_core::config::FxConfig;
use spendwise_core::fx::{CurrencyCode, FxService};
use spendwise_core::notifications::{
    BudgetNotification, NotificationRepositoryTrait, NotificationService,
};
use spendwise_core::transactions::{
    CategoryTotal, Transaction, TransactionRepositoryTrait, TransactionService,
};
use spendwise_core::users::{User, UserRepositoryTrait};
use spendwise_core::utils::ManualClock;
use spendwise_core::{Error, Result};
use spendwise_market_data::{FxQuote, FxRateProvider, MarketDataError};

pub fn may_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 9, 30, 0).unwrap()
}

#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<HashMap<String, User>>,
    pub categories: Mutex<Vec<Category>>,
    pub transactions: Mutex<Vec<Transaction>>,
    pub notifications: Mutex<Vec<BudgetNotification>>,
    pub fail_spending: AtomicBool,
}

impl InMemoryStore {
    pub fn add_user(&self, id: &str, base_currency: CurrencyCode, budget_limit: Decimal) {
        let user = User {
            base_currency,
            budget_limit,
            ..User::new(id, id, &format!("{}@example.com", id), may_2024())
        };
        self.users.lock().unwrap().insert(id.to_string(), user);
    }

    pub fn add_category(&self, id: &str, user_id: &str, name: &str) {
        self.categories.lock().unwrap().push(Category {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: String::new(),
            color: "#3B82F6".to_string(),
            created_at: may_2024(),
        });
    }

    /// Seeds an already-persisted transaction.
    pub fn add_transaction(
        &self,
        user_id: &str,
        category_id: &str,
        amount: Decimal,
        currency: CurrencyCode,
        exchange_rate: Decimal,
        date: DateTime<Utc>,
    ) {
        let mut transactions = self.transactions.lock().unwrap();
        let id = format!("seed-{}", transactions.len());
        transactions.push(Transaction {
            id,
            user_id: user_id.to_string(),
            category_id: category_id.to_string(),
            amount,
            currency,
            exchange_rate,
            description: "seed".to_string(),
            date,
            created_at: date,
            updated_at: date,
        });
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }

    async fn update_base_currency(&self, user_id: &str, currency: CurrencyCode) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| Error::NotFound(user_id.to_string()))?;
        user.base_currency = currency;
        Ok(user.clone())
    }

    async fn update_budget_limit(&self, user_id: &str, limit: Decimal) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| Error::NotFound(user_id.to_string()))?;
        user.budget_limit = limit;
        Ok(user.clone())
    }
}

impl SpendingRepositoryTrait for InMemoryStore {
    fn get_monthly_spending(&self, user_id: &str, year: i32, month: u32) -> Result<Decimal> {
        if self.fail_spending.load(Ordering::SeqCst) {
            return Err(Error::Repository("database is locked".to_string()));
        }
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && t.date.year() == year && t.date.month() == month)
            .map(Transaction::base_amount)
            .sum()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, user_id: &str, category_id: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == category_id && c.user_id == user_id)
            .cloned())
    }

    fn list(&self, user_id: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    fn has_transactions(&self, category_id: &str) -> Result<bool> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.category_id == category_id))
    }

    async fn create(&self, category: Category) -> Result<Category> {
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        let row = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| Error::NotFound(category.id.clone()))?;
        *row = category.clone();
        Ok(category)
    }

    async fn delete(&self, category_id: &str) -> Result<usize> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != category_id);
        Ok(before - categories.len())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryStore {
    fn get_by_id(&self, user_id: &str, transaction_id: &str) -> Result<Option<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == transaction_id && t.user_id == user_id)
            .cloned())
    }

    fn list(
        &self,
        user_id: &str,
        category_id: Option<&str>,
        period: Option<(i32, u32)>,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .filter(|t| category_id.map_or(true, |c| t.category_id == c))
            .filter(|t| {
                period.map_or(true, |(y, m)| t.date.year() == y && t.date.month() == m)
            })
            .cloned()
            .collect())
    }

    fn get_category_totals(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategoryTotal>> {
        let categories = self.categories.lock().unwrap();
        let transactions = self.transactions.lock().unwrap();

        let mut totals: Vec<CategoryTotal> = Vec::new();
        for category in categories.iter().filter(|c| c.user_id == user_id) {
            let total: Decimal = transactions
                .iter()
                .filter(|t| {
                    t.category_id == category.id
                        && t.date.year() == year
                        && t.date.month() == month
                })
                .map(Transaction::base_amount)
                .sum::<Result<Decimal>>()?;
            if total > Decimal::ZERO {
                totals.push(CategoryTotal {
                    name: category.name.clone(),
                    color: category.color.clone(),
                    total,
                });
            }
        }
        Ok(totals)
    }

    async fn create(&self, transaction: Transaction) -> Result<Transaction> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction> {
        let mut transactions = self.transactions.lock().unwrap();
        let row = transactions
            .iter_mut()
            .find(|t| t.id == transaction.id)
            .ok_or_else(|| Error::NotFound(transaction.id.clone()))?;
        *row = transaction.clone();
        Ok(transaction)
    }

    async fn delete(&self, transaction_id: &str) -> Result<usize> {
        let mut transactions = self.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|t| t.id != transaction_id);
        Ok(before - transactions.len())
    }
}

#[async_trait]
impl NotificationRepositoryTrait for InMemoryStore {
    async fn insert(&self, notification: BudgetNotification) -> Result<BudgetNotification> {
        self.notifications
            .lock()
            .unwrap()
            .push(notification.clone());
        Ok(notification)
    }

    fn list_recent(&self, user_id: &str, limit: usize) -> Result<Vec<BudgetNotification>> {
        let mut rows: Vec<BudgetNotification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit);
        Ok(rows)
    }
}

/// Rate provider that either answers a fixed rate or fails every request.
pub struct ScriptedProvider {
    rate: Mutex<Option<Decimal>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn failing() -> Self {
        Self {
            rate: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn answering(rate: Decimal) -> Self {
        Self {
            rate: Mutex::new(Some(rate)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `None` makes every following request fail.
    pub fn set_rate(&self, rate: Option<Decimal>) {
        *self.rate.lock().unwrap() = rate;
    }
}

#[async_trait]
impl FxRateProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "SCRIPTED"
    }

    async fn get_latest_rate(
        &self,
        from: &str,
        to: &str,
    ) -> std::result::Result<FxQuote, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rate = *self.rate.lock().unwrap();
        match rate {
            Some(rate) => Ok(FxQuote::new(from, to, rate, self.id())),
            None => Err(MarketDataError::HttpStatus {
                provider: self.id().to_string(),
                status: 503,
            }),
        }
    }
}

/// Services wired the way an application would wire them.
pub struct Harness {
    pub store: Arc<InMemoryStore>,
    pub provider: Arc<ScriptedProvider>,
    pub clock: Arc<ManualClock>,
    pub fx: Arc<FxService>,
    pub budget: Arc<BudgetService>,
    pub notifications: Arc<NotificationService>,
    pub categories: CategoryService,
    pub transactions: TransactionService,
}

impl Harness {
    pub fn new(provider: ScriptedProvider) -> Self {
        let store = Arc::new(InMemoryStore::default());
        let provider = Arc::new(provider);
        let clock = Arc::new(ManualClock::new(may_2024()));

        let fx = Arc::new(
            FxService::with_provider(provider.clone(), &FxConfig::default(), clock.clone())
                .unwrap(),
        );
        let budget =
            Arc::new(BudgetService::new(store.clone(), store.clone()).with_clock(clock.clone()));
        let notifications =
            Arc::new(NotificationService::new(store.clone()).with_clock(clock.clone()));
        let categories = CategoryService::new(store.clone()).with_clock(clock.clone());
        let transactions = TransactionService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            fx.clone(),
            budget.clone(),
            notifications.clone(),
        )
        .with_clock(clock.clone());

        Self {
            store,
            provider,
            clock,
            fx,
            budget,
            notifications,
            categories,
            transactions,
        }
    }
}
