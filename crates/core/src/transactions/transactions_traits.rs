use super::transactions_model::{
    CategoryTotal, MonthlySummary, NewTransaction, Transaction, TransactionCreated,
    TransactionFilter, TransactionUpdate,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for transaction repository operations.
///
/// Reads are scoped to the owning user.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// The transaction, only if it belongs to `user_id`.
    fn get_by_id(&self, user_id: &str, transaction_id: &str) -> Result<Option<Transaction>>;

    /// The user's transactions, optionally narrowed to one category and one
    /// `(year, month)`. Order is unspecified.
    fn list(
        &self,
        user_id: &str,
        category_id: Option<&str>,
        period: Option<(i32, u32)>,
    ) -> Result<Vec<Transaction>>;

    /// Base-currency totals per category for one month. Categories without
    /// transactions in that month are omitted.
    fn get_category_totals(&self, user_id: &str, year: i32, month: u32)
        -> Result<Vec<CategoryTotal>>;

    async fn create(&self, transaction: Transaction) -> Result<Transaction>;

    async fn update(&self, transaction: Transaction) -> Result<Transaction>;

    /// Returns the number of deleted records.
    async fn delete(&self, transaction_id: &str) -> Result<usize>;
}

/// Trait defining the contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<TransactionCreated>;

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;

    /// Newest first by transaction date.
    fn list_transactions(&self, user_id: &str, filter: &TransactionFilter)
        -> Result<Vec<Transaction>>;

    /// Applies a partial update. The exchange rate captured at creation is
    /// kept; a new amount is converted at that same rate.
    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;

    /// `month` is `YYYY-MM`.
    fn get_monthly_summary(&self, user_id: &str, month: &str) -> Result<MonthlySummary>;
}
