//! Transactions module - multi-currency expense entry and monthly summaries.

mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_model::{
    CategorySummary, CategoryTotal, MonthlySummary, NewTransaction, Transaction,
    TransactionCreated, TransactionFilter, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
