use super::users_model::User;
use crate::errors::Result;
use crate::fx::CurrencyCode;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait defining the contract for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn update_base_currency(&self, user_id: &str, currency: CurrencyCode) -> Result<User>;
    async fn update_budget_limit(&self, user_id: &str, limit: Decimal) -> Result<User>;
}

/// Trait defining the contract for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    async fn set_base_currency(&self, user_id: &str, currency: &str) -> Result<User>;
}
