use super::users_model::User;
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};
use crate::fx::CurrencyCode;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .get_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User {}", user_id)))
    }

    /// Changes the currency that spending and the budget limit are expressed in.
    ///
    /// Existing transactions keep the rate captured when they were created.
    async fn set_base_currency(&self, user_id: &str, currency: &str) -> Result<User> {
        let currency: CurrencyCode = currency.parse()?;
        let user = self.get_user(user_id)?;
        if user.base_currency == currency {
            return Ok(user);
        }

        debug!(
            "Changing base currency of {} from {} to {}",
            user_id, user.base_currency, currency
        );
        self.repository.update_base_currency(user_id, currency).await
    }
}
