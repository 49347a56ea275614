use super::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for category repository operations.
///
/// Every lookup is scoped to the owning user.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// The category, only if it belongs to `user_id`.
    fn get_by_id(&self, user_id: &str, category_id: &str) -> Result<Option<Category>>;

    fn list(&self, user_id: &str) -> Result<Vec<Category>>;

    /// Whether any transaction still references the category.
    fn has_transactions(&self, category_id: &str) -> Result<bool>;

    async fn create(&self, category: Category) -> Result<Category>;

    async fn update(&self, category: Category) -> Result<Category>;

    /// Returns the number of deleted records.
    async fn delete(&self, category_id: &str) -> Result<usize>;
}

/// Trait defining the contract for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category>;

    /// All of the user's categories, ordered by name.
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;

    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;

    async fn update_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;

    /// Refuses to delete a category that transactions still use.
    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()>;
}
