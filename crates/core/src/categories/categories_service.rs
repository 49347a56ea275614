use super::categories_model::{Category, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::constants::DEFAULT_CATEGORY_COLOR;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::{Clock, SystemClock};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

/// Service for managing a user's spending categories.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Names are unique per user, compared after trimming.
    fn ensure_name_available(
        &self,
        user_id: &str,
        name: &str,
        except: Option<&str>,
    ) -> Result<()> {
        let taken = self
            .repository
            .list(user_id)?
            .into_iter()
            .any(|c| c.name == name && Some(c.id.as_str()) != except);
        if taken {
            return Err(ValidationError::InvalidInput(format!(
                "A category named '{}' already exists",
                name
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category> {
        self.repository
            .get_by_id(user_id, category_id)?
            .ok_or_else(|| Error::NotFound(format!("Category {}", category_id)))
    }

    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut categories = self.repository.list(user_id)?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        let name = new_category.name.trim().to_string();
        self.ensure_name_available(user_id, &name, None)?;

        let category = self
            .repository
            .create(Category {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                name,
                description: new_category.description.unwrap_or_default(),
                color: new_category
                    .color
                    .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
                created_at: self.clock.now(),
            })
            .await?;
        info!("Created category '{}' for {}", category.name, user_id);
        Ok(category)
    }

    async fn update_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        update.validate()?;
        let mut category = self.get_category(user_id, category_id)?;

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            self.ensure_name_available(user_id, &name, Some(category_id))?;
            category.name = name;
        }
        if let Some(description) = update.description {
            category.description = description;
        }
        if let Some(color) = update.color {
            category.color = color;
        }

        debug!("Updating category {} for {}", category_id, user_id);
        self.repository.update(category).await
    }

    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        let category = self.get_category(user_id, category_id)?;
        if self.repository.has_transactions(&category.id)? {
            return Err(ValidationError::InvalidInput(format!(
                "Category '{}' is still used by transactions",
                category.name
            ))
            .into());
        }
        self.repository.delete(&category.id).await?;
        info!("Deleted category '{}' for {}", category.name, user_id);
        Ok(())
    }
}
