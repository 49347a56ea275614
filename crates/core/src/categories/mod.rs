//! Categories module - user-owned spending categories.

mod categories_model;
mod categories_service;
mod categories_traits;

pub use categories_model::{Category, CategoryUpdate, NewCategory};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
