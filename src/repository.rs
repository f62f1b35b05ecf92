use crate::models::{GalleryItem, MenuCategory, MenuItem, RestaurantInfo};
use crate::seed;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// RepositoryError
///
/// Failures a content store can report. An out-of-range item index is a
/// not-found condition, the same HTTP kind as an unknown category.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("menu category '{0}' not found")]
    CategoryNotFound(String),

    #[error("item {index} not found in category '{category}'")]
    ItemNotFound { category: String, index: i64 },

    /// The backing store could not serve the request.
    #[error("content store unavailable: {0}")]
    Unavailable(String),
}

/// ContentRepository
///
/// Contract for reading and editing the site content. Handlers only see this
/// trait, so the in-memory store can be replaced by a durable one without
/// touching them.
///
/// Mutations must be applied whole or not at all from a caller's view.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn restaurant_info(&self) -> Result<RestaurantInfo, RepositoryError>;

    /// Full menu, categories ascending by `order`.
    async fn menu(&self) -> Result<Vec<MenuCategory>, RepositoryError>;

    async fn gallery(&self) -> Result<Vec<GalleryItem>, RepositoryError>;

    /// Overwrites a category's name and entire item list.
    async fn replace_category(
        &self,
        category_id: &str,
        name: String,
        items: Vec<MenuItem>,
    ) -> Result<MenuCategory, RepositoryError>;

    /// Appends to the end of the category; duplicates are allowed.
    async fn append_item(
        &self,
        category_id: &str,
        item: MenuItem,
    ) -> Result<MenuCategory, RepositoryError>;

    /// Removes the item at `index`, shifting later items down by one.
    async fn remove_item(&self, category_id: &str, index: i64)
    -> Result<MenuItem, RepositoryError>;
}

/// RepositoryState
///
/// The concrete type used to share content access across the application state.
pub type RepositoryState = Arc<dyn ContentRepository>;

/// InMemoryRepository
///
/// Process-local content store. Restaurant info and gallery are immutable
/// after construction; the menu sits behind a single `RwLock`.
pub struct InMemoryRepository {
    info: RestaurantInfo,
    gallery: Vec<GalleryItem>,
    menu: RwLock<Vec<MenuCategory>>,
}

impl InMemoryRepository {
    pub fn new(info: RestaurantInfo, menu: Vec<MenuCategory>, gallery: Vec<GalleryItem>) -> Self {
        Self {
            info,
            gallery,
            menu: RwLock::new(menu),
        }
    }

    /// A store pre-loaded with the restaurant's launch content.
    pub fn seeded() -> Self {
        Self::new(seed::restaurant_info(), seed::menu(), seed::gallery())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

fn find_category<'a>(
    menu: &'a mut [MenuCategory],
    category_id: &str,
) -> Result<&'a mut MenuCategory, RepositoryError> {
    // Linear scan: a menu has a handful of categories.
    menu.iter_mut()
        .find(|category| category.id == category_id)
        .ok_or_else(|| RepositoryError::CategoryNotFound(category_id.to_string()))
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn restaurant_info(&self) -> Result<RestaurantInfo, RepositoryError> {
        Ok(self.info.clone())
    }

    async fn menu(&self) -> Result<Vec<MenuCategory>, RepositoryError> {
        let mut categories = self.menu.read().await.clone();
        categories.sort_by_key(|category| category.order);
        Ok(categories)
    }

    async fn gallery(&self) -> Result<Vec<GalleryItem>, RepositoryError> {
        Ok(self.gallery.clone())
    }

    async fn replace_category(
        &self,
        category_id: &str,
        name: String,
        items: Vec<MenuItem>,
    ) -> Result<MenuCategory, RepositoryError> {
        let mut menu = self.menu.write().await;
        let category = find_category(&mut menu, category_id)?;
        category.name = name;
        category.items = items;
        Ok(category.clone())
    }

    async fn append_item(
        &self,
        category_id: &str,
        item: MenuItem,
    ) -> Result<MenuCategory, RepositoryError> {
        let mut menu = self.menu.write().await;
        let category = find_category(&mut menu, category_id)?;
        category.items.push(item);
        Ok(category.clone())
    }

    async fn remove_item(
        &self,
        category_id: &str,
        index: i64,
    ) -> Result<MenuItem, RepositoryError> {
        let mut menu = self.menu.write().await;
        let category = find_category(&mut menu, category_id)?;

        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position < category.items.len())
            .ok_or_else(|| RepositoryError::ItemNotFound {
                category: category_id.to_string(),
                index,
            })?;

        Ok(category.items.remove(position))
    }
}
