use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::page::Page;

#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// Store a new item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(&self, command: CreateItemCommand) -> Result<Item, ItemError>;

    /// List items ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self, page: Page) -> Result<Vec<Item>, ItemError>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    async fn create(&self, command: CreateItemCommand) -> Result<Item, ItemError>;

    async fn list(&self, page: Page) -> Result<Vec<Item>, ItemError>;
}
