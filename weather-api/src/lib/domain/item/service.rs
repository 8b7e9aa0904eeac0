use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::page::Page;

pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn create_item(&self, command: CreateItemCommand) -> Result<Item, ItemError> {
        let item = self.repository.create(command).await?;
        tracing::info!(item_id = %item.id, name = item.name.as_str(), "Item created");
        Ok(item)
    }

    async fn list_items(&self, page: Page) -> Result<Vec<Item>, ItemError> {
        self.repository.list(page.normalized()).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::item::models::ItemId;
    use crate::domain::item::models::ItemName;
    use crate::domain::item::models::Price;

    mock! {
        pub TestItemRepository {}

        #[async_trait]
        impl ItemRepository for TestItemRepository {
            async fn create(&self, command: CreateItemCommand) -> Result<Item, ItemError>;
            async fn list(&self, page: Page) -> Result<Vec<Item>, ItemError>;
        }
    }

    #[tokio::test]
    async fn test_create_item() {
        let mut repository = MockTestItemRepository::new();
        repository
            .expect_create()
            .withf(|command| command.name.as_str() == "umbrella" && !command.is_offer)
            .times(1)
            .returning(|command| {
                Ok(Item {
                    id: ItemId(1),
                    name: command.name,
                    description: command.description,
                    price: command.price,
                    is_offer: command.is_offer,
                })
            });

        let service = ItemService::new(Arc::new(repository));

        let item = service
            .create_item(CreateItemCommand {
                name: ItemName::new("umbrella".to_string()).unwrap(),
                description: Some("for rainy days".to_string()),
                price: Price::new(19.99).unwrap(),
                is_offer: false,
            })
            .await
            .unwrap();

        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.description.as_deref(), Some("for rainy days"));
    }

    #[tokio::test]
    async fn test_list_items_propagates_database_error() {
        let mut repository = MockTestItemRepository::new();
        repository
            .expect_list()
            .withf(|page| *page == Page::new(10, 100))
            .times(1)
            .returning(|_| Err(ItemError::DatabaseError("connection reset".to_string())));

        let service = ItemService::new(Arc::new(repository));

        let result = service.list_items(Page::new(10, 500)).await;
        assert!(matches!(result, Err(ItemError::DatabaseError(_))));
    }
}
