use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::domain::item::ports::ItemRepository;
use crate::domain::page::Page;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    is_offer: bool,
}

impl TryFrom<ItemRow> for Item {
    type Error = ItemError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId(row.id),
            name: ItemName::new(row.name)?,
            description: row.description,
            price: Price::new(row.price)?,
            is_offer: row.is_offer,
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, command: CreateItemCommand) -> Result<Item, ItemError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, description, price, is_offer)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, is_offer
            "#,
        )
        .bind(command.name.as_str())
        .bind(command.description.as_deref())
        .bind(command.price.value())
        .bind(command.is_offer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn list(&self, page: Page) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, price, is_offer
            FROM items
            ORDER BY id
            LIMIT $2
            OFFSET $1
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Item::try_from).collect()
    }
}
