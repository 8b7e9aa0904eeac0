use serde::Serialize;

use crate::domain::item::models::Item;

pub mod create_item;
pub mod list_items;

pub use create_item::create_item;
pub use list_items::list_items;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemData {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_offer: bool,
}

impl From<&Item> for ItemData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.0,
            name: item.name.as_str().to_string(),
            description: item.description.clone(),
            price: item.price.value(),
            is_offer: item.is_offer,
        }
    }
}
