use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ItemData;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    state
        .item_service
        .create_item(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateItemRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    is_offer: bool,
}

impl CreateItemRequest {
    fn try_into_command(self) -> Result<CreateItemCommand, ItemError> {
        Ok(CreateItemCommand {
            name: ItemName::new(self.name)?,
            description: self.description,
            price: Price::new(self.price)?,
            is_offer: self.is_offer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_item_request() {
        let request: CreateItemRequest =
            serde_json::from_str(r#"{"name": "umbrella", "price": 12.5}"#).unwrap();
        let command = request.try_into_command().unwrap();

        assert_eq!(command.name.as_str(), "umbrella");
        assert_eq!(command.price.value(), 12.5);
        assert!(command.description.is_none());
        assert!(!command.is_offer);
    }

    #[test]
    fn test_parse_rejects_negative_price() {
        let request: CreateItemRequest =
            serde_json::from_str(r#"{"name": "umbrella", "price": -1.0}"#).unwrap();

        assert!(matches!(
            request.try_into_command(),
            Err(ItemError::InvalidPrice(_))
        ));
    }
}
