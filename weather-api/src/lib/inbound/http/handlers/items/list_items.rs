use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;

use super::ItemData;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::page::Page;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<ApiSuccess<Vec<ItemData>>, ApiError> {
    state
        .item_service
        .list_items(page)
        .await
        .map_err(ApiError::from)
        .map(|items| ApiSuccess::new(StatusCode::OK, items.iter().map(ItemData::from).collect()))
}
