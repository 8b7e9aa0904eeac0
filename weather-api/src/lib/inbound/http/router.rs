use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::items::create_item;
use super::handlers::items::list_items;
use super::handlers::root::root;
use super::handlers::users::current_user;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::users::login;
use super::handlers::users::register;
use super::handlers::weather::get_weather;
use super::middleware::authenticate as auth_middleware;
use crate::domain::item::service::ItemService;
use crate::domain::user::service::UserService;
use crate::domain::weather::service::WeatherService;
use crate::outbound::repositories::PostgresItemRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::outbound::weather::OpenWeatherMapClient;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub item_service: Arc<ItemService<PostgresItemRepository>>,
    pub weather_service: Arc<WeatherService<OpenWeatherMapClient>>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    item_service: Arc<ItemService<PostgresItemRepository>>,
    weather_service: Arc<WeatherService<OpenWeatherMapClient>>,
) -> Router {
    let state = AppState {
        user_service,
        item_service,
        weather_service,
    };

    // Collection and `me` routes answer with and without a trailing slash.
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/register", post(register))
        .route("/token", post(login))
        .route("/users", get(list_users).post(register))
        .route("/users/", get(list_users).post(register))
        .route("/users/:username", get(get_user))
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/weather/:city_name", get(get_weather));

    let protected_routes = Router::new()
        .route("/users/me", get(current_user))
        .route("/users/me/", get(current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out so bearer tokens never reach the logs.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
