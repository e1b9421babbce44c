//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API over the two entity collections. Handlers translate
//! query parameters and bodies into repository calls and repository results
//! into status codes; list filtering happens here, after the fetch, not in
//! the store.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::dto::{
    CreateItemDto, CreateOrderDto, ItemDto, OrderDto, UpdateItemDto, UpdateOrderDto,
};
use crate::domain::catalog::Item;
use crate::domain::ordering::{Order, OrderStatus};
use crate::domain::repository::Repository;

use super::error::ApiError;
use super::extractors::ApiJson;

/// Application state shared across handlers: one repository per entity.
pub struct AppState<I, O>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    /// Item repository.
    pub items: Arc<I>,
    /// Order repository.
    pub orders: Arc<O>,
}

impl<I, O> Clone for AppState<I, O>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            orders: Arc::clone(&self.orders),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<I, O>(state: AppState<I, O>) -> Router
where
    I: Repository<Item> + 'static,
    O: Repository<Order> + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/api/orders", get(list_orders).post(create_order))
        .route(
            "/api/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

// ============================================
// Items
// ============================================

/// Query parameters for `GET /api/items`.
#[derive(Debug, Deserialize)]
struct ListItemsQuery {
    /// Optional case-insensitive name prefix filter.
    name: Option<String>,
}

async fn list_items<I, O>(
    State(state): State<AppState<I, O>>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemDto>>, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let items = state.items.get_all().await?;

    let dtos = match query.name {
        None => items.iter().map(ItemDto::from_entity).collect(),
        Some(prefix) => {
            let prefix = prefix.to_lowercase();
            items
                .iter()
                .filter(|item| item.name.to_lowercase().starts_with(&prefix))
                .map(ItemDto::from_entity)
                .collect()
        }
    };

    Ok(Json(dtos))
}

async fn get_item<I, O>(
    State(state): State<AppState<I, O>>,
    Path(id): Path<String>,
) -> Result<Json<ItemDto>, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let id = id.to_lowercase();
    match state.items.get_by_id(&id).await? {
        Some(item) => Ok(Json(ItemDto::from_entity(&item))),
        None => {
            tracing::error!(%id, "No such Item");
            Err(ApiError::NotFound("No such Item".to_string()))
        }
    }
}

async fn create_item<I, O>(
    State(state): State<AppState<I, O>>,
    ApiJson(body): ApiJson<CreateItemDto>,
) -> Result<impl IntoResponse, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    if body.name.trim().is_empty() || body.price < Decimal::ZERO {
        tracing::error!("Item data is invalid");
        return Err(ApiError::Invalid("Item data is invalid".to_string()));
    }

    match state.items.create(body.into_entity()).await {
        Ok(created) => {
            let dto = ItemDto::from_entity(&created);
            let location = format!("/api/items/{}", dto.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(dto),
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error creating Item");
            Err(ApiError::Invalid("Error creating Item".to_string()))
        }
    }
}

async fn update_item<I, O>(
    State(state): State<AppState<I, O>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateItemDto>,
) -> Result<Json<ItemDto>, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let id = id.to_lowercase();
    let Some(existing) = state.items.get_by_id(&id).await? else {
        tracing::error!(%id, "No such Item");
        return Err(ApiError::NotFound("No such Item".to_string()));
    };

    let merged = body.merge(&existing);
    match state.items.update(&merged).await? {
        Some(updated) => Ok(Json(ItemDto::from_entity(&updated))),
        None => {
            // Row vanished between the fetch and the overwrite.
            tracing::error!(%id, "No such Item");
            Err(ApiError::NotFound("No such Item".to_string()))
        }
    }
}

async fn delete_item<I, O>(
    State(state): State<AppState<I, O>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let id = id.to_lowercase();
    if state.items.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::error!(%id, "No such Item");
        Err(ApiError::NotFound("No such Item".to_string()))
    }
}

// ============================================
// Orders
// ============================================

/// Query parameters for `GET /api/orders`.
#[derive(Debug, Deserialize)]
struct ListOrdersQuery {
    /// Optional status flag filter, by symbolic name.
    status: Option<OrderStatus>,
}

async fn list_orders<I, O>(
    State(state): State<AppState<I, O>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderDto>>, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let orders = state.orders.get_all().await?;

    let dtos = match query.status {
        None => orders.iter().map(OrderDto::from_entity).collect(),
        Some(wanted) => orders
            .iter()
            .filter(|order| order.status.intersects(wanted))
            .map(OrderDto::from_entity)
            .collect(),
    };

    Ok(Json(dtos))
}

async fn get_order<I, O>(
    State(state): State<AppState<I, O>>,
    Path(id): Path<String>,
) -> Result<Json<OrderDto>, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let id = id.to_lowercase();
    match state.orders.get_by_id(&id).await? {
        Some(order) => Ok(Json(OrderDto::from_entity(&order))),
        None => {
            tracing::error!(%id, "No such Order");
            Err(ApiError::NotFound("No such Order".to_string()))
        }
    }
}

async fn create_order<I, O>(
    State(state): State<AppState<I, O>>,
    ApiJson(body): ApiJson<CreateOrderDto>,
) -> Result<impl IntoResponse, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    if body.address.trim().is_empty() || body.total < Decimal::ZERO {
        tracing::error!("Order data is invalid");
        return Err(ApiError::Invalid("Order data is invalid".to_string()));
    }

    match state.orders.create(body.into_entity()).await {
        Ok(created) => {
            let dto = OrderDto::from_entity(&created);
            let location = format!("/api/orders/{}", dto.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(dto),
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error creating Order");
            Err(ApiError::Invalid("Error creating Order".to_string()))
        }
    }
}

async fn update_order<I, O>(
    State(state): State<AppState<I, O>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateOrderDto>,
) -> Result<Json<OrderDto>, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let id = id.to_lowercase();
    let Some(existing) = state.orders.get_by_id(&id).await? else {
        tracing::error!(%id, "No such Order");
        return Err(ApiError::NotFound("No such Order".to_string()));
    };

    let merged = body.merge(&existing);
    match state.orders.update(&merged).await? {
        Some(updated) => Ok(Json(OrderDto::from_entity(&updated))),
        None => {
            tracing::error!(%id, "No such Order");
            Err(ApiError::NotFound("No such Order".to_string()))
        }
    }
}

async fn delete_order<I, O>(
    State(state): State<AppState<I, O>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    I: Repository<Item>,
    O: Repository<Order>,
{
    let id = id.to_lowercase();
    if state.orders.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::error!(%id, "No such Order");
        Err(ApiError::NotFound("No such Order".to_string()))
    }
}
