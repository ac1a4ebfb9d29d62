use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use catalog_core::EntityId;

use crate::app::dto::{self, ExpensiveProductsQuery, ListProductsQuery, ProductRequest, ProductResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub const BASE_PATH: &str = "/api/products";

pub fn router() -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/", get(list_products).post(create_product))
        .route("/api/products/expensive", get(expensive_products))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    raw.parse::<EntityId>()
        .map_err(|_| ApiError::invalid_argument("invalid product id"))
}

fn parse_body(body: Result<Json<ProductRequest>, JsonRejection>) -> Result<ProductRequest, ApiError> {
    body.map(|Json(req)| req)
        .map_err(|rejection| ApiError::invalid_argument(rejection.body_text()))
}

fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| ApiError::invalid_argument(rejection.body_text()))
}

/// All products, or only those in `?category=` (case-insensitive).
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let query = parse_query(query)?;
    let products = match query.category.as_deref() {
        Some(category) => services.products.get_by_category(Some(category))?,
        None => services.products.list(),
    };
    Ok(Json(dto::products_to_response(products)))
}

/// Products priced above `?threshold=`, most expensive first.
pub async fn expensive_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<ExpensiveProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let query = parse_query(query)?;
    let threshold = query
        .threshold
        .ok_or_else(|| ApiError::invalid_argument("threshold is required"))?;
    Ok(Json(dto::products_to_response(
        services.products.get_expensive(threshold),
    )))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = parse_id(&id)?;
    services
        .products
        .get_by_id(id)
        .map(|p| Json(ProductResponse::from(p)))
        .ok_or_else(ApiError::not_found)
}

/// Create a product; the server assigns its id.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = parse_body(body)?;
    let created = services.products.register(request.into_new_product())?;
    let location = format!("{BASE_PATH}/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(created)),
    )
        .into_response())
}

/// Full replacement of an existing product.
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let request = parse_body(body)?;
    services.products.update(request.into_product(id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    services.products.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
