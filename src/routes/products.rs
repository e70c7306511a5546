use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;

use crate::{
    dto::products::ProductPayload,
    error::AppResult,
    middleware::{auth::require_api_key, validate::validate_product},
    models::Product,
    response::{ErrorBody, ProductPage, ProductStats},
    routes::params::{ProductQuery, SearchQuery},
    services::product_service,
    state::AppState,
};

pub fn router(state: &AppState) -> Router<AppState> {
    // Authentication runs before validation; a rejected key never reaches the body checks.
    let guarded = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(middleware::from_fn(validate_product));

    Router::new()
        .route("/", get(list_products))
        .route("/", post(create_product).route_layer(guarded.clone()))
        .route("/search", get(search_products))
        .route("/stats", get(product_stats))
        .route("/{id}", get(get_product))
        .route("/{id}", put(update_product).route_layer(guarded))
        .route("/{id}", delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category" = Option<String>, Query, description = "Case-insensitive category filter"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "List products", body = ProductPage)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<ProductPage>> {
    let Query(pairs) = query?;
    let page = product_service::list_products(&state, ProductQuery::from_pairs(pairs))?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/products/search",
    params(
        ("q" = String, Query, description = "Text matched against name and description"),
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, description = "Missing search query", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let Query(pairs) = query?;
    let products = product_service::search_products(&state, SearchQuery::from_pairs(pairs))?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/stats",
    responses(
        (status = 200, description = "Catalog statistics", body = ProductStats)
    ),
    tag = "Products"
)]
pub async fn product_stats(State(state): State<AppState>) -> AppResult<Json<ProductStats>> {
    let stats = product_service::product_stats(&state)?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, &id)?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Create product", body = Product),
        (status = 400, description = "Invalid product", body = ErrorBody),
        (status = 401, description = "Missing or wrong API key", body = ErrorBody),
    ),
    security(("api_key" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(payload): Extension<ProductPayload>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_product(&state, payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid product", body = ErrorBody),
        (status = 401, description = "Missing or wrong API key", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    security(("api_key" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(payload): Extension<ProductPayload>,
) -> AppResult<Json<Product>> {
    let product = product_service::update_product(&state, &id, payload)?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted product"),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
