use uuid::Uuid;

use crate::{
    dto::products::ProductPayload,
    error::{AppError, AppResult},
    models::Product,
    response::{ProductPage, ProductStats},
    routes::params::{ProductQuery, SearchQuery},
    services::query,
    state::AppState,
    store::StoreError,
};

pub fn list_products(state: &AppState, params: ProductQuery) -> AppResult<ProductPage> {
    let (page, limit) = params.pagination.normalize();
    let products = state.store.list_all()?;
    let filtered = query::filter_by_category(products, params.category.as_deref());
    Ok(query::paginate(filtered, page, limit))
}

pub fn get_product(state: &AppState, id: &str) -> AppResult<Product> {
    state
        .store
        .find_by_id(id)?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {id} not found.")))
}

pub fn search_products(state: &AppState, params: SearchQuery) -> AppResult<Vec<Product>> {
    let products = state.store.list_all()?;
    query::search(&products, params.q.as_deref())
}

pub fn product_stats(state: &AppState) -> AppResult<ProductStats> {
    let products = state.store.list_all()?;
    Ok(query::stats(&products))
}

pub fn create_product(state: &AppState, payload: ProductPayload) -> AppResult<Product> {
    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        category: payload.category,
        in_stock: payload.in_stock.unwrap_or(true),
    };
    state.store.insert(product.clone())?;

    tracing::info!(product_id = %product.id, "product created");
    Ok(product)
}

pub fn update_product(state: &AppState, id: &str, payload: ProductPayload) -> AppResult<Product> {
    let existing = state
        .store
        .find_by_id(id)?
        .ok_or_else(|| update_not_found(id))?;

    let product = Product {
        id: existing.id,
        name: payload.name,
        description: payload.description.or(existing.description),
        price: payload.price,
        category: payload.category,
        in_stock: payload.in_stock.unwrap_or(existing.in_stock),
    };
    state
        .store
        .replace(id, product.clone())
        .map_err(|err| match err {
            StoreError::NotFound(_) => update_not_found(id),
            other => other.into(),
        })?;

    tracing::info!(product_id = %product.id, "product updated");
    Ok(product)
}

pub fn delete_product(state: &AppState, id: &str) -> AppResult<()> {
    state.store.remove_by_id(id).map_err(|err| match err {
        StoreError::NotFound(_) => {
            AppError::NotFound(format!("Product with id {id} not found for deletion."))
        }
        other => other.into(),
    })?;

    tracing::info!(product_id = %id, "product deleted");
    Ok(())
}

fn update_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Product with id {id} not found for update."))
}
