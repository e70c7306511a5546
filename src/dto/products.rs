use serde::Deserialize;
use utoipa::ToSchema;

/// Body of a create or update request once it has passed validation.
///
/// An `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: Option<bool>,
}
