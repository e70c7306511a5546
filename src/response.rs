use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches `details` only when there is at least one defect.
    pub fn with_details(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            details: (!details.is_empty()).then_some(details),
            ..Self::new(message)
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub total_items: usize,
    pub total_pages: i64,
    pub current_page: i64,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock_count: usize,
    pub count_by_category: BTreeMap<String, usize>,
}
