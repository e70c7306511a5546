//! Field-shape rules applied to product payloads before they reach a handler.

use serde_json::{Map, Value};

pub const NAME_DEFECT: &str = "Name is required and must be at least 3 characters long.";
pub const PRICE_DEFECT: &str = "Price is required and must be a positive number.";
pub const CATEGORY_DEFECT: &str = "Category is required.";
pub const IN_STOCK_DEFECT: &str = "inStock must be a boolean.";
pub const DESCRIPTION_DEFECT: &str = "Description must be a string.";

/// Checks every rule and returns all defects found, in rule order.
///
/// Anything other than a JSON object is checked as if it were `{}`.
pub fn validate(candidate: &Value) -> Vec<String> {
    let empty = Map::new();
    let fields = candidate.as_object().unwrap_or(&empty);
    let mut defects = Vec::new();

    // Length is counted in characters, not bytes or UTF-16 units.
    match fields.get("name") {
        Some(Value::String(name)) if name.chars().count() >= 3 => {}
        _ => defects.push(NAME_DEFECT.to_string()),
    }

    match fields.get("price") {
        Some(Value::Number(price)) if price.as_f64().is_some_and(|p| p > 0.0) => {}
        _ => defects.push(PRICE_DEFECT.to_string()),
    }

    match fields.get("category") {
        Some(Value::String(category)) if !category.is_empty() => {}
        _ => defects.push(CATEGORY_DEFECT.to_string()),
    }

    match fields.get("inStock") {
        None | Some(Value::Bool(_)) => {}
        Some(_) => defects.push(IN_STOCK_DEFECT.to_string()),
    }

    match fields.get("description") {
        None | Some(Value::String(_)) => {}
        Some(_) => defects.push(DESCRIPTION_DEFECT.to_string()),
    }

    defects
}
