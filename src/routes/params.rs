use serde::Deserialize;
use utoipa::ToSchema;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// Raw pagination parameters; values that are not integers fall back to the defaults.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64) {
        let page = parse_or(self.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_or(self.limit.as_deref(), DEFAULT_LIMIT);
        (page, limit)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub category: Option<String>,
}

impl ProductQuery {
    /// Builds the query from raw key/value pairs, keeping the first
    /// occurrence of a repeated key and ignoring unknown keys.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.pagination.page,
                "limit" => &mut query.pagination.limit,
                "category" => &mut query.category,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "q").then_some(value)),
        }
    }
}
