use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::ProductPayload,
    middleware::auth::API_KEY_HEADER,
    models::Product,
    response::{ErrorBody, ProductPage, ProductStats},
    routes::{health, params, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::welcome,
        products::list_products,
        products::search_products,
        products::product_stats,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            Product,
            ProductPayload,
            ProductPage,
            ProductStats,
            ErrorBody,
            health::HealthData,
            params::Pagination,
            params::ProductQuery,
            params::SearchQuery,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and welcome endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
