//! OpenAPI document for the coffee routes.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee API",
        version = env!("CARGO_PKG_VERSION"),
        description = "CRUD operations on coffee records."
    ),
    paths(
        crate::handlers::coffee::list_coffees,
        crate::handlers::coffee::create_coffee,
        crate::handlers::coffee::get_coffee,
        crate::handlers::coffee::update_coffee,
        crate::handlers::coffee::delete_coffee,
    ),
    components(schemas(
        crate::model::Coffee,
        crate::model::CoffeePayload,
        crate::error::ErrorBody,
        crate::response::ResultBody,
    )),
    tags((name = "Coffee", description = "Coffee records"))
)]
pub struct CoffeeApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    CoffeeApiDoc::openapi()
}
