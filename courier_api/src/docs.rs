//! Interactive documentation for the estimator endpoints, served under `/docs`.

use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

const OPENAPI_JSON: &str = "/docs/private/api.json";
const TITLE: &str = "Courier Logistics Estimator";

/// Scalar at `/docs`, Swagger UI at `/docs/swagger` and the raw document they
/// both read at `/docs/private/api.json`.
pub fn docs_routes() -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(OPENAPI_JSON).with_title(TITLE).axum_handler(),
                |op| {
                    op.description(
                        "Reference for the delivery time, shipping cost, demand and route estimators.",
                    )
                },
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(OPENAPI_JSON).with_title(TITLE).axum_handler(),
                |op| op.description("Try the estimator endpoints from the browser."),
            ),
        )
        .route("/private/api.json", get(serve_openapi));

    aide::generate::infer_responses(false);

    router
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
