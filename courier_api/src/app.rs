use std::sync::Arc;

use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::{Method, Uri};
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::docs::docs_routes;
use crate::error::ApiError;
use crate::ml::routes::ml_routes;
use crate::service::routes::service_routes;
use crate::state::AppState;

/// Builds the HTTP router along with the OpenAPI document describing it.
pub fn build_app(state: Arc<AppState>) -> (Router, OpenApi) {
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .merge(service_routes())
        .nest_api_service("/docs", docs_routes())
        .nest_api_service("/api/ml", ml_routes(state))
        .finish_api_with(&mut api, api_docs)
        .fallback(not_found_handler);

    let app = app
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .layer(Extension(Arc::new(api.clone())));

    (app, api)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Courier Open API")
        .description("Delivery time, shipping cost, demand and route estimates")
}

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {uri}"))
}
