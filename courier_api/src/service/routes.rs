use aide::axum::{ApiRouter, routing::get};

use crate::service::{health::health_handler, root::root_handler};

pub fn service_routes() -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route("/", get(root_handler))
        .api_route("/health", get(health_handler));

    aide::generate::infer_responses(false);

    router
}
