use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::inspections::handlers::{method_not_allowed, send_inspection};
use crate::features::inspections::services::InspectionService;

/// Create routes for the inspections feature
///
/// `max_body_size` bounds the whole multipart body; a larger upload fails
/// while the form is being read.
pub fn routes(service: Arc<InspectionService>, max_body_size: usize) -> Router {
    Router::new()
        .route(
            "/api/sendEmail",
            post(send_inspection)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(service)
}
