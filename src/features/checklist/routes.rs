use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::checklist::handlers;
use crate::features::checklist::services::ChecklistService;

/// Create routes for the checklist feature
pub fn routes(service: Arc<ChecklistService>) -> Router {
    Router::new()
        .route("/api/checklist", get(handlers::get_checklist))
        .with_state(service)
}
