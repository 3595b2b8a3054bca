use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/logout", post(handlers::admin::logout))
        .route("/api/admin/dashboard", get(handlers::admin::dashboard))
        .route("/api/admin/classes", get(handlers::admin::list_classes))
        .route("/api/admin/classes", post(handlers::admin::create_class))
        .route("/api/admin/classes/:id", put(handlers::admin::update_class))
        .route("/api/admin/classes/:id", delete(handlers::admin::delete_class))
        .route(
            "/api/admin/classes/describe",
            post(handlers::admin::describe_class),
        )
        .route("/api/admin/bookings", get(handlers::admin::list_bookings))
        .route(
            "/api/admin/bookings/:id/cancel",
            post(handlers::admin::cancel_booking),
        )
        .route(
            "/api/admin/subscribers",
            get(handlers::admin::subscriber_count),
        )
        .route("/api/admin/broadcast", post(handlers::admin::send_broadcast))
}
