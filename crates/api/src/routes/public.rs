use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/studio", get(handlers::public::studio_info))
        .route("/api/classes", get(handlers::public::list_classes))
        .route("/api/classes/:id", get(handlers::public::get_class))
        .route("/api/reservations", post(handlers::public::create_reservation))
        .route("/api/signup", post(handlers::public::signup_email))
}
