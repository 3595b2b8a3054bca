//! Admin handlers: session issue/revoke, the class lifecycle, booking
//! cancellation, and the mailing-list broadcast.
//!
//! Every operation here runs behind the session guard. An unauthenticated
//! call short-circuits with a 401 before any data access; all other failures
//! fold into `ActionOutcome` messages like the public workflows.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use seenfit_core::{
    errors::StudioError,
    models::{
        admin::{
            BroadcastRequest, DescribeRequest, DescribeResponse, LoginRequest,
            SubscriberCountResponse,
        },
        class::{ClassCommand, ClassFields, ClassForm, ClassSession},
        outcome::ActionOutcome,
    },
};
use seenfit_db::models::DbBookingWithClass;
use seenfit_db::repositories::{booking, class, signup};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ai,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
const MSG_INVALID_PASSWORD: &str = "Invalid password.";
const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
const MSG_TRY_AGAIN: &str = "Something went wrong. Please try again.";

/// The one transport-level error distinction in the API: unauthenticated
/// admin calls get a 401, with no store access attempted.
fn require_admin(jar: &CookieJar, state: &ApiState) -> Result<(), AppError> {
    if auth::check(jar, &state.config.admin_password) {
        Ok(())
    } else {
        Err(AppError(StudioError::Authentication(
            MSG_SESSION_EXPIRED.to_string(),
        )))
    }
}

/// Issues the admin credential cookie when the submitted secret matches.
/// The failure message carries no distinguishing detail.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> (CookieJar, Json<ActionOutcome>) {
    let candidate = payload.password.unwrap_or_default();

    match auth::issue(&candidate, &state.config.admin_password) {
        Some(token) => {
            let cookie = auth::session_cookie(token, state.config.secure_cookies());
            (jar.add(cookie), Json(ActionOutcome::ok("Logged in.")))
        }
        None => (jar, Json(ActionOutcome::fail(MSG_INVALID_PASSWORD))),
    }
}

/// Revokes the credential by clearing the cookie. Nothing is tracked
/// server-side, so this is the whole logout.
#[axum::debug_handler]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ActionOutcome>) {
    (
        jar.remove(auth::removal_cookie()),
        Json(ActionOutcome::ok("Logged out.")),
    )
}

/// Upcoming classes for the admin dashboard.
#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
) -> Result<Json<Vec<ClassSession>>, AppError> {
    require_admin(&jar, &state)?;

    let classes = class::list_upcoming_classes(&state.db_pool).await?;
    Ok(Json(classes.into_iter().map(ClassSession::from).collect()))
}

/// Shared by create and update: validate the form, then run the explicit
/// command. Invalid date/time combinations reject with no write; numeric
/// leniency is handled inside [`ClassFields::validate`].
async fn run_class_command(state: &ApiState, command: ClassCommand) -> ActionOutcome {
    match command {
        ClassCommand::Create(fields) => {
            match class::create_class(&state.db_pool, &fields).await {
                Ok(created) => {
                    tracing::info!("class created: id={}, name={}", created.id, created.name);
                    ActionOutcome::ok("Class added.")
                }
                Err(err) => {
                    tracing::error!("class insert failed: {err:?}");
                    ActionOutcome::fail(MSG_TRY_AGAIN)
                }
            }
        }
        ClassCommand::Update(id, fields) => {
            match class::update_class(&state.db_pool, id, &fields).await {
                Ok(Some(_)) => ActionOutcome::ok("Class updated."),
                Ok(None) => ActionOutcome::fail("Class not found."),
                Err(err) => {
                    tracing::error!("class update failed: {err:?}");
                    ActionOutcome::fail(MSG_TRY_AGAIN)
                }
            }
        }
    }
}

#[axum::debug_handler]
pub async fn create_class(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Json(form): Json<ClassForm>,
) -> Result<Json<ActionOutcome>, AppError> {
    require_admin(&jar, &state)?;

    let fields = match ClassFields::validate(&form) {
        Ok(fields) => fields,
        Err(_) => return Ok(Json(ActionOutcome::fail(MSG_MISSING_FIELDS))),
    };

    Ok(Json(
        run_class_command(&state, ClassCommand::Create(fields)).await,
    ))
}

#[axum::debug_handler]
pub async fn update_class(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
    Json(form): Json<ClassForm>,
) -> Result<Json<ActionOutcome>, AppError> {
    require_admin(&jar, &state)?;

    let fields = match ClassFields::validate(&form) {
        Ok(fields) => fields,
        Err(_) => return Ok(Json(ActionOutcome::fail(MSG_MISSING_FIELDS))),
    };

    Ok(Json(
        run_class_command(&state, ClassCommand::Update(id, fields)).await,
    ))
}

/// Deletes the class; dependent bookings go with it via the store cascade.
#[axum::debug_handler]
pub async fn delete_class(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, AppError> {
    require_admin(&jar, &state)?;

    match class::delete_class(&state.db_pool, id).await {
        Ok(true) => Ok(Json(ActionOutcome::ok("Class deleted."))),
        Ok(false) => Ok(Json(ActionOutcome::fail("Class not found."))),
        Err(err) => {
            tracing::error!("class delete failed: {err:?}");
            Ok(Json(ActionOutcome::fail(MSG_TRY_AGAIN)))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub class_id: Option<Uuid>,
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<DbBookingWithClass>>, AppError> {
    require_admin(&jar, &state)?;

    let bookings = booking::list_bookings(&state.db_pool, query.class_id).await?;
    Ok(Json(bookings))
}

/// Cancels a booking: one-directional status transition plus a cancellation
/// timestamp that sticks. Re-cancelling is harmless.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, AppError> {
    require_admin(&jar, &state)?;

    match booking::cancel_booking(&state.db_pool, id).await {
        Ok(Some(_)) => Ok(Json(ActionOutcome::ok("Booking cancelled."))),
        Ok(None) => Ok(Json(ActionOutcome::fail("Booking not found."))),
        Err(err) => {
            tracing::error!("booking cancel failed: {err:?}");
            Ok(Json(ActionOutcome::fail(MSG_TRY_AGAIN)))
        }
    }
}

#[axum::debug_handler]
pub async fn subscriber_count(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
) -> Result<Json<SubscriberCountResponse>, AppError> {
    require_admin(&jar, &state)?;

    let count = signup::count_subscribers(&state.db_pool).await?;
    Ok(Json(SubscriberCountResponse { count }))
}

/// Everything the admin dashboard renders, with the three independent reads
/// issued concurrently and joined.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub classes: Vec<ClassSession>,
    pub bookings: Vec<DbBookingWithClass>,
    pub subscriber_count: i64,
}

#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
) -> Result<Json<DashboardResponse>, AppError> {
    require_admin(&jar, &state)?;

    let (classes, bookings, subscriber_count) = tokio::try_join!(
        class::list_upcoming_classes(&state.db_pool),
        booking::list_bookings(&state.db_pool, None),
        signup::count_subscribers(&state.db_pool),
    )?;

    Ok(Json(DashboardResponse {
        classes: classes.into_iter().map(ClassSession::from).collect(),
        bookings,
        subscriber_count,
    }))
}

/// Broadcast to the full mailing list. The dispatcher reports an aggregate
/// result only; there is no per-recipient accounting.
#[axum::debug_handler]
pub async fn send_broadcast(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Json(payload): Json<BroadcastRequest>,
) -> Result<Json<ActionOutcome>, AppError> {
    require_admin(&jar, &state)?;

    let (subject, body) = match payload.validate() {
        Ok(parts) => parts,
        Err(_) => {
            return Ok(Json(ActionOutcome::fail(
                "Subject and body are both required.",
            )))
        }
    };

    let addresses = match signup::list_subscriber_emails(&state.db_pool).await {
        Ok(addresses) => addresses,
        Err(err) => {
            tracing::error!("subscriber list load failed: {err:?}");
            return Ok(Json(ActionOutcome::fail(MSG_TRY_AGAIN)));
        }
    };

    if addresses.is_empty() {
        return Ok(Json(ActionOutcome::fail("No subscribers to email yet.")));
    }

    match state.mailer.send_batch(&addresses, &subject, &body).await {
        Ok(seenfit_mail::SendStatus::Sent) => Ok(Json(ActionOutcome::ok(format!(
            "Broadcast sent to {} subscriber{}.",
            addresses.len(),
            if addresses.len() == 1 { "" } else { "s" }
        )))),
        Ok(seenfit_mail::SendStatus::Skipped) => {
            Ok(Json(ActionOutcome::fail("Email is not configured.")))
        }
        Err(err) => {
            tracing::error!("broadcast send failed: {err:?}");
            Ok(Json(ActionOutcome::fail(MSG_TRY_AGAIN)))
        }
    }
}

/// Drafts a class description through the external text-generation gateway.
/// Admin-only convenience; the studio can always type one by hand.
#[axum::debug_handler]
pub async fn describe_class(
    State(state): State<Arc<ApiState>>,
    jar: CookieJar,
    Json(payload): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, AppError> {
    require_admin(&jar, &state)?;

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| StudioError::Validation("Class name and type are required.".into()))?
        .to_string();
    let class_type = payload
        .class_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| StudioError::Validation("Class name and type are required.".into()))?
        .to_string();

    let Some(api_key) = state.config.ai_gateway_api_key.as_deref() else {
        return Err(AppError(StudioError::Unavailable(
            "AI gateway is not configured.".into(),
        )));
    };

    let description = ai::generate_description(api_key, &name, &class_type, &payload)
        .await
        .map_err(|err| {
            tracing::error!("description generation failed: {err:?}");
            StudioError::Unavailable("Failed to generate description.".into())
        })?;

    Ok(Json(DescribeResponse { description }))
}
