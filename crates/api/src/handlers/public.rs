//! Public-facing handlers: the schedule, the reservation workflow, and the
//! mailing-list signup.
//!
//! Every form submission resolves to an [`ActionOutcome`] with a generic,
//! user-correctable message. Store and mail failures are logged with detail
//! server-side and never leak internals to the browser.

use axum::{
    extract::{Path, State},
    Json,
};
use seenfit_core::{
    errors::StudioError,
    models::{
        booking::ReservationRequest, class::ClassSession, outcome::ActionOutcome,
        signup::SignupRequest,
    },
    studio,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use seenfit_db::repositories::{booking, class, signup};
use seenfit_mail::template::{self, ConfirmationDetails};

use crate::{middleware::error_handling::AppError, ApiState};

const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
const MSG_CLASS_GONE: &str = "That class is no longer available.";
const MSG_CLASS_FULL: &str = "That class is full.";
const MSG_TRY_AGAIN: &str = "Something went wrong. Please try again.";
const MSG_RESERVED: &str = "You're reserved! Payment is collected at the start of class.";
const MSG_ON_LIST: &str = "You're on the list! We'll be in touch.";
const MSG_ALREADY_ON_LIST: &str = "You're already on the list! We'll be in touch.";

/// Static studio configuration surfaced to the front end.
#[derive(Debug, Serialize)]
pub struct StudioInfoResponse {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub city: &'static str,
    pub hours: &'static [studio::DayHours],
    pub class_types: &'static [studio::ClassTypeOption],
}

/// Business identity, weekly hours, and the class-type catalog. Compile-time
/// data, so no store access.
#[axum::debug_handler]
pub async fn studio_info() -> Json<StudioInfoResponse> {
    Json(StudioInfoResponse {
        name: studio::STUDIO_NAME,
        tagline: studio::STUDIO_TAGLINE,
        email: studio::STUDIO_EMAIL,
        phone: studio::STUDIO_PHONE,
        city: studio::STUDIO_CITY,
        hours: &studio::WEEKLY_HOURS,
        class_types: &studio::CLASS_TYPES,
    })
}

/// Upcoming classes for the public schedule page.
#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClassSession>>, AppError> {
    let classes = class::list_upcoming_classes(&state.db_pool).await?;

    Ok(Json(classes.into_iter().map(ClassSession::from).collect()))
}

/// One class for the signup page.
#[axum::debug_handler]
pub async fn get_class(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassSession>, AppError> {
    let db_class = class::get_class_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| StudioError::NotFound(format!("Class with ID {} not found", id)))?;

    Ok(Json(db_class.into()))
}

/// The reservation workflow, terminal in one pass:
/// validate, resolve class, persist booking, notify.
///
/// The booking is the authoritative business event; the confirmation email
/// is best-effort and its failure neither rolls the booking back nor changes
/// the reported outcome.
#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ReservationRequest>,
) -> Json<ActionOutcome> {
    // 1. Validate; no side effects on failure.
    let valid = match payload.validate() {
        Ok(valid) => valid,
        Err(_) => return Json(ActionOutcome::fail(MSG_MISSING_FIELDS)),
    };

    // 2. Resolve the class. It may have been deleted between page load and
    //    submission; that fails here, it does not crash.
    let db_class = match class::get_class_by_id(&state.db_pool, valid.class_id).await {
        Ok(Some(db_class)) => db_class,
        Ok(None) => return Json(ActionOutcome::fail(MSG_CLASS_GONE)),
        Err(err) => {
            tracing::error!("class lookup failed for reservation: {err:?}");
            return Json(ActionOutcome::fail(MSG_TRY_AGAIN));
        }
    };

    // 3. Persist the booking. No retry at this layer.
    let booking = if state.config.enforce_capacity {
        match booking::create_booking_if_capacity(
            &state.db_pool,
            db_class.id,
            &valid.name,
            &valid.email,
            valid.phone.as_deref(),
        )
        .await
        {
            Ok(Some(booking)) => booking,
            Ok(None) => return Json(ActionOutcome::fail(MSG_CLASS_FULL)),
            Err(err) => {
                tracing::error!("booking insert failed: {err:?}");
                return Json(ActionOutcome::fail(MSG_TRY_AGAIN));
            }
        }
    } else {
        match booking::create_booking(
            &state.db_pool,
            db_class.id,
            &valid.name,
            &valid.email,
            valid.phone.as_deref(),
        )
        .await
        {
            Ok(booking) => booking,
            Err(err) => {
                tracing::error!("booking insert failed: {err:?}");
                return Json(ActionOutcome::fail(MSG_TRY_AGAIN));
            }
        }
    };

    // 4. Notify, best-effort.
    let details = ConfirmationDetails {
        customer_name: &valid.name,
        class_name: &db_class.name,
        class_type: &db_class.class_type,
        instructor: &db_class.instructor,
        start_time: db_class.start_time,
        duration_minutes: db_class.duration_minutes,
        price_cents: db_class.price_cents,
    };
    let subject = template::confirmation_subject(&db_class.name, db_class.start_time);
    let html = template::confirmation_html(&details);

    if let Err(err) = state.mailer.send_one(&valid.email, &subject, &html).await {
        tracing::warn!(
            "confirmation email failed for booking {}: {err:?}; booking stands",
            booking.id
        );
    }

    Json(ActionOutcome::ok(MSG_RESERVED))
}

/// Mailing-list signup. A duplicate address is an idempotent success.
#[axum::debug_handler]
pub async fn signup_email(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SignupRequest>,
) -> Json<ActionOutcome> {
    let email = match payload.validate() {
        Ok(email) => email,
        Err(_) => return Json(ActionOutcome::fail("Please enter your email.")),
    };

    match signup::insert_signup(&state.db_pool, &email).await {
        Ok(signup::SignupInsert::Inserted) => Json(ActionOutcome::ok(MSG_ON_LIST)),
        Ok(signup::SignupInsert::AlreadySubscribed) => {
            Json(ActionOutcome::ok(MSG_ALREADY_ON_LIST))
        }
        Err(err) => {
            tracing::error!("email signup failed: {err:?}");
            Json(ActionOutcome::fail(MSG_TRY_AGAIN))
        }
    }
}
