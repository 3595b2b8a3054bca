use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use seenfit_core::errors::StudioError;
use seenfit_core::models::{
    admin::BroadcastRequest,
    class::{ClassFields, ClassForm},
    outcome::ActionOutcome,
};
use seenfit_db::models::DbClass;
use seenfit_mail::SendStatus;

use crate::test_utils::{sample_booking, sample_class, TestContext};
use seenfit_api::middleware::{auth, error_handling::map_error};

const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

fn valid_form() -> ClassForm {
    ClassForm {
        name: Some("Kickboxing Basics".to_string()),
        class_type: Some("Kickboxing".to_string()),
        instructor: Some("Dana".to_string()),
        description: Some("Gloves provided.".to_string()),
        class_date: Some("2025-06-01".to_string()),
        class_time: Some("18:00".to_string()),
        duration_minutes: Some("45".to_string()),
        capacity: Some("10".to_string()),
        price_dollars: Some("35.00".to_string()),
    }
}

// Mirrors the create-class workflow: validate the form, insert on success.
async fn run_create_class(ctx: &TestContext, form: ClassForm) -> ActionOutcome {
    let fields = match ClassFields::validate(&form) {
        Ok(fields) => fields,
        Err(_) => return ActionOutcome::fail(MSG_MISSING_FIELDS),
    };

    match ctx.class_repo.create_class(fields).await {
        Ok(_) => ActionOutcome::ok("Class added."),
        Err(_) => ActionOutcome::fail("Something went wrong. Please try again."),
    }
}

// Mirrors an admin mutation behind the session guard: the credential is
// checked before any validation or store access.
async fn run_guarded_create_class(
    ctx: &TestContext,
    jar: &CookieJar,
    configured_secret: &str,
    form: ClassForm,
) -> Result<ActionOutcome, StudioError> {
    if !auth::check(jar, configured_secret) {
        return Err(StudioError::Authentication(MSG_SESSION_EXPIRED.to_string()));
    }
    Ok(run_create_class(ctx, form).await)
}

async fn run_cancel_booking(ctx: &TestContext, id: Uuid) -> ActionOutcome {
    match ctx.booking_repo.cancel_booking(id).await {
        Ok(Some(_)) => ActionOutcome::ok("Booking cancelled."),
        Ok(None) => ActionOutcome::fail("Booking not found."),
        Err(_) => ActionOutcome::fail("Something went wrong. Please try again."),
    }
}

// Mirrors the broadcast workflow: validate, load the list, dispatch.
async fn run_broadcast(ctx: &TestContext, payload: BroadcastRequest) -> ActionOutcome {
    let (subject, body) = match payload.validate() {
        Ok(parts) => parts,
        Err(_) => return ActionOutcome::fail("Subject and body are both required."),
    };

    let addresses = match ctx.signup_repo.list_subscriber_emails().await {
        Ok(addresses) => addresses,
        Err(_) => return ActionOutcome::fail("Something went wrong. Please try again."),
    };

    if addresses.is_empty() {
        return ActionOutcome::fail("No subscribers to email yet.");
    }

    let count = addresses.len();
    match ctx.mailer.send_batch(addresses, subject, body).await {
        Ok(SendStatus::Sent) => ActionOutcome::ok(format!(
            "Broadcast sent to {} subscriber{}.",
            count,
            if count == 1 { "" } else { "s" }
        )),
        Ok(SendStatus::Skipped) => ActionOutcome::fail("Email is not configured."),
        Err(_) => ActionOutcome::fail("Something went wrong. Please try again."),
    }
}

#[test]
fn test_session_token_is_deterministic() {
    let first = auth::session_token("studio-secret");
    let second = auth::session_token("studio-secret");

    assert_eq!(first, second);
    // Hex-encoded sha256 digest.
    assert_eq!(first.len(), 64);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_session_token_differs_by_secret() {
    assert_ne!(
        auth::session_token("studio-secret"),
        auth::session_token("other-secret")
    );
}

#[test]
fn test_issue_rejects_wrong_password() {
    assert!(auth::issue("wrong", "studio-secret").is_none());
    assert_eq!(
        auth::issue("studio-secret", "studio-secret"),
        Some(auth::session_token("studio-secret"))
    );
}

#[test]
fn test_check_requires_matching_cookie() {
    let secret = "studio-secret";

    let empty = CookieJar::new();
    assert!(!auth::check(&empty, secret));

    let forged = CookieJar::new().add(Cookie::new(auth::SESSION_COOKIE, "deadbeef"));
    assert!(!auth::check(&forged, secret));

    let valid = CookieJar::new().add(Cookie::new(
        auth::SESSION_COOKIE,
        auth::session_token(secret),
    ));
    assert!(auth::check(&valid, secret));
}

#[test]
fn test_session_cookie_attributes() {
    let cookie = auth::session_cookie(auth::session_token("studio-secret"), true);

    assert_eq!(cookie.name(), auth::SESSION_COOKIE);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
}

#[tokio::test]
async fn test_mutation_without_credential_rejected_before_store() {
    let mut ctx = TestContext::new();

    // No repository call of any kind when the guard fails.
    ctx.class_repo.expect_create_class().times(0);

    let jar = CookieJar::new();
    let err = run_guarded_create_class(&ctx, &jar, "studio-secret", valid_form())
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Authentication(_)));
    assert_eq!(map_error(err).status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutation_with_forged_cookie_rejected_before_store() {
    let mut ctx = TestContext::new();

    ctx.class_repo.expect_create_class().times(0);

    let jar = CookieJar::new().add(Cookie::new(auth::SESSION_COOKIE, "deadbeef"));
    let err = run_guarded_create_class(&ctx, &jar, "studio-secret", valid_form())
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Authentication(_)));
}

#[tokio::test]
async fn test_mutation_with_valid_credential_reaches_store() {
    let mut ctx = TestContext::new();

    ctx.class_repo
        .expect_create_class()
        .times(1)
        .returning(|_| Ok(sample_class(Uuid::new_v4())));

    let jar = CookieJar::new().add(Cookie::new(
        auth::SESSION_COOKIE,
        auth::session_token("studio-secret"),
    ));
    let outcome = run_guarded_create_class(&ctx, &jar, "studio-secret", valid_form())
        .await
        .expect("valid credential must pass the guard");

    assert!(outcome.success);
}

#[tokio::test]
async fn test_create_class_applies_numeric_defaults() {
    let mut ctx = TestContext::new();

    let mut form = valid_form();
    form.duration_minutes = None;
    form.capacity = Some("lots".to_string());
    form.price_dollars = None;

    ctx.class_repo
        .expect_create_class()
        .withf(|fields: &ClassFields| {
            fields.duration_minutes == 60 && fields.capacity == 12 && fields.price_cents == 3500
        })
        .times(1)
        .returning(|fields| {
            let mut class = sample_class(Uuid::new_v4());
            class.name = fields.name;
            Ok(class)
        });

    let outcome = run_create_class(&ctx, form).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "Class added.");
}

#[tokio::test]
async fn test_create_class_price_converted_to_cents() {
    let mut ctx = TestContext::new();

    ctx.class_repo
        .expect_create_class()
        .withf(|fields: &ClassFields| fields.price_cents == 3500 && fields.duration_minutes == 45)
        .times(1)
        .returning(|_| Ok(sample_class(Uuid::new_v4())));

    let outcome = run_create_class(&ctx, valid_form()).await;

    assert!(outcome.success);
    // Round trip back to the label shown on the schedule.
    assert_eq!(seenfit_core::money::price_label(3500), "$35");
}

#[tokio::test]
async fn test_create_class_invalid_form_writes_nothing() {
    let mut ctx = TestContext::new();

    ctx.class_repo.expect_create_class().times(0);

    let mut form = valid_form();
    form.class_date = Some("June 1st".to_string());

    let outcome = run_create_class(&ctx, form).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, MSG_MISSING_FIELDS);
}

#[tokio::test]
async fn test_create_class_missing_name_writes_nothing() {
    let mut ctx = TestContext::new();

    ctx.class_repo.expect_create_class().times(0);

    let mut form = valid_form();
    form.name = None;

    let outcome = run_create_class(&ctx, form).await;

    assert!(!outcome.success);
}

#[tokio::test]
async fn test_cancel_booking_is_idempotent() {
    let mut ctx = TestContext::new();
    let booking_id = Uuid::new_v4();

    ctx.booking_repo
        .expect_cancel_booking()
        .with(predicate::eq(booking_id))
        .times(2)
        .returning(|_| {
            let mut booking = sample_booking(Uuid::new_v4());
            booking.status = "cancelled".to_string();
            booking.cancelled_at = Some(chrono::Utc::now());
            Ok(Some(booking))
        });

    let first = run_cancel_booking(&ctx, booking_id).await;
    let second = run_cancel_booking(&ctx, booking_id).await;

    assert!(first.success);
    assert!(second.success);
    assert_eq!(second.message, "Booking cancelled.");
}

#[tokio::test]
async fn test_cancel_unknown_booking() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_cancel_booking()
        .times(1)
        .returning(|_| Ok(None));

    let outcome = run_cancel_booking(&ctx, Uuid::new_v4()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Booking not found.");
}

#[tokio::test]
async fn test_broadcast_requires_subject_and_body() {
    let mut ctx = TestContext::new();

    ctx.signup_repo.expect_list_subscriber_emails().times(0);
    ctx.mailer.expect_send_batch().times(0);

    let payload = BroadcastRequest {
        subject: Some("June schedule".to_string()),
        body: Some("  ".to_string()),
    };

    let outcome = run_broadcast(&ctx, payload).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Subject and body are both required.");
}

#[tokio::test]
async fn test_broadcast_with_no_subscribers() {
    let mut ctx = TestContext::new();

    ctx.signup_repo
        .expect_list_subscriber_emails()
        .times(1)
        .returning(|| Ok(vec![]));
    ctx.mailer.expect_send_batch().times(0);

    let payload = BroadcastRequest {
        subject: Some("June schedule".to_string()),
        body: Some("New classes are up.".to_string()),
    };

    let outcome = run_broadcast(&ctx, payload).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "No subscribers to email yet.");
}

#[tokio::test]
async fn test_broadcast_reports_recipient_count() {
    let mut ctx = TestContext::new();

    ctx.signup_repo
        .expect_list_subscriber_emails()
        .times(1)
        .returning(|| {
            Ok(vec![
                "a@example.com".to_string(),
                "b@example.com".to_string(),
                "c@example.com".to_string(),
            ])
        });

    ctx.mailer
        .expect_send_batch()
        .withf(|addresses, subject, _| addresses.len() == 3 && subject == "June schedule")
        .times(1)
        .returning(|_, _, _| Ok(SendStatus::Sent));

    let payload = BroadcastRequest {
        subject: Some("June schedule".to_string()),
        body: Some("New classes are up.".to_string()),
    };

    let outcome = run_broadcast(&ctx, payload).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "Broadcast sent to 3 subscribers.");
}

#[tokio::test]
async fn test_broadcast_when_mail_unconfigured() {
    let mut ctx = TestContext::new();

    ctx.signup_repo
        .expect_list_subscriber_emails()
        .times(1)
        .returning(|| Ok(vec!["a@example.com".to_string()]));

    ctx.mailer
        .expect_send_batch()
        .times(1)
        .returning(|_, _, _| Ok(SendStatus::Skipped));

    let payload = BroadcastRequest {
        subject: Some("June schedule".to_string()),
        body: Some("New classes are up.".to_string()),
    };

    let outcome = run_broadcast(&ctx, payload).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Email is not configured.");
}

#[tokio::test]
async fn test_update_missing_class_reports_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    let fields = ClassFields::validate(&valid_form()).unwrap();

    ctx.class_repo
        .expect_update_class()
        .with(predicate::eq(id), predicate::always())
        .times(1)
        .returning(|_, _| Ok(None));

    let outcome: ActionOutcome = match ctx.class_repo.update_class(id, fields).await {
        Ok(Some(_)) => ActionOutcome::ok("Class updated."),
        Ok(None) => ActionOutcome::fail("Class not found."),
        Err(_) => ActionOutcome::fail("Something went wrong. Please try again."),
    };

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Class not found.");
}

#[tokio::test]
async fn test_delete_class_reports_result() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.class_repo
        .expect_delete_class()
        .with(predicate::eq(id))
        .times(1)
        .returning(|_| Ok(true));

    let deleted = ctx.class_repo.delete_class(id).await.unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn test_dashboard_reads_compose() {
    let mut ctx = TestContext::new();

    ctx.class_repo
        .expect_list_upcoming_classes()
        .times(1)
        .returning(|| Ok(vec![sample_class(Uuid::new_v4())]));

    ctx.booking_repo
        .expect_list_bookings()
        .with(predicate::eq(None::<Uuid>))
        .times(1)
        .returning(|_| Ok(vec![]));

    ctx.signup_repo
        .expect_count_subscribers()
        .times(1)
        .returning(|| Ok(7));

    let (classes, bookings, count) = tokio::try_join!(
        ctx.class_repo.list_upcoming_classes(),
        ctx.booking_repo.list_bookings(None),
        ctx.signup_repo.count_subscribers(),
    )
    .unwrap();

    assert_eq!(classes.len(), 1);
    assert!(bookings.is_empty());
    assert_eq!(count, 7);
}

#[test]
fn test_class_row_round_trips_to_session() {
    let class: DbClass = sample_class(Uuid::new_v4());
    let session = seenfit_core::models::class::ClassSession::from(class.clone());

    assert_eq!(session.id, class.id);
    assert_eq!(session.class_type, "Kickboxing");
    assert_eq!(session.price_cents, 3500);
}
