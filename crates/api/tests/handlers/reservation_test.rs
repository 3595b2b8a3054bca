use mockall::predicate;
use pretty_assertions::assert_eq;
use seenfit_core::models::{booking::ReservationRequest, outcome::ActionOutcome};
use seenfit_mail::template::{self, ConfirmationDetails};
use seenfit_mail::SendStatus;
use uuid::Uuid;

use crate::test_utils::{sample_booking, sample_class, TestContext};

const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
const MSG_CLASS_GONE: &str = "That class is no longer available.";
const MSG_CLASS_FULL: &str = "That class is full.";
const MSG_RESERVED: &str = "You're reserved! Payment is collected at the start of class.";

// Mirrors the reservation workflow against the mock repositories: validate,
// resolve class, persist booking, then the best-effort confirmation email.
async fn run_reservation(
    ctx: &TestContext,
    enforce_capacity: bool,
    payload: ReservationRequest,
) -> ActionOutcome {
    let valid = match payload.validate() {
        Ok(valid) => valid,
        Err(_) => return ActionOutcome::fail(MSG_MISSING_FIELDS),
    };

    let db_class = match ctx.class_repo.get_class_by_id(valid.class_id).await {
        Ok(Some(db_class)) => db_class,
        Ok(None) => return ActionOutcome::fail(MSG_CLASS_GONE),
        Err(_) => return ActionOutcome::fail("Something went wrong. Please try again."),
    };

    let booking = if enforce_capacity {
        match ctx
            .booking_repo
            .create_booking_if_capacity(
                db_class.id,
                valid.name.clone(),
                valid.email.clone(),
                valid.phone.clone(),
            )
            .await
        {
            Ok(Some(booking)) => booking,
            Ok(None) => return ActionOutcome::fail(MSG_CLASS_FULL),
            Err(_) => return ActionOutcome::fail("Something went wrong. Please try again."),
        }
    } else {
        match ctx
            .booking_repo
            .create_booking(
                db_class.id,
                valid.name.clone(),
                valid.email.clone(),
                valid.phone.clone(),
            )
            .await
        {
            Ok(booking) => booking,
            Err(_) => return ActionOutcome::fail("Something went wrong. Please try again."),
        }
    };

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

    // Logged and ignored in the real handler; the booking stands.
    let _ = ctx.mailer.send_one(valid.email, subject, html).await;
    let _ = booking;

    ActionOutcome::ok(MSG_RESERVED)
}

fn valid_request(class_id: Uuid) -> ReservationRequest {
    ReservationRequest {
        class_id: Some(class_id.to_string()),
        name: Some("Jordan Reyes".to_string()),
        email: Some("jordan@example.com".to_string()),
        phone: Some("555-0100".to_string()),
    }
}

#[tokio::test]
async fn test_reservation_success_sends_confirmation() {
    let mut ctx = TestContext::new();
    let class_id = Uuid::new_v4();
    let class = sample_class(class_id);

    ctx.class_repo
        .expect_get_class_by_id()
        .with(predicate::eq(class_id))
        .times(1)
        .returning(move |id| Ok(Some(sample_class(id))));

    ctx.booking_repo
        .expect_create_booking()
        .times(1)
        .returning(|class_id, _, _, _| Ok(sample_booking(class_id)));

    let expected_subject = template::confirmation_subject(&class.name, class.start_time);
    ctx.mailer
        .expect_send_one()
        .withf(move |to, subject, html| {
            to == "jordan@example.com"
                && subject == &expected_subject
                && html.contains("Kickboxing Basics")
        })
        .times(1)
        .returning(|_, _, _| Ok(SendStatus::Sent));

    let outcome = run_reservation(&ctx, false, valid_request(class_id)).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, MSG_RESERVED);
}

#[tokio::test]
async fn test_reservation_succeeds_when_email_fails() {
    let mut ctx = TestContext::new();
    let class_id = Uuid::new_v4();

    ctx.class_repo
        .expect_get_class_by_id()
        .times(1)
        .returning(move |id| Ok(Some(sample_class(id))));

    ctx.booking_repo
        .expect_create_booking()
        .times(1)
        .returning(|class_id, _, _, _| Ok(sample_booking(class_id)));

    // Mail provider down. The booking is already persisted and the customer
    // still sees a success.
    ctx.mailer
        .expect_send_one()
        .times(1)
        .returning(|_, _, _| Err(eyre::eyre!("provider returned 500")));

    let outcome = run_reservation(&ctx, false, valid_request(class_id)).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, MSG_RESERVED);
}

#[tokio::test]
async fn test_reservation_class_deleted_between_load_and_submit() {
    let mut ctx = TestContext::new();
    let class_id = Uuid::new_v4();

    ctx.class_repo
        .expect_get_class_by_id()
        .with(predicate::eq(class_id))
        .times(1)
        .returning(|_| Ok(None));

    // No booking insert and no email once the class is gone.
    ctx.booking_repo.expect_create_booking().times(0);
    ctx.mailer.expect_send_one().times(0);

    let outcome = run_reservation(&ctx, false, valid_request(class_id)).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, MSG_CLASS_GONE);
}

#[tokio::test]
async fn test_reservation_missing_fields_has_no_side_effects() {
    let mut ctx = TestContext::new();

    ctx.class_repo.expect_get_class_by_id().times(0);
    ctx.booking_repo.expect_create_booking().times(0);
    ctx.mailer.expect_send_one().times(0);

    let payload = ReservationRequest {
        class_id: Some(Uuid::new_v4().to_string()),
        name: Some("   ".to_string()),
        email: None,
        phone: None,
    };

    let outcome = run_reservation(&ctx, false, payload).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, MSG_MISSING_FIELDS);
}

#[tokio::test]
async fn test_reservation_malformed_class_id_rejected() {
    let ctx = TestContext::new();

    let payload = ReservationRequest {
        class_id: Some("not-a-uuid".to_string()),
        name: Some("Jordan Reyes".to_string()),
        email: Some("jordan@example.com".to_string()),
        phone: None,
    };

    let outcome = run_reservation(&ctx, false, payload).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, MSG_MISSING_FIELDS);
}

#[tokio::test]
async fn test_reservation_full_class_rejected_when_enforcing() {
    let mut ctx = TestContext::new();
    let class_id = Uuid::new_v4();

    ctx.class_repo
        .expect_get_class_by_id()
        .times(1)
        .returning(move |id| Ok(Some(sample_class(id))));

    ctx.booking_repo
        .expect_create_booking_if_capacity()
        .times(1)
        .returning(|_, _, _, _| Ok(None));

    ctx.mailer.expect_send_one().times(0);

    let outcome = run_reservation(&ctx, true, valid_request(class_id)).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, MSG_CLASS_FULL);
}

#[tokio::test]
async fn test_reservation_capacity_insert_used_when_enforcing() {
    let mut ctx = TestContext::new();
    let class_id = Uuid::new_v4();

    ctx.class_repo
        .expect_get_class_by_id()
        .times(1)
        .returning(move |id| Ok(Some(sample_class(id))));

    // The conditional insert is the only write path under enforcement.
    ctx.booking_repo
        .expect_create_booking_if_capacity()
        .times(1)
        .returning(|class_id, _, _, _| Ok(Some(sample_booking(class_id))));
    ctx.booking_repo.expect_create_booking().times(0);

    ctx.mailer
        .expect_send_one()
        .times(1)
        .returning(|_, _, _| Ok(SendStatus::Sent));

    let outcome = run_reservation(&ctx, true, valid_request(class_id)).await;

    assert!(outcome.success);
}

#[tokio::test]
async fn test_overbooking_allowed_when_not_enforcing() {
    // Capacity is advisory by default: two submissions against a one-seat
    // class both succeed because the plain insert never checks the count.
    let mut ctx = TestContext::new();
    let class_id = Uuid::new_v4();

    ctx.class_repo
        .expect_get_class_by_id()
        .times(2)
        .returning(move |id| {
            let mut class = sample_class(id);
            class.capacity = 1;
            Ok(Some(class))
        });

    ctx.booking_repo
        .expect_create_booking()
        .times(2)
        .returning(|class_id, _, _, _| Ok(sample_booking(class_id)));

    ctx.mailer
        .expect_send_one()
        .times(2)
        .returning(|_, _, _| Ok(SendStatus::Sent));

    let first = run_reservation(&ctx, false, valid_request(class_id)).await;
    let second = run_reservation(&ctx, false, valid_request(class_id)).await;

    assert!(first.success);
    assert!(second.success);
}
