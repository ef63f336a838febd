//! Regression coverage for the booking aggregate.

use rstest::rstest;

use super::*;

fn sample_draft(payment_reference: Option<&str>) -> BookingDraft {
    BookingDraft {
        item_id: "mum_001".into(),
        payer_address: "ADDR1".into(),
        price: 0.1,
        payment_reference: payment_reference.map(str::to_owned),
        stay_dates: StayDates {
            check_in: "2026-03-01".parse().expect("valid date"),
            check_out: "2026-03-04".parse().expect("valid date"),
        },
        guest_count: 2,
        guest_name: "Alice".into(),
    }
}

#[test]
fn status_is_escrow_locked_when_reference_present() {
    let booking = Booking::new(sample_draft(Some("TX123"))).expect("valid draft");
    assert_eq!(booking.status(), BookingStatus::EscrowLocked);
    assert_eq!(
        booking.payment_reference().map(ToString::to_string),
        Some("TX123".to_owned())
    );
}

#[test]
fn status_is_pending_when_reference_absent() {
    let booking = Booking::new(sample_draft(None)).expect("valid draft");
    assert_eq!(booking.status(), BookingStatus::Pending);
    assert!(booking.payment_reference().is_none());
}

#[test]
fn each_booking_gets_a_fresh_id() {
    let first = Booking::new(sample_draft(None)).expect("valid draft");
    let second = Booking::new(sample_draft(None)).expect("valid draft");
    assert_ne!(first.id(), second.id());
}

#[rstest]
#[case::empty_item("", "ADDR1", 0.1, BookingValidationError::EmptyItemId)]
#[case::blank_item("   ", "ADDR1", 0.1, BookingValidationError::EmptyItemId)]
#[case::empty_payer("mum_001", "", 0.1, BookingValidationError::EmptyPayerAddress)]
#[case::zero_price("mum_001", "ADDR1", 0.0, BookingValidationError::NonPositivePrice)]
#[case::negative_price("mum_001", "ADDR1", -0.5, BookingValidationError::NonPositivePrice)]
#[case::nan_price("mum_001", "ADDR1", f64::NAN, BookingValidationError::NonPositivePrice)]
fn rejects_invalid_drafts(
    #[case] item_id: &str,
    #[case] payer_address: &str,
    #[case] price: f64,
    #[case] expected: BookingValidationError,
) {
    let draft = BookingDraft {
        item_id: item_id.into(),
        payer_address: payer_address.into(),
        price,
        ..sample_draft(None)
    };
    assert_eq!(Booking::new(draft), Err(expected));
}

#[test]
fn rejects_empty_payment_reference() {
    let error = Booking::new(sample_draft(Some(""))).expect_err("empty reference");
    assert_eq!(error, BookingValidationError::EmptyPaymentReference);
}

#[test]
fn mark_released_is_terminal_and_idempotent() {
    let mut booking = Booking::new(sample_draft(Some("TX123"))).expect("valid draft");
    booking.mark_released();
    assert_eq!(booking.status(), BookingStatus::FundsReleased);
    assert!(booking.status().is_terminal());

    let before = booking.clone();
    booking.mark_released();
    assert_eq!(booking, before);
}

#[test]
fn status_labels_match_the_wire_format() {
    assert_eq!(BookingStatus::Pending.to_string(), "PENDING");
    assert_eq!(BookingStatus::EscrowLocked.to_string(), "ESCROW_LOCKED");
    assert_eq!(BookingStatus::FundsReleased.to_string(), "FUNDS_RELEASED");

    let encoded = serde_json::to_value(BookingStatus::EscrowLocked).expect("serializable status");
    assert_eq!(encoded, serde_json::json!("ESCROW_LOCKED"));
}

#[test]
fn booking_id_parses_and_displays_as_uuid() {
    let id = BookingId::random();
    let parsed: BookingId = id.to_string().parse().expect("round trip");
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<BookingId>().is_err());
}

#[test]
fn lifecycle_states_are_ordered() {
    assert!(BookingStatus::Pending < BookingStatus::EscrowLocked);
    assert!(BookingStatus::EscrowLocked < BookingStatus::FundsReleased);
}
