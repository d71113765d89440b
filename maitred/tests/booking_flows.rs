//! End-to-end tests of the create/modify/cancel decision flows.

mod common;

use common::{instant, request_at, setup_engine};
use maitred::{
    CreateOutcome, CreateRequest, Error, ReservationStatus, ReservationUpdate, SuggestionReason,
};
use tempfile::tempdir;

fn confirmed(outcome: CreateOutcome) -> maitred::Reservation {
    match outcome {
        CreateOutcome::Confirmed(reservation) => reservation,
        other => panic!("expected Confirmed, got {other:?}"),
    }
}

#[test]
fn single_table_booking_confirms_with_derived_end() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    // Party of 2 at 19:00 for 90 minutes
    let reservation = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());

    assert_eq!(reservation.start_time(), instant(2024, 5, 1, 19, 0));
    assert_eq!(reservation.end_time(), instant(2024, 5, 1, 20, 30));
    assert_eq!(reservation.status(), ReservationStatus::Confirmed);
}

#[test]
fn overlapping_request_with_no_other_table_is_waitlisted() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());

    let outcome = engine.create(&request_at(2, 19, 30, 60)).unwrap();
    let entry = match outcome {
        CreateOutcome::Waitlisted(entry) => entry,
        other => panic!("expected Waitlisted, got {other:?}"),
    };
    assert_eq!(entry.requested_time(), instant(2024, 5, 1, 19, 30));

    // The waitlist entry is visible, and the ledger holds only the first
    // booking
    assert_eq!(engine.waitlist().unwrap().len(), 1);
    assert_eq!(engine.list(None).unwrap().len(), 1);
}

#[test]
fn allocator_takes_the_only_feasible_table_even_if_larger() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    let small = engine.add_table(1, 2).unwrap();
    let large = engine.add_table(2, 6).unwrap();

    // Occupy the two-seat table
    let first = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());
    assert_eq!(first.table_id(), small.id());

    // The same slot again: only the six-seat table is free
    let second = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());
    assert_eq!(second.table_id(), large.id());
}

#[test]
fn request_past_closing_fails_without_ledger_writes() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    // Ends 23:00 against closing 22:00
    let result = engine.create(&request_at(2, 22, 0, 60));
    assert!(matches!(result, Err(Error::OutOfHours { .. })));

    assert!(engine.list(None).unwrap().is_empty());
    assert!(engine.waitlist().unwrap().is_empty());
}

#[test]
fn friday_peak_rule_caps_duration() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();
    engine
        .add_peak_rule(5, "18:00".parse().unwrap(), "21:00".parse().unwrap(), 60)
        .unwrap();

    // 2024-05-03 is a Friday; 19:00 for 90 minutes exceeds the cap
    let friday = CreateRequest::new(
        "Ada Lovelace",
        "555-0100",
        2,
        instant(2024, 5, 3, 19, 0),
        90,
    );
    let result = engine.create(&friday);
    assert!(matches!(result, Err(Error::PeakLimitExceeded { .. })));

    // The same request inside the cap passes
    let friday_short = CreateRequest::new(
        "Ada Lovelace",
        "555-0100",
        2,
        instant(2024, 5, 3, 19, 0),
        60,
    );
    assert!(matches!(
        engine.create(&friday_short).unwrap(),
        CreateOutcome::Confirmed(_)
    ));
}

#[test]
fn named_table_fallback_suggests_without_booking() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    let small = engine.add_table(1, 2).unwrap();
    let large = engine.add_table(2, 6).unwrap();

    let outcome = engine
        .create(&request_at(4, 19, 0, 90).with_table(small.id()))
        .unwrap();
    match outcome {
        CreateOutcome::Suggestion { reason, alternative } => {
            assert_eq!(reason, SuggestionReason::TooSmall { capacity: 2 });
            assert_eq!(alternative.id(), large.id());
        }
        other => panic!("expected Suggestion, got {other:?}"),
    }

    // A suggestion is advisory; re-submitting with the suggested table
    // books it
    assert!(engine.list(None).unwrap().is_empty());
    let reservation = confirmed(
        engine
            .create(&request_at(4, 19, 0, 90).with_table(large.id()))
            .unwrap(),
    );
    assert_eq!(reservation.table_id(), large.id());
}

#[test]
fn empty_modify_returns_reservation_unchanged() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 2).unwrap();
    engine.add_table(2, 4).unwrap();

    // Seat a party of 2 on the larger table by occupying the smaller one
    confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());
    let on_large = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());

    // Free the smaller table again
    engine
        .cancel(engine.list(None).unwrap()[0].id())
        .unwrap();

    // An empty update must not move the booking to the freed smaller table
    let unchanged = engine
        .modify(on_large.id(), &ReservationUpdate::new())
        .unwrap();
    assert_eq!(unchanged, on_large);
}

#[test]
fn modify_conflict_keeps_original() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    let reservation = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());

    let result = engine.modify(
        reservation.id(),
        &ReservationUpdate::new().with_party_size(8),
    );
    assert!(matches!(result, Err(Error::Conflict { .. })));

    let stored = engine.list(None).unwrap();
    assert_eq!(stored, vec![reservation]);
}

#[test]
fn modify_merges_partial_fields() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    let reservation = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());

    let updated = engine
        .modify(
            reservation.id(),
            &ReservationUpdate::new().with_start_time(instant(2024, 5, 1, 20, 0)),
        )
        .unwrap();

    // Duration re-derived from the current slot; party size retained
    assert_eq!(updated.start_time(), instant(2024, 5, 1, 20, 0));
    assert_eq!(updated.slot().duration_minutes(), 90);
    assert_eq!(updated.party_size(), 2);
}

#[test]
fn cancelled_reservation_frees_the_slot() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    let reservation = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());

    // The slot is taken
    assert!(matches!(
        engine.create(&request_at(2, 19, 0, 90)).unwrap(),
        CreateOutcome::Waitlisted(_)
    ));

    let cancelled = engine.cancel(reservation.id()).unwrap();
    assert_eq!(cancelled.status(), ReservationStatus::Cancelled);

    // The former slot is free again
    assert!(matches!(
        engine.create(&request_at(2, 19, 0, 90)).unwrap(),
        CreateOutcome::Confirmed(_)
    ));
}

#[test]
fn cancel_is_idempotent_and_absent_is_not_found() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    let reservation = confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());
    engine.cancel(reservation.id()).unwrap();

    // Second cancel is a no-op returning the record
    let again = engine.cancel(reservation.id()).unwrap();
    assert_eq!(again.status(), ReservationStatus::Cancelled);

    // Cancelling an id that never existed is an error
    assert!(matches!(
        engine.cancel(9999),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn back_to_back_bookings_share_an_endpoint() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());
    // Starts exactly when the first ends
    let outcome = engine.create(&request_at(2, 20, 30, 60)).unwrap();
    assert!(matches!(outcome, CreateOutcome::Confirmed(_)));
}

#[test]
fn list_filters_by_utc_day() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();

    confirmed(engine.create(&request_at(2, 19, 0, 90)).unwrap());
    let next_day = CreateRequest::new(
        "Grace Hopper",
        "555-0101",
        2,
        instant(2024, 5, 2, 12, 0),
        60,
    );
    confirmed(engine.create(&next_day).unwrap());

    assert_eq!(engine.list(None).unwrap().len(), 2);

    let first = engine
        .list(Some("2024-05-01".parse().unwrap()))
        .unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].start_time(), instant(2024, 5, 1, 19, 0));

    assert!(engine
        .list(Some("2024-05-04".parse().unwrap()))
        .unwrap()
        .is_empty());
}

#[test]
fn confirmed_reservations_on_a_table_stay_disjoint() {
    let dir = tempdir().unwrap();
    let mut engine = setup_engine(dir.path());
    engine.add_table(1, 4).unwrap();
    engine.add_table(2, 4).unwrap();

    // Fire a series of overlapping and touching requests
    for (hour, minute, duration) in [
        (19u32, 0u32, 90u32),
        (19, 30, 60),
        (20, 30, 60),
        (19, 0, 60),
        (20, 0, 90),
    ] {
        let _ = engine.create(&request_at(2, hour, minute, duration)).unwrap();
    }

    // Whatever was confirmed, no two confirmed slots on one table overlap
    let reservations = engine.list(None).unwrap();
    let confirmed: Vec<_> = reservations
        .iter()
        .filter(|r| r.status() == ReservationStatus::Confirmed)
        .collect();
    for a in &confirmed {
        for b in &confirmed {
            if a.id() != b.id() && a.table_id() == b.table_id() {
                assert!(
                    !a.slot().overlaps(&b.slot()),
                    "reservations {} and {} overlap on table {}",
                    a.id(),
                    b.id(),
                    a.table_id()
                );
            }
        }
    }
}
