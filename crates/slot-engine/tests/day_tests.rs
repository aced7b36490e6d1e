//! Tests for a single day's slot rules: legal choices, adds, updates and removals.

use slot_engine::{AddOutcome, DaySchedule, Interval, SlotError, SlotField, TimeOfDay};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn slot(start: &str, end: &str) -> Interval {
    Interval::new(t(start), t(end)).unwrap()
}

fn day(slots: &[(&str, &str)]) -> DaySchedule {
    DaySchedule::from_slots(slots.iter().map(|(s, e)| slot(s, e)).collect()).unwrap()
}

fn times(values: &[&str]) -> Vec<TimeOfDay> {
    values.iter().map(|v| t(v)).collect()
}

// ── Wake-up bootstrap ───────────────────────────────────────────────────────

#[test]
fn add_on_empty_day_requests_wake_up() {
    let mut d = DaySchedule::new();
    assert_eq!(d.add_slot().unwrap(), AddOutcome::AwaitingWakeUp);
    assert!(d.is_empty(), "nothing is appended before the wake-up time");
}

#[test]
fn wake_up_sets_first_slot_from_midnight() {
    let mut d = DaySchedule::new();
    let first = d.set_wake_up_time(t("07:00")).unwrap();
    assert_eq!(first, slot("00:00", "07:00"));
    assert_eq!(d.slots(), &[slot("00:00", "07:00")]);
    assert_eq!(d.wake_up_time(), Some(t("07:00")));
}

#[test]
fn wake_up_at_midnight_is_rejected() {
    let mut d = DaySchedule::new();
    assert!(matches!(
        d.set_wake_up_time(t("00:00")),
        Err(SlotError::EmptyInterval { .. })
    ));
    assert!(d.is_empty());
}

#[test]
fn wake_up_only_once() {
    let mut d = day(&[("00:00", "07:00")]);
    assert_eq!(
        d.set_wake_up_time(t("08:00")),
        Err(SlotError::WakeUpAlreadySet("07:00".to_string()))
    );
    assert_eq!(d.len(), 1);
}

#[test]
fn wake_up_choices_on_empty_day() {
    let d = DaySchedule::new();
    let choices = d.wake_up_times();
    assert_eq!(choices.len(), 47, "every grid time except 00:00");
    assert_eq!(choices[0], t("00:30"));
    assert_eq!(choices[46], t("23:30"));
}

#[test]
fn no_wake_up_choices_once_set() {
    let d = day(&[("00:00", "07:00")]);
    assert!(d.wake_up_times().is_empty());
}

// ── Default add ─────────────────────────────────────────────────────────────

#[test]
fn add_appends_block_after_gap() {
    let mut d = day(&[("00:00", "07:00")]);
    let outcome = d.add_slot().unwrap();
    assert_eq!(outcome, AddOutcome::Added(slot("07:30", "08:00")));
    assert_eq!(d.slots(), &[slot("00:00", "07:00"), slot("07:30", "08:00")]);
}

#[test]
fn add_follows_last_slot() {
    let mut d = day(&[("00:00", "07:00"), ("09:00", "12:00")]);
    d.add_slot().unwrap();
    assert_eq!(d.slots()[2], slot("12:30", "13:00"));
}

#[test]
fn add_near_midnight_clamps_end() {
    let mut d = day(&[("00:00", "23:00")]);
    assert_eq!(d.add_slot().unwrap(), AddOutcome::Added(slot("23:30", "23:59")));
}

#[test]
fn add_with_no_room_left_fails() {
    let mut d = day(&[("00:00", "23:30")]);
    assert_eq!(d.add_slot(), Err(SlotError::DayFull("23:30".to_string())));
    assert_eq!(d.len(), 1);
}

// ── Legal choices ───────────────────────────────────────────────────────────

#[test]
fn wake_up_slot_start_is_fixed() {
    let d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    assert_eq!(d.legal_start_times(0), vec![TimeOfDay::MIDNIGHT]);
    assert_eq!(d.min_start(0), TimeOfDay::MIDNIGHT);
}

#[test]
fn second_slot_starts_thirty_minutes_after_wake_up() {
    let d = day(&[("00:00", "07:00"), ("09:00", "12:00")]);
    let starts = d.legal_start_times(1);
    assert_eq!(d.min_start(1), t("07:30"));
    assert_eq!(starts.first(), Some(&t("07:30")));
    assert_eq!(starts.last(), Some(&t("11:30")), "start must stay before the slot's end");
    assert_eq!(starts.len(), 9);
}

#[test]
fn later_slot_start_follows_previous_end() {
    let d = day(&[("00:00", "07:00"), ("08:00", "09:00"), ("11:00", "12:00")]);
    let starts = d.legal_start_times(2);
    assert_eq!(starts, times(&["09:30", "10:00", "10:30", "11:00", "11:30"]));
}

#[test]
fn end_choices_stop_before_next_slot() {
    let d = day(&[("00:00", "07:00"), ("07:30", "08:00"), ("10:00", "11:00")]);
    let ends = d.legal_end_times(1, t("07:30"));
    // 10:00 would touch the next slot
    assert_eq!(ends, times(&["08:00", "08:30", "09:00", "09:30"]));
}

#[test]
fn end_choices_of_last_slot_run_to_end_of_grid() {
    let d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    let ends = d.legal_end_times(1, t("07:30"));
    assert_eq!(ends.first(), Some(&t("08:00")));
    assert_eq!(ends.last(), Some(&t("23:30")));
    assert_eq!(ends.len(), 32);
}

#[test]
fn wake_up_end_choices_respect_next_slot() {
    let d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    let ends = d.legal_end_times(0, TimeOfDay::MIDNIGHT);
    assert_eq!(ends.first(), Some(&t("00:30")));
    assert_eq!(ends.last(), Some(&t("07:00")));
    assert_eq!(ends.len(), 14);
}

#[test]
fn end_choices_strictly_after_start() {
    let d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    assert!(d.legal_end_times(1, t("12:00")).iter().all(|&e| e > t("12:00")));
}

#[test]
fn every_offered_choice_is_accepted() {
    let d = day(&[("00:00", "07:00"), ("08:00", "10:00"), ("13:00", "14:00")]);

    for index in 0..d.len() {
        for start in d.legal_start_times(index) {
            let mut copy = d.clone();
            assert!(
                copy.update_slot(index, SlotField::Start, start).is_ok(),
                "offered start {start} for slot {index} was rejected"
            );
        }
        let current = d.slots()[index];
        for end in d.legal_end_times(index, current.start) {
            let mut copy = d.clone();
            assert!(
                copy.update_slot(index, SlotField::End, end).is_ok(),
                "offered end {end} for slot {index} was rejected"
            );
        }
    }
}

// ── Updates ─────────────────────────────────────────────────────────────────

#[test]
fn end_before_start_rejected_and_day_unchanged() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    let before = d.clone();

    let result = d.update_slot(1, SlotField::End, t("07:15"));

    assert!(matches!(result, Err(SlotError::EmptyInterval { .. })));
    assert_eq!(d, before);
}

#[test]
fn end_touching_next_slot_rejected() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00"), ("09:00", "10:00")]);
    let before = d.clone();

    let result = d.update_slot(1, SlotField::End, t("09:00"));

    assert_eq!(
        result,
        Err(SlotError::OverlapRejected {
            candidate: slot("07:30", "09:00"),
            conflict_index: 2,
            conflict: slot("09:00", "10:00"),
        })
    );
    assert_eq!(d, before);
}

#[test]
fn end_swallowing_next_slot_rejected() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00"), ("09:00", "10:00")]);
    assert!(matches!(
        d.update_slot(1, SlotField::End, t("11:00")),
        Err(SlotError::OverlapRejected { conflict_index: 2, .. })
    ));
}

#[test]
fn start_edits_are_checked_too() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00"), ("09:00", "10:00")]);
    let before = d.clone();

    let result = d.update_slot(2, SlotField::Start, t("08:00"));

    assert!(matches!(
        result,
        Err(SlotError::OverlapRejected { conflict_index: 1, .. })
    ));
    assert_eq!(d, before);
}

#[test]
fn start_past_end_rejected() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    assert!(matches!(
        d.update_slot(1, SlotField::Start, t("08:30")),
        Err(SlotError::EmptyInterval { .. })
    ));
}

#[test]
fn wake_up_slot_start_cannot_move() {
    let mut d = day(&[("00:00", "07:00")]);
    assert_eq!(
        d.update_slot(0, SlotField::Start, t("01:00")),
        Err(SlotError::FixedWakeUpStart)
    );
    assert!(d.update_slot(0, SlotField::Start, TimeOfDay::MIDNIGHT).is_ok());
}

#[test]
fn valid_updates_applied() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);

    assert_eq!(
        d.update_slot(1, SlotField::End, t("09:30")).unwrap(),
        slot("07:30", "09:30")
    );
    assert_eq!(
        d.update_slot(1, SlotField::Start, t("08:00")).unwrap(),
        slot("08:00", "09:30")
    );
    assert_eq!(
        d.update_slot(0, SlotField::End, t("06:30")).unwrap(),
        slot("00:00", "06:30")
    );
    assert_eq!(
        d.slots(),
        &[slot("00:00", "06:30"), slot("08:00", "09:30")]
    );
}

#[test]
fn validate_no_overlap_skips_excluded_slot() {
    let d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    let candidate = slot("07:30", "09:00");
    assert!(d.validate_no_overlap(&candidate, Some(1)).is_ok());
    assert!(d.validate_no_overlap(&candidate, None).is_err());
}

// ── Removal ─────────────────────────────────────────────────────────────────

#[test]
fn remove_shifts_later_slots_down() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00"), ("09:00", "10:00")]);
    let removed = d.remove_slot(1);
    assert_eq!(removed, slot("07:30", "08:00"));
    assert_eq!(d.slots(), &[slot("00:00", "07:00"), slot("09:00", "10:00")]);
}

#[test]
fn removing_wake_up_slot_keeps_the_rest() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    d.remove_slot(0);
    assert_eq!(d.slots(), &[slot("07:30", "08:00")]);
}

#[test]
fn day_without_wake_up_slot_offers_no_wake_up_times() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    d.remove_slot(0);

    assert_eq!(d.wake_up_time(), None);
    assert!(d.wake_up_times().is_empty());
    assert_eq!(d.set_wake_up_time(t("07:00")), Err(SlotError::DayHasSlots(1)));
    assert_eq!(d.slots(), &[slot("07:30", "08:00")]);
}

#[test]
fn first_slot_start_moves_freely_after_wake_up_removed() {
    let mut d = day(&[("00:00", "07:00"), ("07:30", "08:00")]);
    d.remove_slot(0);

    let starts = d.legal_start_times(0);
    assert_eq!(starts.first(), Some(&TimeOfDay::MIDNIGHT));
    assert_eq!(starts.last(), Some(&t("07:30")));
    assert_eq!(starts.len(), 16);

    assert_eq!(
        d.update_slot(0, SlotField::Start, t("07:00")).unwrap(),
        slot("07:00", "08:00")
    );
    assert_eq!(d.wake_up_time(), None);
}

#[test]
fn moving_first_slot_to_midnight_restores_wake_up() {
    let mut d = day(&[("07:30", "08:00")]);
    d.update_slot(0, SlotField::Start, TimeOfDay::MIDNIGHT).unwrap();

    assert_eq!(d.wake_up_time(), Some(t("08:00")));
    assert_eq!(d.legal_start_times(0), vec![TimeOfDay::MIDNIGHT]);
    assert_eq!(
        d.update_slot(0, SlotField::Start, t("01:00")),
        Err(SlotError::FixedWakeUpStart)
    );
}

#[test]
fn removing_only_slot_empties_day() {
    let mut d = day(&[("00:00", "07:00")]);
    d.remove_slot(0);
    assert!(d.is_empty());
    assert_eq!(d.add_slot().unwrap(), AddOutcome::AwaitingWakeUp);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_index_panics() {
    let mut d = day(&[("00:00", "07:00")]);
    d.remove_slot(3);
}

#[test]
#[should_panic(expected = "out of range")]
fn options_for_missing_slot_panic() {
    DaySchedule::new().legal_start_times(0);
}

// ── Validation of loaded data ───────────────────────────────────────────────

#[test]
fn from_slots_rejects_unsorted() {
    let result = DaySchedule::from_slots(vec![slot("09:00", "10:00"), slot("00:00", "07:00")]);
    assert!(matches!(result, Err(SlotError::InvalidSchedule(_))));
}

#[test]
fn from_slots_rejects_touching() {
    let result = DaySchedule::from_slots(vec![slot("00:00", "07:00"), slot("07:00", "08:00")]);
    assert!(matches!(result, Err(SlotError::InvalidSchedule(_))));
}

#[test]
fn from_slots_rejects_empty_interval() {
    let bad = Interval {
        start: t("08:00"),
        end: t("08:00"),
    };
    let result = DaySchedule::from_slots(vec![slot("00:00", "07:00"), bad]);
    assert!(matches!(result, Err(SlotError::InvalidSchedule(_))));
}

#[test]
fn slot_field_parsing() {
    assert_eq!("start".parse::<SlotField>().unwrap(), SlotField::Start);
    assert_eq!("END".parse::<SlotField>().unwrap(), SlotField::End);
    assert!(matches!(
        "middle".parse::<SlotField>(),
        Err(SlotError::InvalidField(_))
    ));
}
