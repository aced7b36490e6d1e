//! JSON-string façade over slot-engine, shared by the `wasm-bindgen` exports.
//!
//! Errors are plain strings so this layer runs (and is tested) off the wasm target.

use serde::Serialize;
use slot_engine::display;
use slot_engine::{
    AddOutcome, DaySchedule, Interval, SlotField, TimeOfDay, Weekday, WeeklySchedule,
};

pub type JsonResult = Result<String, String>;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Result of a mutating call: the next schedule plus the affected slot.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MutationDto<'a> {
    schedule: &'a WeeklySchedule,
    slot: Option<Interval>,
    awaiting_wake_up: bool,
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

fn parse_schedule(json: &str) -> Result<WeeklySchedule, String> {
    WeeklySchedule::from_json(json).map_err(|e| e.to_string())
}

fn parse_interval(json: &str) -> Result<Interval, String> {
    let raw: Interval =
        serde_json::from_str(json).map_err(|e| format!("Invalid interval JSON: {}", e))?;
    Interval::new(raw.start, raw.end).map_err(|e| e.to_string())
}

fn parse_day(day: &str) -> Result<Weekday, String> {
    day.parse().map_err(|e: slot_engine::SlotError| e.to_string())
}

fn parse_time(time: &str) -> Result<TimeOfDay, String> {
    time.parse().map_err(|e: slot_engine::SlotError| e.to_string())
}

/// Range-check `index` here: the engine treats a bad index as a bug and panics.
fn check_index(weekday: Weekday, day: &DaySchedule, index: usize) -> Result<(), String> {
    if index < day.len() {
        Ok(())
    } else {
        Err(format!(
            "{} has no slot {} (it has {} slot(s))",
            weekday,
            index,
            day.len()
        ))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> JsonResult {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn times_json(times: &[TimeOfDay]) -> JsonResult {
    to_json(times)
}

fn mutation(schedule: &WeeklySchedule, slot: Option<Interval>, awaiting_wake_up: bool) -> JsonResult {
    to_json(&MutationDto {
        schedule,
        slot,
        awaiting_wake_up,
    })
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

pub fn empty_schedule() -> JsonResult {
    to_json(&WeeklySchedule::new())
}

pub fn overlaps(a_json: &str, b_json: &str) -> Result<bool, String> {
    let a = parse_interval(a_json)?;
    let b = parse_interval(b_json)?;
    Ok(a.overlaps(&b))
}

pub fn legal_start_times(schedule_json: &str, day: &str, index: usize) -> JsonResult {
    let schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    check_index(weekday, schedule.day(weekday), index)?;
    times_json(&schedule.day(weekday).legal_start_times(index))
}

pub fn legal_end_times(schedule_json: &str, day: &str, index: usize, start: &str) -> JsonResult {
    let schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    let start = parse_time(start)?;
    check_index(weekday, schedule.day(weekday), index)?;
    times_json(&schedule.day(weekday).legal_end_times(index, start))
}

pub fn wake_up_times(schedule_json: &str, day: &str) -> JsonResult {
    let schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    times_json(&schedule.day(weekday).wake_up_times())
}

pub fn add_slot(schedule_json: &str, day: &str) -> JsonResult {
    let mut schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    match schedule.day_mut(weekday).add_slot().map_err(|e| e.to_string())? {
        AddOutcome::AwaitingWakeUp => mutation(&schedule, None, true),
        AddOutcome::Added(slot) => mutation(&schedule, Some(slot), false),
    }
}

pub fn set_wake_up_time(schedule_json: &str, day: &str, time: &str) -> JsonResult {
    let mut schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    let time = parse_time(time)?;
    let slot = schedule
        .day_mut(weekday)
        .set_wake_up_time(time)
        .map_err(|e| e.to_string())?;
    mutation(&schedule, Some(slot), false)
}

pub fn update_slot(schedule_json: &str, day: &str, index: usize, field: &str, time: &str) -> JsonResult {
    let mut schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    let field: SlotField = field.parse().map_err(|e: slot_engine::SlotError| e.to_string())?;
    let time = parse_time(time)?;
    check_index(weekday, schedule.day(weekday), index)?;
    let slot = schedule
        .day_mut(weekday)
        .update_slot(index, field, time)
        .map_err(|e| e.to_string())?;
    mutation(&schedule, Some(slot), false)
}

pub fn remove_slot(schedule_json: &str, day: &str, index: usize) -> JsonResult {
    let mut schedule = parse_schedule(schedule_json)?;
    let weekday = parse_day(day)?;
    check_index(weekday, schedule.day(weekday), index)?;
    let slot = schedule.day_mut(weekday).remove_slot(index);
    mutation(&schedule, Some(slot), false)
}

pub fn layout(interval_json: &str) -> JsonResult {
    let interval = parse_interval(interval_json)?;
    to_json(&interval.layout())
}

pub fn format_time_12h(time: &str) -> JsonResult {
    Ok(display::format_12_hour(parse_time(time)?))
}

pub fn hour_labels() -> JsonResult {
    to_json(&display::hour_labels())
}
