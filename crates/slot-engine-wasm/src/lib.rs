//! WASM bindings for slot-engine.
//!
//! Exposes legal-time generation, overlap checks, slot edits and grid layout to the
//! browser editor via `wasm-bindgen`. Schedules and intervals cross the boundary as
//! JSON strings in the same shape `WeeklySchedule` serializes to. Mutating exports
//! are stateless: they take the current schedule and return the next one, so the
//! page owns the session state.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

pub mod json;

use wasm_bindgen::prelude::*;

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// A schedule with all seven days empty.
#[wasm_bindgen(js_name = "emptySchedule")]
pub fn empty_schedule() -> Result<String, JsValue> {
    json::empty_schedule().map_err(to_js)
}

/// Inclusive overlap between two `{start, end}` intervals.
#[wasm_bindgen]
pub fn overlaps(a_json: &str, b_json: &str) -> Result<bool, JsValue> {
    json::overlaps(a_json, b_json).map_err(to_js)
}

/// Start times the slot at `index` of `day` may take, as a JSON array of `HH:MM`.
#[wasm_bindgen(js_name = "legalStartTimes")]
pub fn legal_start_times(schedule_json: &str, day: &str, index: u32) -> Result<String, JsValue> {
    json::legal_start_times(schedule_json, day, index as usize).map_err(to_js)
}

/// End times the slot at `index` of `day` may take when it starts at `start`.
#[wasm_bindgen(js_name = "legalEndTimes")]
pub fn legal_end_times(
    schedule_json: &str,
    day: &str,
    index: u32,
    start: &str,
) -> Result<String, JsValue> {
    json::legal_end_times(schedule_json, day, index as usize, start).map_err(to_js)
}

/// Wake-up choices for `day`; empty unless the day has no slots.
#[wasm_bindgen(js_name = "wakeUpTimes")]
pub fn wake_up_times(schedule_json: &str, day: &str) -> Result<String, JsValue> {
    json::wake_up_times(schedule_json, day).map_err(to_js)
}

/// Append a default slot. Returns `{schedule, slot, awaitingWakeUp}`; on an empty
/// day `awaitingWakeUp` is true and the schedule is unchanged.
#[wasm_bindgen(js_name = "addSlot")]
pub fn add_slot(schedule_json: &str, day: &str) -> Result<String, JsValue> {
    json::add_slot(schedule_json, day).map_err(to_js)
}

/// Set the first slot of an empty day to `00:00-time`.
#[wasm_bindgen(js_name = "setWakeUpTime")]
pub fn set_wake_up_time(schedule_json: &str, day: &str, time: &str) -> Result<String, JsValue> {
    json::set_wake_up_time(schedule_json, day, time).map_err(to_js)
}

/// Change the `start` or `end` of a slot. Throws when the change is rejected.
#[wasm_bindgen(js_name = "updateSlot")]
pub fn update_slot(
    schedule_json: &str,
    day: &str,
    index: u32,
    field: &str,
    time: &str,
) -> Result<String, JsValue> {
    json::update_slot(schedule_json, day, index as usize, field, time).map_err(to_js)
}

#[wasm_bindgen(js_name = "removeSlot")]
pub fn remove_slot(schedule_json: &str, day: &str, index: u32) -> Result<String, JsValue> {
    json::remove_slot(schedule_json, day, index as usize).map_err(to_js)
}

/// `{top, height}` in pixels for an interval on the 40 px/hour grid.
#[wasm_bindgen]
pub fn layout(interval_json: &str) -> Result<String, JsValue> {
    json::layout(interval_json).map_err(to_js)
}

/// `07:30` → `7:30 AM`
#[wasm_bindgen(js_name = "formatTime12h")]
pub fn format_time_12h(time: &str) -> Result<String, JsValue> {
    json::format_time_12h(time).map_err(to_js)
}

#[wasm_bindgen(js_name = "hourLabels")]
pub fn hour_labels() -> Result<String, JsValue> {
    json::hour_labels().map_err(to_js)
}
