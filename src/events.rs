use crate::app_error::AppErrorPayload;
use crate::models::TrackerStats;
use serde::Serialize;

pub const BREATHING_PHASE_EVENT: &str = "breathing-phase";
pub const BREATHING_STOPPED_EVENT: &str = "breathing-stopped";
pub const BREATHING_COMPLETED_EVENT: &str = "breathing-completed";
pub const MEDITATION_TICK_EVENT: &str = "meditation-tick";
pub const MEDITATION_STOPPED_EVENT: &str = "meditation-stopped";
pub const MEDITATION_COMPLETED_EVENT: &str = "meditation-completed";
pub const VISUALIZATION_PROMPT_EVENT: &str = "visualization-prompt";
pub const VISUALIZATION_STOPPED_EVENT: &str = "visualization-stopped";
pub const VISUALIZATION_COMPLETED_EVENT: &str = "visualization-completed";
pub const AFFIRMATION_CHANGED_EVENT: &str = "affirmation-changed";
pub const TRACKER_UPDATED_EVENT: &str = "tracker-updated";
pub const APP_ERROR_EVENT: &str = "app-error";

pub trait EventSink {
    fn emit(&self, event: &str, payload: serde_json::Value);
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingPhasePayload {
    pub label: String,
    pub visual_class: Option<String>,
    pub cycle_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationTickPayload {
    pub display: String,
    pub progress_percent: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationPromptPayload {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffirmationPayload {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerUpdatedPayload {
    pub stats: TrackerStats,
}

fn emit_event<S: Serialize>(sink: &dyn EventSink, event: &str, payload: S) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit(event, value),
        Err(err) => eprintln!("Failed to serialize {event}: {err}"),
    }
}

pub fn emit_breathing_phase(sink: &dyn EventSink, payload: BreathingPhasePayload) {
    emit_event(sink, BREATHING_PHASE_EVENT, payload);
}

pub fn emit_breathing_stopped(sink: &dyn EventSink) {
    emit_event(sink, BREATHING_STOPPED_EVENT, ());
}

pub fn emit_breathing_completed(sink: &dyn EventSink) {
    emit_event(sink, BREATHING_COMPLETED_EVENT, ());
}

pub fn emit_meditation_tick(sink: &dyn EventSink, payload: MeditationTickPayload) {
    emit_event(sink, MEDITATION_TICK_EVENT, payload);
}

pub fn emit_meditation_stopped(sink: &dyn EventSink) {
    emit_event(sink, MEDITATION_STOPPED_EVENT, ());
}

pub fn emit_meditation_completed(sink: &dyn EventSink) {
    emit_event(sink, MEDITATION_COMPLETED_EVENT, ());
}

pub fn emit_visualization_prompt(sink: &dyn EventSink, payload: VisualizationPromptPayload) {
    emit_event(sink, VISUALIZATION_PROMPT_EVENT, payload);
}

pub fn emit_visualization_stopped(sink: &dyn EventSink) {
    emit_event(sink, VISUALIZATION_STOPPED_EVENT, ());
}

pub fn emit_visualization_completed(sink: &dyn EventSink) {
    emit_event(sink, VISUALIZATION_COMPLETED_EVENT, ());
}

pub fn emit_affirmation_changed(sink: &dyn EventSink, payload: AffirmationPayload) {
    emit_event(sink, AFFIRMATION_CHANGED_EVENT, payload);
}

pub fn emit_tracker_updated(sink: &dyn EventSink, stats: TrackerStats) {
    emit_event(sink, TRACKER_UPDATED_EVENT, TrackerUpdatedPayload { stats });
}

pub fn emit_app_error(sink: &dyn EventSink, payload: AppErrorPayload) {
    emit_event(sink, APP_ERROR_EVENT, payload);
}
