use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: String,
    pub recorded_at: String,
    pub exercise_type: String,
    pub duration_minutes: u32,
    pub mood: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseDefinition {
    pub label: String,
    pub duration_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgram {
    pub name: String,
    pub phases: Vec<PhaseDefinition>,
    pub tick_interval_ms: u64,
    pub repeat_mode: RepeatMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RepeatMode {
    #[serde(rename = "infinite")]
    Infinite,
    #[serde(rename = "count")]
    Count { value: u32 },
    #[serde(rename = "duration")]
    Duration {
        #[serde(rename = "totalSeconds")]
        total_seconds: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStats {
    pub active_days: u32,
    pub total_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_mood: Option<f32>,
    pub recent_sessions: Vec<TrainingSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub exercise_type: String,
    pub duration_minutes: u32,
    pub mood: u8,
    #[serde(default)]
    pub notes: String,
}
