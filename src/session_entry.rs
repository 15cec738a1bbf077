use crate::models::{SessionEntry, TrainingSession};
use chrono::Utc;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const MOOD_MIN: u8 = 1;
pub const MOOD_MAX: u8 = 10;

#[derive(Debug, PartialEq, Eq)]
pub enum EntryError {
    DurationNotPositive,
    MoodOutOfRange,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::DurationNotPositive => write!(f, "duration must be at least 1 minute"),
            EntryError::MoodOutOfRange => write!(f, "mood must be between 1 and 10"),
        }
    }
}

impl std::error::Error for EntryError {}

pub fn build_session(entry: SessionEntry) -> Result<TrainingSession, EntryError> {
    if entry.duration_minutes == 0 {
        return Err(EntryError::DurationNotPositive);
    }
    if !(MOOD_MIN..=MOOD_MAX).contains(&entry.mood) {
        return Err(EntryError::MoodOutOfRange);
    }

    let notes = {
        let trimmed = entry.notes.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    Ok(TrainingSession {
        id: generate_session_id(),
        recorded_at: now_rfc3339(),
        exercise_type: entry.exercise_type,
        duration_minutes: entry.duration_minutes,
        mood: entry.mood,
        notes,
    })
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

fn generate_session_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("session-{nanos}-{}", std::process::id())
}
