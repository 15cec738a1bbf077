use crate::models::{TrackerStats, TrainingSession};
use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike, Utc};
use std::cmp::Reverse;
use std::collections::HashSet;

pub const RECENT_SESSIONS_LIMIT: usize = 5;

pub fn calculate_tracker_stats(sessions: &[TrainingSession]) -> TrackerStats {
    let mut stats = TrackerStats::default();

    let mut active_dates: HashSet<NaiveDate> = HashSet::new();
    let mut mood_sum: u32 = 0;
    for session in sessions {
        stats.total_minutes = stats.total_minutes.saturating_add(session.duration_minutes);
        mood_sum = mood_sum.saturating_add(session.mood as u32);
        if let Some(date) = local_date(&session.recorded_at) {
            active_dates.insert(date);
        }
    }
    stats.active_days = active_dates.len().try_into().unwrap_or(u32::MAX);

    if !sessions.is_empty() {
        let mean = mood_sum as f32 / sessions.len() as f32;
        stats.average_mood = Some((mean * 10.0).round() / 10.0);
    }

    stats.recent_sessions = recent_sessions(sessions);
    stats
}

pub fn format_recent_timestamp(value: &str) -> Option<String> {
    let local = parse_rfc3339(value)?.with_timezone(&Local);
    Some(format!(
        "{}/{} {}:{:02}",
        local.month(),
        local.day(),
        local.hour(),
        local.minute()
    ))
}

fn recent_sessions(sessions: &[TrainingSession]) -> Vec<TrainingSession> {
    let mut ordered: Vec<TrainingSession> = sessions.to_vec();
    ordered.sort_by_key(|session| Reverse(recorded_instant(&session.recorded_at)));
    ordered.truncate(RECENT_SESSIONS_LIMIT);
    ordered
}

fn recorded_instant(value: &str) -> DateTime<Utc> {
    parse_rfc3339(value).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn local_date(value: &str) -> Option<NaiveDate> {
    parse_rfc3339(value).map(|instant| instant.with_timezone(&Local).date_naive())
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}
