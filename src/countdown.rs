pub fn format_timer_display(remaining_seconds: u32) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

pub fn progress_percent(elapsed_seconds: u32, total_seconds: u32) -> f32 {
    if total_seconds == 0 {
        return 100.0;
    }
    let ratio = elapsed_seconds as f32 / total_seconds as f32;
    (ratio * 100.0).min(100.0)
}
