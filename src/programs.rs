use crate::models::{ExerciseProgram, PhaseDefinition, RepeatMode};

pub const BREATHING_CYCLES: u32 = 4;
pub const BREATHING_TICK_MS: u64 = 4000;
pub const MEDITATION_TICK_MS: u64 = 1000;
pub const VISUALIZATION_TICK_MS: u64 = 8000;

const VISUALIZATION_PROMPTS: [&str; 7] = [
    "あなたは目標を達成した瞬間にいます...",
    "周りの景色や環境を詳しく感じてください...",
    "あなたの体の感覚に注意を向けてください...",
    "達成した時の喜びや満足感を味わってください...",
    "この成功があなたの人生にもたらす変化を感じてください...",
    "あなたはこの目標を達成する力を持っています...",
    "この感覚を心に刻み、日々の行動に活かしましょう...",
];

pub fn breathing_program() -> ExerciseProgram {
    ExerciseProgram {
        name: "呼吸法".to_string(),
        phases: vec![
            phase("吸う", 4, Some("inhale")),
            phase("止める", 7, Some("hold")),
            phase("吐く", 8, Some("exhale")),
        ],
        // Every phase is shown for one fixed tick; the declared durations are
        // not used for scheduling.
        tick_interval_ms: BREATHING_TICK_MS,
        repeat_mode: RepeatMode::Count {
            value: BREATHING_CYCLES,
        },
    }
}

pub fn meditation_program(minutes: u32) -> ExerciseProgram {
    let total_seconds = minutes.saturating_mul(60);
    ExerciseProgram {
        name: "瞑想".to_string(),
        phases: vec![phase("瞑想", total_seconds, None)],
        tick_interval_ms: MEDITATION_TICK_MS,
        repeat_mode: RepeatMode::Duration { total_seconds },
    }
}

pub fn visualization_program() -> ExerciseProgram {
    ExerciseProgram {
        name: "ビジュアライゼーション".to_string(),
        phases: VISUALIZATION_PROMPTS
            .iter()
            .map(|prompt| phase(prompt, 8, Some("prompt-card")))
            .collect(),
        tick_interval_ms: VISUALIZATION_TICK_MS,
        repeat_mode: RepeatMode::Count { value: 1 },
    }
}

fn phase(label: &str, duration_seconds: u32, visual_class: Option<&str>) -> PhaseDefinition {
    PhaseDefinition {
        label: label.to_string(),
        duration_seconds,
        visual_class: visual_class.map(|class| class.to_string()),
    }
}
