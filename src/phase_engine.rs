use crate::models::{ExerciseProgram, PhaseDefinition, RepeatMode};
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum SequenceError {
    AlreadyRunning,
    NotRunning,
    InvalidProgram(String),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::AlreadyRunning => write!(f, "Sequence already running"),
            SequenceError::NotRunning => write!(f, "Sequence not running"),
            SequenceError::InvalidProgram(message) => write!(f, "Invalid program: {message}"),
        }
    }
}

impl std::error::Error for SequenceError {}

#[derive(Debug, PartialEq, Eq)]
pub enum AdvanceResult {
    PhaseAdvanced { phase_index: usize, cycle_index: u32 },
    ProgramCompleted,
}

#[derive(Debug, Default)]
pub struct PhaseEngine {
    program: Option<ExerciseProgram>,
    phase_index: usize,
    cycles_completed: u32,
    ticks_elapsed: u64,
}

impl PhaseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.program.is_some()
    }

    pub fn current_phase(&self) -> Option<&PhaseDefinition> {
        self.program
            .as_ref()
            .and_then(|program| program.phases.get(self.phase_index))
    }

    pub fn phase_index(&self) -> Option<usize> {
        if self.is_running() {
            Some(self.phase_index)
        } else {
            None
        }
    }

    pub fn cycle_index(&self) -> Option<u32> {
        if self.is_running() {
            Some(self.cycles_completed)
        } else {
            None
        }
    }

    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks_elapsed
    }

    pub fn elapsed_seconds(&self) -> u32 {
        let interval_ms = self
            .program
            .as_ref()
            .map(|program| program.tick_interval_ms)
            .unwrap_or(0);
        elapsed_seconds_for(self.ticks_elapsed, interval_ms)
    }

    pub fn tick_interval_ms(&self) -> Option<u64> {
        self.program.as_ref().map(|program| program.tick_interval_ms)
    }

    pub fn repeat_mode(&self) -> Option<&RepeatMode> {
        self.program.as_ref().map(|program| &program.repeat_mode)
    }

    pub fn start(&mut self, program: ExerciseProgram) -> Result<(), SequenceError> {
        if self.is_running() {
            return Err(SequenceError::AlreadyRunning);
        }
        Self::validate_program(&program)?;
        self.phase_index = 0;
        self.cycles_completed = 0;
        self.ticks_elapsed = 0;
        self.program = Some(program);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.program = None;
        self.phase_index = 0;
        self.cycles_completed = 0;
        self.ticks_elapsed = 0;
    }

    pub fn tick(&mut self) -> Result<AdvanceResult, SequenceError> {
        let (phase_count, interval_ms, repeat_mode) = {
            let program = self.program.as_ref().ok_or(SequenceError::NotRunning)?;
            (
                program.phases.len(),
                program.tick_interval_ms,
                program.repeat_mode.clone(),
            )
        };

        self.ticks_elapsed = self.ticks_elapsed.saturating_add(1);

        let mut phase_index = self.phase_index;
        let mut cycles_completed = self.cycles_completed;
        if phase_index + 1 < phase_count {
            phase_index += 1;
        } else {
            phase_index = 0;
            cycles_completed = cycles_completed.saturating_add(1);
        }

        let completed = match repeat_mode {
            RepeatMode::Infinite => false,
            RepeatMode::Count { value } => cycles_completed >= value,
            RepeatMode::Duration { total_seconds } => {
                elapsed_seconds_for(self.ticks_elapsed, interval_ms) >= total_seconds
            }
        };
        if completed {
            self.stop();
            return Ok(AdvanceResult::ProgramCompleted);
        }

        self.phase_index = phase_index;
        self.cycles_completed = cycles_completed;
        Ok(AdvanceResult::PhaseAdvanced {
            phase_index,
            cycle_index: cycles_completed,
        })
    }

    fn validate_program(program: &ExerciseProgram) -> Result<(), SequenceError> {
        if program.phases.is_empty() {
            return Err(SequenceError::InvalidProgram(
                "program must have at least one phase".to_string(),
            ));
        }
        if program.tick_interval_ms == 0 {
            return Err(SequenceError::InvalidProgram(
                "tick interval must be at least 1 millisecond".to_string(),
            ));
        }
        if program.phases.iter().any(|phase| phase.duration_seconds == 0) {
            return Err(SequenceError::InvalidProgram(
                "phase duration must be at least 1 second".to_string(),
            ));
        }
        match &program.repeat_mode {
            RepeatMode::Count { value } if *value == 0 => Err(SequenceError::InvalidProgram(
                "repeat count must be at least 1".to_string(),
            )),
            RepeatMode::Duration { total_seconds } if *total_seconds == 0 => {
                Err(SequenceError::InvalidProgram(
                    "repeat duration must be at least 1 second".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

fn elapsed_seconds_for(ticks: u64, interval_ms: u64) -> u32 {
    ticks
        .saturating_mul(interval_ms)
        .checked_div(1000)
        .unwrap_or(0)
        .min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::{AdvanceResult, PhaseEngine, SequenceError};
    use crate::models::{ExerciseProgram, PhaseDefinition, RepeatMode};

    fn sample_phase(label: &str, duration_seconds: u32) -> PhaseDefinition {
        PhaseDefinition {
            label: label.to_string(),
            duration_seconds,
            visual_class: None,
        }
    }

    fn program_with_phases(phases: Vec<PhaseDefinition>, repeat_mode: RepeatMode) -> ExerciseProgram {
        ExerciseProgram {
            name: "Sample".to_string(),
            phases,
            tick_interval_ms: 1000,
            repeat_mode,
        }
    }

    fn three_phase_program(repeat_mode: RepeatMode) -> ExerciseProgram {
        program_with_phases(
            vec![
                sample_phase("phase-1", 4),
                sample_phase("phase-2", 7),
                sample_phase("phase-3", 8),
            ],
            repeat_mode,
        )
    }

    #[test]
    fn start_positions_at_first_phase() {
        let mut engine = PhaseEngine::new();
        engine
            .start(three_phase_program(RepeatMode::Infinite))
            .expect("start program");

        assert!(engine.is_running());
        assert_eq!(engine.phase_index(), Some(0));
        assert_eq!(engine.cycle_index(), Some(0));
        assert_eq!(engine.current_phase().expect("phase").label, "phase-1");
    }

    #[test]
    fn start_rejects_empty_program() {
        let mut engine = PhaseEngine::new();
        let program = program_with_phases(Vec::new(), RepeatMode::Infinite);
        let err = engine.start(program).expect_err("should fail");
        assert!(matches!(err, SequenceError::InvalidProgram(_)));
    }

    #[test]
    fn start_rejects_zero_tick_interval() {
        let mut engine = PhaseEngine::new();
        let mut program = three_phase_program(RepeatMode::Infinite);
        program.tick_interval_ms = 0;
        let err = engine.start(program).expect_err("should fail");
        assert!(matches!(err, SequenceError::InvalidProgram(_)));
    }

    #[test]
    fn start_rejects_zero_repeat_count() {
        let mut engine = PhaseEngine::new();
        let program = three_phase_program(RepeatMode::Count { value: 0 });
        let err = engine.start(program).expect_err("should fail");
        assert!(matches!(err, SequenceError::InvalidProgram(_)));
    }

    #[test]
    fn second_start_reports_already_running() {
        let mut engine = PhaseEngine::new();
        engine
            .start(three_phase_program(RepeatMode::Infinite))
            .expect("start program");
        let err = engine
            .start(three_phase_program(RepeatMode::Infinite))
            .expect_err("should fail");
        assert_eq!(err, SequenceError::AlreadyRunning);
    }

    #[test]
    fn tick_sequences_phases_and_wraps_cycles() {
        let mut engine = PhaseEngine::new();
        engine
            .start(three_phase_program(RepeatMode::Infinite))
            .expect("start program");

        assert_eq!(
            engine.tick().expect("tick"),
            AdvanceResult::PhaseAdvanced {
                phase_index: 1,
                cycle_index: 0
            }
        );
        assert_eq!(
            engine.tick().expect("tick"),
            AdvanceResult::PhaseAdvanced {
                phase_index: 2,
                cycle_index: 0
            }
        );
        assert_eq!(
            engine.tick().expect("tick"),
            AdvanceResult::PhaseAdvanced {
                phase_index: 0,
                cycle_index: 1
            }
        );
    }

    #[test]
    fn count_mode_completes_after_configured_cycles() {
        let mut engine = PhaseEngine::new();
        engine
            .start(three_phase_program(RepeatMode::Count { value: 4 }))
            .expect("start program");

        let mut advances = 0;
        loop {
            match engine.tick().expect("tick") {
                AdvanceResult::PhaseAdvanced { .. } => advances += 1,
                AdvanceResult::ProgramCompleted => break,
            }
        }

        assert_eq!(advances, 11);
        assert_eq!(engine.ticks_elapsed(), 0);
        assert!(!engine.is_running());
        assert!(matches!(engine.tick(), Err(SequenceError::NotRunning)));
    }

    #[test]
    fn duration_mode_completes_when_total_elapsed() {
        let mut engine = PhaseEngine::new();
        let program = program_with_phases(
            vec![sample_phase("countdown", 60)],
            RepeatMode::Duration { total_seconds: 60 },
        );
        engine.start(program).expect("start program");

        for expected_elapsed in 1..60 {
            let result = engine.tick().expect("tick");
            assert!(matches!(result, AdvanceResult::PhaseAdvanced { .. }));
            assert_eq!(engine.elapsed_seconds(), expected_elapsed);
        }
        assert_eq!(engine.tick().expect("tick"), AdvanceResult::ProgramCompleted);
        assert!(!engine.is_running());
    }

    #[test]
    fn single_pass_completes_after_last_phase() {
        let mut engine = PhaseEngine::new();
        engine
            .start(three_phase_program(RepeatMode::Count { value: 1 }))
            .expect("start program");

        assert!(matches!(
            engine.tick().expect("tick"),
            AdvanceResult::PhaseAdvanced { phase_index: 1, .. }
        ));
        assert!(matches!(
            engine.tick().expect("tick"),
            AdvanceResult::PhaseAdvanced { phase_index: 2, .. }
        ));
        assert_eq!(engine.tick().expect("tick"), AdvanceResult::ProgramCompleted);
    }

    #[test]
    fn stop_mid_sequence_halts_immediately() {
        let mut engine = PhaseEngine::new();
        engine
            .start(three_phase_program(RepeatMode::Count { value: 4 }))
            .expect("start program");
        engine.tick().expect("tick");
        engine.tick().expect("tick");

        engine.stop();
        assert!(!engine.is_running());
        assert!(engine.current_phase().is_none());
        assert!(matches!(engine.tick(), Err(SequenceError::NotRunning)));
    }

    #[test]
    fn stop_is_idempotent_when_not_running() {
        let mut engine = PhaseEngine::new();
        engine.stop();
        engine.stop();
        assert!(!engine.is_running());
    }

    #[test]
    fn elapsed_seconds_follows_tick_interval() {
        let mut engine = PhaseEngine::new();
        let mut program = three_phase_program(RepeatMode::Infinite);
        program.tick_interval_ms = 4000;
        engine.start(program).expect("start program");
        assert_eq!(engine.tick_interval_ms(), Some(4000));

        engine.tick().expect("tick");
        engine.tick().expect("tick");
        engine.tick().expect("tick");
        assert_eq!(engine.elapsed_seconds(), 12);
    }
}
