use crate::affirmations::AffirmationDeck;
use crate::app_error::AppError;
use crate::countdown;
use crate::data_manager::{DataManager, DataResult};
use crate::events::{
    emit_affirmation_changed, emit_app_error, emit_breathing_completed, emit_breathing_phase,
    emit_breathing_stopped, emit_meditation_completed, emit_meditation_stopped,
    emit_meditation_tick, emit_tracker_updated, emit_visualization_completed,
    emit_visualization_prompt, emit_visualization_stopped, AffirmationPayload,
    BreathingPhasePayload, EventSink, MeditationTickPayload, VisualizationPromptPayload,
};
use crate::models::{RepeatMode, SessionEntry, TrackerStats, TrainingSession};
use crate::phase_engine::{AdvanceResult, PhaseEngine};
use crate::programs;
use crate::session_entry::build_session;
use crate::tracker_stats::calculate_tracker_stats;

#[derive(Debug)]
pub struct TrainingApp {
    data_manager: DataManager,
    sessions: Vec<TrainingSession>,
    breathing: PhaseEngine,
    meditation: PhaseEngine,
    visualization: PhaseEngine,
    affirmations: AffirmationDeck,
}

impl TrainingApp {
    pub fn new(data_manager: DataManager) -> DataResult<Self> {
        let sessions = data_manager.load_sessions()?;
        Ok(Self {
            data_manager,
            sessions,
            breathing: PhaseEngine::new(),
            meditation: PhaseEngine::new(),
            visualization: PhaseEngine::new(),
            affirmations: AffirmationDeck::new(),
        })
    }

    pub fn sessions(&self) -> &[TrainingSession] {
        &self.sessions
    }

    pub fn stats(&self) -> TrackerStats {
        calculate_tracker_stats(&self.sessions)
    }

    pub fn publish_tracker(&self, sink: &dyn EventSink) {
        emit_tracker_updated(sink, self.stats());
    }

    pub fn toggle_breathing(&mut self, sink: &dyn EventSink) -> Result<(), String> {
        if self.breathing.is_running() {
            self.breathing.stop();
            emit_breathing_stopped(sink);
            return Ok(());
        }
        self.breathing
            .start(programs::breathing_program())
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        if let Some(payload) = breathing_payload(&self.breathing) {
            emit_breathing_phase(sink, payload);
        }
        Ok(())
    }

    pub fn tick_breathing(&mut self, sink: &dyn EventSink) -> Result<(), String> {
        let result = self
            .breathing
            .tick()
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        match result {
            AdvanceResult::PhaseAdvanced { .. } => {
                if let Some(payload) = breathing_payload(&self.breathing) {
                    emit_breathing_phase(sink, payload);
                }
            }
            AdvanceResult::ProgramCompleted => emit_breathing_completed(sink),
        }
        Ok(())
    }

    pub fn toggle_meditation(&mut self, minutes: u32, sink: &dyn EventSink) -> Result<(), String> {
        if self.meditation.is_running() {
            self.meditation.stop();
            emit_meditation_stopped(sink);
            return Ok(());
        }
        self.meditation
            .start(programs::meditation_program(minutes))
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        if let Some(payload) = meditation_payload(&self.meditation) {
            emit_meditation_tick(sink, payload);
        }
        Ok(())
    }

    pub fn tick_meditation(&mut self, sink: &dyn EventSink) -> Result<(), String> {
        let result = self
            .meditation
            .tick()
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        match result {
            AdvanceResult::PhaseAdvanced { .. } => {
                if let Some(payload) = meditation_payload(&self.meditation) {
                    emit_meditation_tick(sink, payload);
                }
            }
            AdvanceResult::ProgramCompleted => emit_meditation_completed(sink),
        }
        Ok(())
    }

    pub fn toggle_visualization(&mut self, sink: &dyn EventSink) -> Result<(), String> {
        if self.visualization.is_running() {
            self.visualization.stop();
            emit_visualization_stopped(sink);
            return Ok(());
        }
        self.visualization
            .start(programs::visualization_program())
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        if let Some(payload) = prompt_payload(&self.visualization) {
            emit_visualization_prompt(sink, payload);
        }
        Ok(())
    }

    pub fn tick_visualization(&mut self, sink: &dyn EventSink) -> Result<(), String> {
        let result = self
            .visualization
            .tick()
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        match result {
            AdvanceResult::PhaseAdvanced { .. } => {
                if let Some(payload) = prompt_payload(&self.visualization) {
                    emit_visualization_prompt(sink, payload);
                }
            }
            AdvanceResult::ProgramCompleted => emit_visualization_completed(sink),
        }
        Ok(())
    }

    pub fn next_affirmation(&mut self, sink: &dyn EventSink) {
        let text = self.affirmations.advance().to_string();
        emit_affirmation_changed(sink, AffirmationPayload { text });
    }

    pub fn record_session(
        &mut self,
        entry: SessionEntry,
        sink: &dyn EventSink,
    ) -> Result<TrainingSession, String> {
        let session =
            build_session(entry).map_err(|err| report_error(sink, AppError::from(err)))?;
        self.sessions.push(session.clone());
        self.data_manager
            .save_sessions(&self.sessions)
            .map_err(|err| report_error(sink, AppError::from(err)))?;
        emit_tracker_updated(sink, self.stats());
        Ok(session)
    }
}

fn breathing_payload(engine: &PhaseEngine) -> Option<BreathingPhasePayload> {
    let phase = engine.current_phase()?;
    let cycle_index = engine.cycle_index()?;
    Some(BreathingPhasePayload {
        label: phase.label.clone(),
        visual_class: phase.visual_class.clone(),
        cycle_text: format!("サイクル {}/{}", cycle_index + 1, programs::BREATHING_CYCLES),
    })
}

fn meditation_payload(engine: &PhaseEngine) -> Option<MeditationTickPayload> {
    let total_seconds = match engine.repeat_mode()? {
        RepeatMode::Duration { total_seconds } => *total_seconds,
        _ => return None,
    };
    let elapsed = engine.elapsed_seconds();
    let remaining = total_seconds.saturating_sub(elapsed);
    Some(MeditationTickPayload {
        display: countdown::format_timer_display(remaining),
        progress_percent: countdown::progress_percent(elapsed, total_seconds),
    })
}

fn prompt_payload(engine: &PhaseEngine) -> Option<VisualizationPromptPayload> {
    engine.current_phase().map(|phase| VisualizationPromptPayload {
        text: phase.label.clone(),
    })
}

fn report_error(sink: &dyn EventSink, error: AppError) -> String {
    emit_app_error(sink, error.payload());
    if let Some(detail) = error.detail() {
        eprintln!("App error ({:?}): {detail}", error.kind());
    } else {
        eprintln!("App error ({:?}): {}", error.kind(), error.message());
    }
    error.message().to_string()
}
