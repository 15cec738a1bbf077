pub mod affirmations;
pub mod app;
pub mod app_error;
pub mod countdown;
pub mod data_manager;
pub mod events;
pub mod models;
pub mod phase_engine;
pub mod programs;
pub mod session_entry;
pub mod tracker_stats;

pub use app::TrainingApp;
pub use data_manager::DataManager;
pub use events::EventSink;
