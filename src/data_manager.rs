use crate::models::TrainingSession;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum DataError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(err) => write!(f, "I/O error: {err}"),
            DataError::Serde(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<io::Error> for DataError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

pub type DataResult<T> = Result<T, DataError>;

const SESSIONS_FILE: &str = "mental_training.json";

#[derive(Debug, Clone)]
pub struct DataManager {
    base_dir: PathBuf,
    sessions_path: PathBuf,
}

impl DataManager {
    pub fn new(base_dir: impl Into<PathBuf>) -> DataResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        let sessions_path = base_dir.join(SESSIONS_FILE);

        let manager = Self {
            base_dir,
            sessions_path,
        };

        if !manager.sessions_path.exists() {
            manager.write_json(&manager.sessions_path, &Vec::<TrainingSession>::new())?;
        }

        Ok(manager)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn sessions_path(&self) -> &Path {
        &self.sessions_path
    }

    pub fn load_sessions(&self) -> DataResult<Vec<TrainingSession>> {
        if !self.sessions_path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.sessions_path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&contents) {
            Ok(sessions) => Ok(sessions),
            Err(err) => {
                eprintln!("Stored sessions are unreadable, starting empty: {err}");
                Ok(Vec::new())
            }
        }
    }

    pub fn save_sessions(&self, sessions: &[TrainingSession]) -> DataResult<()> {
        self.write_json(&self.sessions_path, sessions)
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> DataResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("tmp");
        let file = fs::File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        match fs::rename(&temp_path, path) {
            Ok(()) => Ok(()),
            Err(_err) if path.exists() => {
                let _ = fs::remove_file(path);
                fs::rename(&temp_path, path).map_err(DataError::from)
            }
            Err(err) => Err(DataError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataManager;
    use crate::models::TrainingSession;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        dir.push(format!(
            "mindtrain_test_{nanos}_{counter}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn sample_session(id: &str, recorded_at: &str) -> TrainingSession {
        TrainingSession {
            id: id.to_string(),
            recorded_at: recorded_at.to_string(),
            exercise_type: "瞑想".to_string(),
            duration_minutes: 30,
            mood: 8,
            notes: Some("落ち着いた".to_string()),
        }
    }

    #[test]
    fn new_seeds_an_empty_collection() {
        let dir = temp_dir();
        let manager = DataManager::new(&dir).expect("create manager");

        assert!(manager.sessions_path().exists());
        assert!(manager.load_sessions().expect("load sessions").is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_and_load_roundtrip_is_identity() {
        let dir = temp_dir();
        let manager = DataManager::new(&dir).expect("create manager");
        let sessions = vec![
            sample_session("session-1", "2025-01-01T10:00:00Z"),
            sample_session("session-2", "2025-01-02T10:00:00Z"),
        ];

        manager.save_sessions(&sessions).expect("save sessions");
        let loaded = manager.load_sessions().expect("load sessions");
        assert_eq!(loaded, sessions);

        manager.save_sessions(&loaded).expect("save again");
        let reloaded = manager.load_sessions().expect("load again");
        assert_eq!(reloaded, sessions);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn blank_file_loads_empty() {
        let dir = temp_dir();
        let manager = DataManager::new(&dir).expect("create manager");
        fs::write(manager.sessions_path(), "   \n").expect("write blank file");

        assert!(manager.load_sessions().expect("load sessions").is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = temp_dir();
        let manager = DataManager::new(&dir).expect("create manager");
        fs::write(manager.sessions_path(), "{not json").expect("write malformed file");

        assert!(manager.load_sessions().expect("load sessions").is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
