use crate::data_manager::DataError;
use crate::phase_engine::SequenceError;
use crate::session_entry::EntryError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppErrorKind {
    System,
    Data,
    Sequence,
    Input,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppErrorPayload {
    pub kind: AppErrorKind,
    pub message: String,
    pub detail: Option<String>,
    pub recoverable: bool,
}

#[derive(Debug, Clone)]
pub struct AppError {
    kind: AppErrorKind,
    message: String,
    detail: Option<String>,
    recoverable: bool,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>, recoverable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
            recoverable,
        }
    }

    pub fn with_detail(
        kind: AppErrorKind,
        message: impl Into<String>,
        detail: impl Into<String>,
        recoverable: bool,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: Some(detail.into()),
            recoverable,
        }
    }

    pub fn kind(&self) -> AppErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn payload(&self) -> AppErrorPayload {
        AppErrorPayload {
            kind: self.kind,
            message: self.message.clone(),
            detail: self.detail.clone(),
            recoverable: self.recoverable,
        }
    }
}

impl From<SequenceError> for AppError {
    fn from(error: SequenceError) -> Self {
        let detail = error.to_string();
        let message = match error {
            SequenceError::AlreadyRunning => "エクササイズはすでに実行中です",
            SequenceError::NotRunning => "エクササイズが実行されていません",
            SequenceError::InvalidProgram(ref reason) => {
                return Self::with_detail(
                    AppErrorKind::Sequence,
                    translate_invalid_program(reason),
                    detail,
                    true,
                );
            }
        };
        Self::with_detail(AppErrorKind::Sequence, message, detail, true)
    }
}

impl From<DataError> for AppError {
    fn from(error: DataError) -> Self {
        let detail = error.to_string();
        let message = match error {
            DataError::Io(_) => "データの読み書きに失敗しました",
            DataError::Serde(_) => "データ形式の読み込みに失敗しました",
        };
        Self::with_detail(AppErrorKind::Data, message, detail, true)
    }
}

impl From<EntryError> for AppError {
    fn from(error: EntryError) -> Self {
        let detail = error.to_string();
        let message = match error {
            EntryError::DurationNotPositive => "トレーニング時間は1分以上で入力してください",
            EntryError::MoodOutOfRange => "気分は1〜10の範囲で入力してください",
        };
        Self::with_detail(AppErrorKind::Input, message, detail, true)
    }
}

fn translate_invalid_program(reason: &str) -> String {
    match reason {
        "program must have at least one phase" => "フェーズを1つ以上設定してください".to_string(),
        "phase duration must be at least 1 second" => {
            "フェーズ時間は1秒以上にしてください".to_string()
        }
        "tick interval must be at least 1 millisecond" => {
            "更新間隔は1ミリ秒以上にしてください".to_string()
        }
        "repeat count must be at least 1" => "繰り返し回数は1以上にしてください".to_string(),
        "repeat duration must be at least 1 second" => {
            "繰り返し時間は1秒以上にしてください".to_string()
        }
        other => format!("プログラムが無効です: {other}"),
    }
}
