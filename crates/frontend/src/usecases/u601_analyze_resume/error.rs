use contracts::shared::notification::NotificationVariant;
use contracts::usecases::u601_analyze_resume::AnalyzerError;
use thiserror::Error;

/// Ошибка чтения файла (FileReader или кодировщик)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EncodeError(pub String);

impl EncodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Everything that can go wrong in the uploader.
///
/// `Display` is the message shown to the user; the uploader has already
/// emitted the matching notification by the time a caller sees the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploaderError {
    #[error("No file selected")]
    NoFile,

    #[error("Please upload PDF or Word documents only")]
    UnsupportedFileType { file_name: String },

    #[error("Failed to read file")]
    ReadFailed(#[source] EncodeError),

    #[error("Please select a file first")]
    MissingPayload,

    #[error("Resume analysis is already in progress")]
    AlreadyInFlight,

    #[error("Failed to analyze resume: {}", .0.message)]
    AnalysisFailed(#[source] AnalyzerError),
}

impl UploaderError {
    pub fn variant(&self) -> NotificationVariant {
        match self {
            UploaderError::MissingPayload => NotificationVariant::Warning,
            UploaderError::AlreadyInFlight => NotificationVariant::Info,
            UploaderError::NoFile
            | UploaderError::UnsupportedFileType { .. }
            | UploaderError::ReadFailed(_)
            | UploaderError::AnalysisFailed(_) => NotificationVariant::Error,
        }
    }
}
