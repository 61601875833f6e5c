//! Seams between the uploader and the world around it

use super::error::EncodeError;
use super::state::UploadState;
use async_trait::async_trait;
use contracts::shared::notification::NotificationEvent;
use contracts::usecases::u601_analyze_resume::{AnalysisRequest, AnalyzerError, FileAnalysisEvent};

/// Файл, выбранный пользователем (имя и размер в байтах)
pub trait UploadFile {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> u64;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn byte_size(&self) -> u64 {
        self.size() as u64
    }
}

/// Turns a file into a data URL (`"<prefix>,<base64>"`).
#[async_trait(?Send)]
pub trait FileEncoder<F: UploadFile> {
    async fn encode_data_url(&self, file: &F) -> Result<String, EncodeError>;
}

/// Удалённый анализатор резюме
#[async_trait(?Send)]
pub trait Analyzer {
    async fn analyze(&self, request: AnalysisRequest) -> Result<(), AnalyzerError>;
}

/// Receives everything the uploader reports outward.
pub trait UploaderObserver {
    fn notification(&self, event: NotificationEvent);

    fn file_analysis(&self, event: FileAnalysisEvent);

    fn state_changed(&self, _state: &UploadState) {}
}
