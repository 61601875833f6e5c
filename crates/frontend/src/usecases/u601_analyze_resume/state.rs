use serde::{Deserialize, Serialize};

/// Подпись зоны загрузки, пока файл не выбран
pub const EMPTY_UPLOAD_LABEL: &str = "Drop your PDF here or click to browse";

/// Состояние загрузчика резюме
///
/// `encoded_payload` is non-empty only after a successful read. A new read
/// overwrites the file fields as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadState {
    pub file_name: String,
    pub file_size_label: String,
    pub encoded_payload: String,
    pub is_reading: bool,
    pub is_submitting: bool,
}

impl UploadState {
    pub fn has_file(&self) -> bool {
        !self.encoded_payload.is_empty()
    }

    pub fn upload_label(&self) -> &str {
        if self.file_name.is_empty() {
            EMPTY_UPLOAD_LABEL
        } else {
            &self.file_name
        }
    }

    pub fn is_busy(&self) -> bool {
        self.is_reading || self.is_submitting
    }
}
