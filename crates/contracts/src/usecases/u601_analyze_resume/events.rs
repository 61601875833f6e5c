use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::request::AnalysisRequest;

pub use crate::shared::notification::{NotificationEvent, NotificationVariant};

/// Анализ резюме успешно завершён
///
/// Emitted at most once per successful submission, carrying the same fields
/// that were sent to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysisEvent {
    pub encoded_payload: String,
    pub file_name: String,
    pub position_id: String,
    pub completed_at: DateTime<Utc>,
}

impl FileAnalysisEvent {
    pub fn from_request(request: AnalysisRequest, completed_at: DateTime<Utc>) -> Self {
        Self {
            encoded_payload: request.encoded_payload,
            file_name: request.file_name,
            position_id: request.position_id,
            completed_at,
        }
    }

    /// The request this event acknowledges, without the timestamp.
    pub fn request(&self) -> AnalysisRequest {
        AnalysisRequest::new(
            self.encoded_payload.clone(),
            self.file_name.clone(),
            self.position_id.clone(),
        )
    }
}
