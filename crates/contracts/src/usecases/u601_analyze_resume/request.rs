use serde::{Deserialize, Serialize};

/// Snapshot of an upload, sent to the remote analyzer.
///
/// Built once per submission from the uploader state and the externally
/// supplied position id; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Base64 содержимое файла без префикса data URL
    pub encoded_payload: String,

    /// Имя исходного файла (например, "cv.pdf")
    pub file_name: String,

    /// Opaque identifier of the position the resume is submitted for
    pub position_id: String,
}

impl AnalysisRequest {
    pub fn new(
        encoded_payload: impl Into<String>,
        file_name: impl Into<String>,
        position_id: impl Into<String>,
    ) -> Self {
        Self {
            encoded_payload: encoded_payload.into(),
            file_name: file_name.into(),
            position_id: position_id.into(),
        }
    }
}
