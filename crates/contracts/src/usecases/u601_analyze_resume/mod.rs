pub mod events;
pub mod request;
pub mod response;

pub use events::{FileAnalysisEvent, NotificationEvent, NotificationVariant};
pub use request::AnalysisRequest;
pub use response::AnalyzerError;

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzeResume;

impl UseCaseMetadata for AnalyzeResume {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "analyze_resume"
    }

    fn display_name() -> &'static str {
        "Resume analysis"
    }

    fn description() -> &'static str {
        "Upload a PDF/Word resume and send it to the remote analyzer for a position"
    }
}
