//! Demo host page for the resume uploader
//!
//! Reads `?positionId=...` from the URL, provides the [`NotificationCenter`]
//! and renders the widget next to the notification host.

use crate::shared::notifications::{NotificationCenter, NotificationHost};
use crate::usecases::u601_analyze_resume::ResumeUploaderWidget;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_analyze_resume::{AnalyzeResume, FileAnalysisEvent};
use leptos::prelude::*;
use serde::Deserialize;
use thaw::*;
use web_sys::window;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostQuery {
    #[serde(default)]
    pub position_id: String,
}

/// Параметры страницы из query string (пустые при ошибке разбора)
pub fn parse_host_query(search: &str) -> HostQuery {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotificationCenter::new());

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query = parse_host_query(&search);
    if query.position_id.is_empty() {
        log::warn!("positionId is missing from the page URL");
    }
    let position_id = Signal::stored(query.position_id);

    let (last_analysis, set_last_analysis) = signal(None::<FileAnalysisEvent>);
    let on_analysis = Callback::new(move |event: FileAnalysisEvent| {
        log::info!(
            "fileanalysis: {} for position {}",
            event.file_name,
            event.position_id
        );
        set_last_analysis.set(Some(event));
    });

    view! {
        <ConfigProvider>
            <div class="page">
                <h2 class="page__title">{AnalyzeResume::display_name()}</h2>
                <p class="page__subtitle">{AnalyzeResume::description()}</p>
                <ResumeUploaderWidget position_id=position_id on_analysis=on_analysis />
                {move || last_analysis.get().map(|event| view! {
                    <div class="page__result">
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            "Analyzed"
                        </Badge>
                        {format!(
                            " {} at {}",
                            event.file_name,
                            event.completed_at.format("%H:%M:%S")
                        )}
                    </div>
                })}
            </div>
            <NotificationHost />
        </ConfigProvider>
    }
}
