use super::api::{HttpAnalyzer, UploaderConfig};
use super::controller::ResumeUploader;
use super::encoder::DataUrlReader;
use super::state::UploadState;
use super::traits::UploaderObserver;
use crate::shared::diagnostics::LogSink;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationCenter;
use contracts::shared::notification::NotificationEvent;
use contracts::usecases::u601_analyze_resume::FileAnalysisEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen::JsCast;

/// Мост между контроллером и реактивным миром Leptos
struct SignalObserver {
    state: RwSignal<UploadState>,
    center: Option<NotificationCenter>,
    on_analysis: Option<Callback<FileAnalysisEvent>>,
    on_notification: Option<Callback<NotificationEvent>>,
}

impl UploaderObserver for SignalObserver {
    fn notification(&self, event: NotificationEvent) {
        if let Some(center) = &self.center {
            center.push(event.clone());
        }
        if let Some(callback) = &self.on_notification {
            callback.run(event);
        }
    }

    fn file_analysis(&self, event: FileAnalysisEvent) {
        if let Some(callback) = &self.on_analysis {
            callback.run(event);
        }
    }

    fn state_changed(&self, state: &UploadState) {
        self.state.set(state.clone());
    }
}

#[component]
pub fn ResumeUploaderWidget(
    /// Идентификатор вакансии, для которой загружается резюме
    #[prop(into)]
    position_id: Signal<String>,
    /// Called once per successful analysis
    #[prop(optional)]
    on_analysis: Option<Callback<FileAnalysisEvent>>,
    /// Every notification, in addition to the NotificationCenter from context
    #[prop(optional)]
    on_notification: Option<Callback<NotificationEvent>>,
    #[prop(optional)]
    config: Option<UploaderConfig>,
) -> impl IntoView {
    let state = RwSignal::new(UploadState::default());
    let (drag_over, set_drag_over) = signal(false);

    let observer = Rc::new(SignalObserver {
        state,
        center: leptos::context::use_context::<NotificationCenter>(),
        on_analysis,
        on_notification,
    });
    let config = config.unwrap_or_default();
    let uploader = ResumeUploader::<web_sys::File>::new(
        Rc::new(DataUrlReader),
        Rc::new(HttpAnalyzer::new(&config)),
        observer,
        Rc::new(LogSink::new("u601_analyze_resume")),
    );
    uploader.connected(&position_id.get_untracked());
    let uploader = StoredValue::new_local(uploader);

    // Выбор файла через диалог
    let handle_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let uploader = uploader.get_value();
        spawn_local(async move {
            let _ = uploader.select_file(file).await;
        });
    };

    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let handle_drag_leave = move |_ev: web_sys::DragEvent| {
        set_drag_over.set(false);
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        let files: Vec<web_sys::File> = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        let uploader = uploader.get_value();
        spawn_local(async move {
            let _ = uploader.drop_files(files).await;
        });
    };

    let handle_analyze = move |_| {
        let uploader = uploader.get_value();
        let position_id = position_id.get_untracked();
        spawn_local(async move {
            let _ = uploader.submit(&position_id).await;
        });
    };

    view! {
        <div class="cv-uploader">
            <div
                class=move || {
                    if drag_over.get() {
                        "cv-uploader__dropzone cv-uploader__dropzone--drag-over"
                    } else {
                        "cv-uploader__dropzone"
                    }
                }
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                <label class="cv-uploader__label" for="cv-uploader-input">
                    {icon("upload")}
                    <span class="cv-uploader__label-text">
                        {move || state.with(|s| s.upload_label().to_string())}
                    </span>
                </label>
                <input
                    id="cv-uploader-input"
                    type="file"
                    accept=".pdf,.doc,.docx"
                    on:change=handle_file_change
                    class="hidden"
                />
                {move || {
                    let s = state.get();
                    if s.is_reading {
                        view! {
                            <div class="cv-uploader__status">
                                <Spinner />
                                " Reading file..."
                            </div>
                        }
                            .into_any()
                    } else if s.has_file() {
                        view! {
                            <div class="cv-uploader__fileinfo">
                                {icon("file")}
                                <strong>{s.file_name.clone()}</strong>
                                {format!(" ({})", s.file_size_label)}
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <span class="cv-uploader__hint">"PDF, DOC or DOCX"</span> }
                            .into_any()
                    }
                }}
            </div>

            <div class="cv-uploader__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_analyze
                    disabled=Signal::derive(move || state.with(|s| s.is_busy()))
                >
                    {icon("search")}
                    {move || {
                        if state.with(|s| s.is_submitting) {
                            " Analyzing..."
                        } else {
                            " Analyze resume"
                        }
                    }}
                </Button>
            </div>
        </div>
    }
}
