//! Uploader state machine
//!
//! `Empty -> Reading -> Ready -> Submitting -> Ready`. A failed read leaves the
//! previous file in place; a finished submission keeps the payload so the
//! same file can be sent again.
//!
//! Reads are latest-selection-wins: every read takes a generation ticket and
//! a read that completes after a newer one started is dropped. Submissions are
//! single-flight: `submit` while another is pending is refused.

use super::error::UploaderError;
use super::intake::{format_file_size, is_allowed_file, payload_preview, strip_data_url_prefix};
use super::notifier::NotificationEmitter;
use super::state::UploadState;
use super::traits::{Analyzer, FileEncoder, UploadFile, UploaderObserver};
use crate::shared::diagnostics::DiagnosticSink;
use chrono::Utc;
use contracts::shared::notification::NotificationVariant;
use contracts::usecases::u601_analyze_resume::{AnalysisRequest, FileAnalysisEvent};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const SUCCESS_MESSAGE: &str = "Resume analysis completed";

/// Чем закончилось чтение файла
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Payload stored in the state
    Loaded,
    /// A newer selection started while this file was being read
    Superseded,
}

pub struct ResumeUploader<F: UploadFile + 'static> {
    state: Rc<RefCell<UploadState>>,
    read_generation: Rc<Cell<u64>>,
    encoder: Rc<dyn FileEncoder<F>>,
    analyzer: Rc<dyn Analyzer>,
    observer: Rc<dyn UploaderObserver>,
    notifier: NotificationEmitter,
    sink: Rc<dyn DiagnosticSink>,
}

impl<F: UploadFile + 'static> Clone for ResumeUploader<F> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            read_generation: self.read_generation.clone(),
            encoder: self.encoder.clone(),
            analyzer: self.analyzer.clone(),
            observer: self.observer.clone(),
            notifier: self.notifier.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<F: UploadFile + 'static> ResumeUploader<F> {
    pub fn new(
        encoder: Rc<dyn FileEncoder<F>>,
        analyzer: Rc<dyn Analyzer>,
        observer: Rc<dyn UploaderObserver>,
        sink: Rc<dyn DiagnosticSink>,
    ) -> Self {
        let notifier = NotificationEmitter::new(observer.clone(), sink.clone());
        Self {
            state: Rc::new(RefCell::new(UploadState::default())),
            read_generation: Rc::new(Cell::new(0)),
            encoder,
            analyzer,
            observer,
            notifier,
            sink,
        }
    }

    /// Called once the widget is mounted.
    pub fn connected(&self, position_id: &str) {
        self.sink.info(&format!(
            "CV uploader initialized with position id: {}",
            position_id
        ));
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    /// Picker path: no extension check.
    pub async fn select_file(&self, file: Option<F>) -> Result<IntakeOutcome, UploaderError> {
        let Some(file) = file else {
            return Err(self.fail(UploaderError::NoFile));
        };
        self.read_file(file).await
    }

    /// Drag-and-drop path: only the first file is used and it must be PDF/Word.
    pub async fn drop_files(&self, files: Vec<F>) -> Result<IntakeOutcome, UploaderError> {
        let Some(file) = files.into_iter().next() else {
            return Err(self.fail(UploaderError::NoFile));
        };

        let file_name = file.file_name();
        if !is_allowed_file(&file_name) {
            self.sink
                .warn(&format!("Rejected dropped file with unsupported type: {}", file_name));
            return Err(self.fail(UploaderError::UnsupportedFileType { file_name }));
        }

        self.read_file(file).await
    }

    async fn read_file(&self, file: F) -> Result<IntakeOutcome, UploaderError> {
        let ticket = self.read_generation.get() + 1;
        self.read_generation.set(ticket);
        self.update(|state| state.is_reading = true);

        let result = self.encoder.encode_data_url(&file).await;

        if self.read_generation.get() != ticket {
            self.sink.debug(&format!(
                "Discarding read of {}: a newer file was selected",
                file.file_name()
            ));
            return Ok(IntakeOutcome::Superseded);
        }

        match result {
            Ok(data_url) => {
                let payload = strip_data_url_prefix(&data_url).to_string();
                let file_name = file.file_name();
                let size = file.byte_size();

                self.sink.debug(&format!(
                    "File converted to base64: name={}, size={}, payload_len={}, preview={}",
                    file_name,
                    size,
                    payload.len(),
                    payload_preview(&payload)
                ));

                self.update(|state| {
                    state.encoded_payload = payload;
                    state.file_name = file_name;
                    state.file_size_label = format_file_size(size);
                    state.is_reading = false;
                });
                Ok(IntakeOutcome::Loaded)
            }
            Err(e) => {
                self.sink
                    .error(&format!("Failed to read {}: {}", file.file_name(), e));
                // Предыдущий payload не сбрасываем
                self.update(|state| state.is_reading = false);
                Err(self.fail(UploaderError::ReadFailed(e)))
            }
        }
    }

    /// Sends the current file to the analyzer for `position_id`.
    pub async fn submit(&self, position_id: &str) -> Result<(), UploaderError> {
        let (request, in_flight) = {
            let state = self.state.borrow();
            (
                AnalysisRequest::new(
                    state.encoded_payload.clone(),
                    state.file_name.clone(),
                    position_id,
                ),
                state.is_submitting,
            )
        };

        if request.encoded_payload.is_empty() {
            return Err(self.fail(UploaderError::MissingPayload));
        }
        if in_flight {
            self.sink.warn("Submit ignored: analysis already in flight");
            return Err(self.fail(UploaderError::AlreadyInFlight));
        }

        self.update(|state| state.is_submitting = true);
        self.sink.info(&format!(
            "Sending to analyzer: file={}, payload_len={}, position={}",
            request.file_name,
            request.encoded_payload.len(),
            request.position_id
        ));

        match self.analyzer.analyze(request.clone()).await {
            Ok(()) => {
                self.sink.info("Analysis completed successfully");
                self.observer
                    .file_analysis(FileAnalysisEvent::from_request(request, Utc::now()));
                self.notifier.notify(
                    NotificationVariant::Success.default_title(),
                    SUCCESS_MESSAGE,
                    NotificationVariant::Success,
                );
                self.update(|state| state.is_submitting = false);
                Ok(())
            }
            Err(e) => {
                self.sink.error(&format!("Error analyzing CV: {}", e));
                let err = self.fail(UploaderError::AnalysisFailed(e));
                self.update(|state| state.is_submitting = false);
                Err(err)
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut UploadState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        self.observer.state_changed(&snapshot);
    }

    fn fail(&self, err: UploaderError) -> UploaderError {
        self.notifier.notify_error(&err);
        err
    }
}
