//! Test doubles for the uploader collaborators

use super::encoder::{Base64Encoder, MemoryFile};
use super::error::EncodeError;
use super::state::UploadState;
use super::traits::{Analyzer, FileEncoder, UploaderObserver};
use async_trait::async_trait;
use contracts::shared::notification::NotificationEvent;
use contracts::usecases::u601_analyze_resume::{AnalysisRequest, AnalyzerError, FileAnalysisEvent};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Notification(NotificationEvent),
    FileAnalysis(FileAnalysisEvent),
}

#[derive(Default)]
pub struct RecordingObserver {
    log: RefCell<Vec<Recorded>>,
    states: RefCell<Vec<UploadState>>,
}

impl RecordingObserver {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<NotificationEvent> {
        self.log
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                Recorded::Notification(event) => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn analyses(&self) -> Vec<FileAnalysisEvent> {
        self.log
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                Recorded::FileAnalysis(event) => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn states(&self) -> Vec<UploadState> {
        self.states.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
        self.states.borrow_mut().clear();
    }
}

impl UploaderObserver for RecordingObserver {
    fn notification(&self, event: NotificationEvent) {
        self.log.borrow_mut().push(Recorded::Notification(event));
    }

    fn file_analysis(&self, event: FileAnalysisEvent) {
        self.log.borrow_mut().push(Recorded::FileAnalysis(event));
    }

    fn state_changed(&self, state: &UploadState) {
        self.states.borrow_mut().push(state.clone());
    }
}

/// Analyzer that answers from a script and remembers every request.
pub struct ScriptedAnalyzer {
    failure: Option<AnalyzerError>,
    fail_times: Cell<usize>,
    yield_first: bool,
    calls: RefCell<Vec<AnalysisRequest>>,
}

impl ScriptedAnalyzer {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            fail_times: Cell::new(0),
            yield_first: false,
            calls: RefCell::new(vec![]),
        }
    }

    pub fn failing(err: AnalyzerError) -> Self {
        Self {
            failure: Some(err),
            fail_times: Cell::new(usize::MAX),
            ..Self::succeeding()
        }
    }

    pub fn failing_once(err: AnalyzerError) -> Self {
        Self {
            failure: Some(err),
            fail_times: Cell::new(1),
            ..Self::succeeding()
        }
    }

    /// Suspend once before answering, so another task can run meanwhile.
    pub fn yielding(mut self) -> Self {
        self.yield_first = true;
        self
    }

    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Analyzer for ScriptedAnalyzer {
    async fn analyze(&self, request: AnalysisRequest) -> Result<(), AnalyzerError> {
        self.calls.borrow_mut().push(request);
        if self.yield_first {
            tokio::task::yield_now().await;
        }

        let remaining = self.fail_times.get();
        match &self.failure {
            Some(err) if remaining > 0 => {
                self.fail_times.set(remaining - 1);
                Err(err.clone())
            }
            _ => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct CountingEncoder {
    calls: Cell<usize>,
}

impl CountingEncoder {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl FileEncoder<MemoryFile> for CountingEncoder {
    async fn encode_data_url(&self, file: &MemoryFile) -> Result<String, EncodeError> {
        self.calls.set(self.calls.get() + 1);
        Base64Encoder.encode_data_url(file).await
    }
}

/// Encodes the first `ok_reads` files, then fails every read.
pub struct FailingEncoder {
    ok_reads: Cell<usize>,
}

impl FailingEncoder {
    pub fn after(ok_reads: usize) -> Self {
        Self {
            ok_reads: Cell::new(ok_reads),
        }
    }
}

#[async_trait(?Send)]
impl FileEncoder<MemoryFile> for FailingEncoder {
    async fn encode_data_url(&self, file: &MemoryFile) -> Result<String, EncodeError> {
        let left = self.ok_reads.get();
        if left == 0 {
            return Err(EncodeError::new("NotReadableError"));
        }
        self.ok_reads.set(left - 1);
        Base64Encoder.encode_data_url(file).await
    }
}

/// Suspends once before encoding.
pub struct YieldingEncoder;

#[async_trait(?Send)]
impl FileEncoder<MemoryFile> for YieldingEncoder {
    async fn encode_data_url(&self, file: &MemoryFile) -> Result<String, EncodeError> {
        tokio::task::yield_now().await;
        Base64Encoder.encode_data_url(file).await
    }
}
