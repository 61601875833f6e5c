use super::error::UploaderError;
use super::traits::UploaderObserver;
use crate::shared::diagnostics::DiagnosticSink;
use contracts::shared::notification::{NotificationEvent, NotificationVariant};
use std::rc::Rc;

/// Notification emitter of the uploader
///
/// `notify` never fails: it records a diagnostic line and hands the event to
/// the observer synchronously.
#[derive(Clone)]
pub struct NotificationEmitter {
    observer: Rc<dyn UploaderObserver>,
    sink: Rc<dyn DiagnosticSink>,
}

impl NotificationEmitter {
    pub fn new(observer: Rc<dyn UploaderObserver>, sink: Rc<dyn DiagnosticSink>) -> Self {
        Self { observer, sink }
    }

    pub fn notify(&self, title: &str, message: &str, variant: NotificationVariant) {
        self.sink.info(&format!(
            "{}: {} - {}",
            variant.as_str().to_uppercase(),
            title,
            message
        ));
        self.observer
            .notification(NotificationEvent::new(title, message, variant));
    }

    pub fn notify_error(&self, err: &UploaderError) {
        let variant = err.variant();
        self.notify(variant.default_title(), &err.to_string(), variant);
    }
}
