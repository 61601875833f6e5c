//! u601: upload a resume and send it to the remote analyzer
//!
//! - `intake`: extension gate, data URL stripping, size labels
//! - `controller`: the uploader state machine (read, submit, notify)
//! - `encoder` / `api`: browser and in-memory collaborators
//! - `view`: Leptos widget wiring DOM events to the controller

pub mod api;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod intake;
pub mod notifier;
pub mod state;
pub mod traits;
pub mod view;

#[cfg(test)]
mod testing;

pub use controller::{IntakeOutcome, ResumeUploader};
pub use error::{EncodeError, UploaderError};
pub use state::UploadState;
pub use view::ResumeUploaderWidget;
