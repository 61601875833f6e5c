//! Data URL encoders: the browser `FileReader` and an in-memory base64 encoder

use super::error::EncodeError;
use super::intake::file_extension;
use super::traits::{FileEncoder, UploadFile};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Файл, уже загруженный в память
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl UploadFile for MemoryFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// MIME type the browser would report for a resume file
pub fn mime_type_for(file_name: &str) -> &'static str {
    match file_extension(file_name).as_deref() {
        Some(".pdf") => "application/pdf",
        Some(".doc") => "application/msword",
        Some(".docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Encodes [`MemoryFile`]s the way `FileReader.readAsDataURL` does.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Encoder;

#[async_trait(?Send)]
impl FileEncoder<MemoryFile> for Base64Encoder {
    async fn encode_data_url(&self, file: &MemoryFile) -> Result<String, EncodeError> {
        Ok(format!(
            "data:{};base64,{}",
            mime_type_for(&file.name),
            STANDARD.encode(&file.bytes)
        ))
    }
}

/// Reads a `web_sys::File` with `FileReader.readAsDataURL`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlReader;

#[async_trait(?Send)]
impl FileEncoder<web_sys::File> for DataUrlReader {
    async fn encode_data_url(&self, file: &web_sys::File) -> Result<String, EncodeError> {
        let reader = web_sys::FileReader::new()
            .map_err(|e| EncodeError::new(format!("FileReader unavailable: {:?}", e)))?;

        // Оборачиваем onload/onerror в Promise, чтобы дождаться результата
        let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
            let done = reader.clone();
            let on_load = wasm_bindgen::closure::Closure::once_into_js(move |_ev: web_sys::ProgressEvent| {
                let result = done.result().unwrap_or(JsValue::UNDEFINED);
                let _ = resolve.call1(&JsValue::NULL, &result);
            });
            let failed = reader.clone();
            let on_error = wasm_bindgen::closure::Closure::once_into_js(move |_ev: web_sys::ProgressEvent| {
                let detail = failed
                    .error()
                    .map(|e| JsValue::from_str(&e.message()))
                    .unwrap_or_else(|| JsValue::from_str("FileReader error"));
                let _ = reject.call1(&JsValue::NULL, &detail);
            });
            reader.set_onload(Some(on_load.unchecked_ref()));
            reader.set_onerror(Some(on_error.unchecked_ref()));
        });

        reader
            .read_as_data_url(file)
            .map_err(|e| EncodeError::new(format!("readAsDataURL failed: {:?}", e)))?;

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| EncodeError::new(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;

        value
            .as_string()
            .ok_or_else(|| EncodeError::new("FileReader result is not a string"))
    }
}
