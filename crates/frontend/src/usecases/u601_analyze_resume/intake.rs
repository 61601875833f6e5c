//! File intake helpers: extension gate, data URL handling, size labels

/// Расширения, принимаемые при перетаскивании файла
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

/// Длина превью base64 в диагностике
pub const PAYLOAD_PREVIEW_LEN: usize = 100;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const SIZE_BASE: u64 = 1024;

/// Final suffix of a file name, lowercased and dot-prefixed.
///
/// A name without a dot has no extension.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, suffix) = file_name.rsplit_once('.')?;
    Some(format!(".{}", suffix.to_lowercase()))
}

/// Проверяет, что файл является PDF или документом Word
pub fn is_allowed_file(file_name: &str) -> bool {
    file_extension(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Drops everything up to and including the first comma of a data URL.
///
/// Text without a comma is returned unchanged.
pub fn strip_data_url_prefix(data_url: &str) -> &str {
    match data_url.split_once(',') {
        Some((_, payload)) => payload,
        None => data_url,
    }
}

/// Human readable size with base 1024 units
///
/// # Примеры
///
/// ```
/// use frontend::usecases::u601_analyze_resume::intake::format_file_size;
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= divisor * SIZE_BASE {
        divisor *= SIZE_BASE;
        unit += 1;
    }

    // Округляем до 2 знаков; Display у f64 отбрасывает хвостовые нули
    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, SIZE_UNITS[unit])
}

/// First [`PAYLOAD_PREVIEW_LEN`] characters of a payload, for logging.
pub fn payload_preview(payload: &str) -> String {
    if payload.len() <= PAYLOAD_PREVIEW_LEN {
        return payload.to_string();
    }
    let preview: String = payload.chars().take(PAYLOAD_PREVIEW_LEN).collect();
    format!("{}...", preview)
}
