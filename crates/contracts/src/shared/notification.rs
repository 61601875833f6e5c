use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationVariant::Info => "info",
            NotificationVariant::Success => "success",
            NotificationVariant::Warning => "warning",
            NotificationVariant::Error => "error",
        }
    }

    /// Заголовок по умолчанию для уведомления данного уровня
    pub fn default_title(&self) -> &'static str {
        match self {
            NotificationVariant::Info => "Info",
            NotificationVariant::Success => "Success",
            NotificationVariant::Warning => "Warning",
            NotificationVariant::Error => "Error",
        }
    }
}

impl std::fmt::Display for NotificationVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Эфемерное уведомление для хост-оболочки (не сохраняется)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub title: String,
    pub message: String,
    pub variant: NotificationVariant,
}

impl NotificationEvent {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant,
        }
    }

    /// Notification titled after its variant ("Error", "Warning", ...)
    pub fn with_default_title(message: impl Into<String>, variant: NotificationVariant) -> Self {
        Self::new(variant.default_title(), message, variant)
    }
}
