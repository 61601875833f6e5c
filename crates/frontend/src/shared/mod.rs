pub mod api_utils;
pub mod diagnostics;
pub mod icons;
pub mod notifications;
