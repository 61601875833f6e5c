/// Метаданные UseCase для идентификации и маршрутизации
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u601")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "analyze_resume")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u601_analyze_resume"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Путь API для действия UseCase, например "/api/u601/analyze"
    fn api_path(action: &str) -> String {
        format!("/api/{}/{}", Self::usecase_index(), action.trim_start_matches('/'))
    }
}
