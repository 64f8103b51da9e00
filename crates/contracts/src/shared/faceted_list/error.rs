/// Ошибка загрузки данных списка
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("unauthorized (401)")]
    Unauthorized,
    #[error("forbidden (403)")]
    Forbidden,
    #[error("not found (404)")]
    NotFound,
    #[error("server error ({0})")]
    Server(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Классифицировать HTTP статус; успешные статусы ошибкой не являются
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(FetchError::Unauthorized),
            403 => Some(FetchError::Forbidden),
            404 => Some(FetchError::NotFound),
            other => Some(FetchError::Server(other)),
        }
    }

    /// Текст для баннера над таблицей
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport(_) => "Нет связи с сервером. Проверьте подключение".to_string(),
            FetchError::Unauthorized => "Сессия истекла. Войдите в систему снова".to_string(),
            FetchError::Forbidden => "Недостаточно прав для просмотра списка".to_string(),
            FetchError::NotFound | FetchError::Server(_) | FetchError::Decode(_) => {
                format!("Не удалось загрузить данные ({})", self)
            }
        }
    }
}
