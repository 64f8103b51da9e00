use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Режим работы списка
///
/// Выбирается один раз при создании представления и не меняется до его размонтирования.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMode {
    /// Фильтрация, сортировка и пагинация выполняются сервером на каждый запрос
    ServerFiltered,
    /// Весь набор загружается один раз, дальше всё считается в памяти
    ClientFaceted,
}

impl ListMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMode::ServerFiltered => "server-filtered",
            ListMode::ClientFaceted => "client-faceted",
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ListMode::ServerFiltered)
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list mode: {0}")]
pub struct ListModeParseError(pub String);

impl FromStr for ListMode {
    type Err = ListModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "server-filtered" => Ok(ListMode::ServerFiltered),
            "client-faceted" => Ok(ListMode::ClientFaceted),
            other => Err(ListModeParseError(other.to_string())),
        }
    }
}
