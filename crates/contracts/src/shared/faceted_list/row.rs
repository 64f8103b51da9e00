use super::facet::ValueSource;
use super::mode::ListMode;
use super::record::FacetedRecord;
use serde::{Deserialize, Serialize};

/// Заглушка для отсутствующего значения. Таблица не проверяет ячейки на пустоту.
pub const PLACEHOLDER: &str = "-";

/// В каких режимах показывается колонка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnScope {
    Both,
    ServerOnly,
    ClientOnly,
}

impl ColumnScope {
    pub fn includes(&self, mode: ListMode) -> bool {
        match self {
            ColumnScope::Both => true,
            ColumnScope::ServerOnly => mode == ListMode::ServerFiltered,
            ColumnScope::ClientOnly => mode == ListMode::ClientFaceted,
        }
    }
}

pub struct ColumnDef<R> {
    pub key: &'static str,
    pub title: &'static str,
    pub scope: ColumnScope,
    pub source: ValueSource<R>,
    pub sortable: bool,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            scope: self.scope,
            source: self.source,
            sortable: self.sortable,
        }
    }
}

impl<R> std::fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("scope", &self.scope)
            .finish()
    }
}

impl<R: FacetedRecord> ColumnDef<R> {
    pub fn field(key: &'static str, title: &'static str, get: fn(&R) -> Option<String>) -> Self {
        Self {
            key,
            title,
            scope: ColumnScope::Both,
            source: ValueSource::Field(get),
            sortable: true,
        }
    }

    pub fn scoped(mut self, scope: ColumnScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Заголовок колонки для таблицы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub key: String,
    pub title: String,
    pub sortable: bool,
}

/// Строка таблицы: ячейки идут в порядке `visible_columns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub cells: Vec<String>,
}

impl Row {
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or(PLACEHOLDER)
    }
}

pub fn visible_columns<R>(columns: &[ColumnDef<R>], mode: ListMode) -> Vec<ColumnHeader> {
    columns
        .iter()
        .filter(|c| c.scope.includes(mode))
        .map(|c| ColumnHeader {
            key: c.key.to_string(),
            title: c.title.to_string(),
            sortable: c.sortable,
        })
        .collect()
}

/// Проекция записи в строку таблицы для заданного режима
pub fn to_row<R: FacetedRecord>(record: &R, columns: &[ColumnDef<R>], mode: ListMode) -> Row {
    Row {
        id: record.record_id().to_string(),
        cells: columns
            .iter()
            .filter(|c| c.scope.includes(mode))
            .map(|c| {
                c.source
                    .value_of(record)
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::faceted_list::bucket::Bucketer;
    use std::borrow::Cow;
    use std::cmp::Ordering;

    #[derive(Clone)]
    struct Rec {
        id: String,
        name: Option<String>,
        dealer: Option<String>,
    }

    impl FacetedRecord for Rec {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn keyword_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(&self.id)]
        }

        fn compare_by_field(&self, _: &Self, _: &str) -> Ordering {
            Ordering::Equal
        }
    }

    fn columns() -> Vec<ColumnDef<Rec>> {
        vec![
            ColumnDef::field("id", "ID", |r: &Rec| Some(r.id.clone())),
            ColumnDef::field("name", "Название", |r: &Rec| r.name.clone()),
            ColumnDef::field("dealer", "Дилер", |r: &Rec| r.dealer.clone())
                .scoped(ColumnScope::ServerOnly),
            ColumnDef {
                key: "bucket",
                title: "Склад",
                scope: ColumnScope::ClientOnly,
                source: ValueSource::Synthetic(Bucketer::new(3, "")),
                sortable: false,
            },
        ]
    }

    #[test]
    fn test_missing_values_render_placeholder() {
        let rec = Rec {
            id: "ABC".to_string(),
            name: None,
            dealer: Some(String::new()),
        };
        let row = to_row(&rec, &columns(), ListMode::ServerFiltered);
        assert_eq!(row.cells, vec!["ABC", "-", "-"]);
    }

    #[test]
    fn test_columns_follow_mode() {
        let rec = Rec {
            id: "ABC".to_string(),
            name: Some("Sedan".to_string()),
            dealer: Some("North".to_string()),
        };
        let server = to_row(&rec, &columns(), ListMode::ServerFiltered);
        assert_eq!(server.cells, vec!["ABC", "Sedan", "North"]);

        let client = to_row(&rec, &columns(), ListMode::ClientFaceted);
        // 'A'+'B'+'C' = 198 → корзина 0
        assert_eq!(client.cells, vec!["ABC", "Sedan", "A"]);

        let headers: Vec<String> = visible_columns(&columns(), ListMode::ClientFaceted)
            .into_iter()
            .map(|h| h.key)
            .collect();
        assert_eq!(headers, vec!["id", "name", "bucket"]);
    }

    #[test]
    fn test_cell_out_of_range_is_placeholder() {
        let row = Row {
            id: "1".to_string(),
            cells: vec![],
        };
        assert_eq!(row.cell(3), PLACEHOLDER);
    }
}
