use super::facet::FacetDef;
use super::record::FacetedRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Активная сортировка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

/// Текущее состояние фильтров списка
///
/// `page` начинается с 1. Любое изменение ключевого слова, фасета или сортировки
/// сбрасывает страницу на первую. На один фасет выбирается не более одного значения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub keyword: String,
    pub facets: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            facets: BTreeMap::new(),
            sort: None,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        self.page = 1;
    }

    /// `None` или пустая строка снимают фильтр по фасету
    pub fn set_facet(&mut self, facet: &str, value: Option<&str>) {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => {
                self.facets.insert(facet.to_string(), v.to_string());
            }
            None => {
                self.facets.remove(facet);
            }
        }
        self.page = 1;
    }

    /// Повторный выбор того же поля меняет направление
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(s) if s.field == field => Some(SortSpec {
                field: s.field,
                ascending: !s.ascending,
            }),
            _ => Some(SortSpec {
                field: field.to_string(),
                ascending: true,
            }),
        };
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn selected(&self, facet: &str) -> Option<&str> {
        self.facets.get(facet).map(String::as_str)
    }

    /// Ключевое слово без пробелов по краям, пустое = фильтра нет
    pub fn keyword_term(&self) -> Option<&str> {
        Some(self.keyword.trim()).filter(|k| !k.is_empty())
    }

    pub fn active_filters_count(&self) -> usize {
        self.facets.len() + usize::from(self.keyword_term().is_some())
    }

    pub fn is_identity(&self) -> bool {
        self.active_filters_count() == 0
    }
}

fn matches_keyword<R: FacetedRecord>(record: &R, needle_lower: &str) -> bool {
    record
        .keyword_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Отфильтровать набор по состоянию (логическое И всех предикатов)
///
/// Сначала проверяются фасеты (точное сравнение строк), затем ключевое слово.
/// Порядок записей сохраняется. Фасет, которого нет среди `facets`, не сужает выборку.
pub fn filter_records<'a, R: FacetedRecord>(
    dataset: &'a [R],
    state: &FilterState,
    facets: &[FacetDef<R>],
) -> Vec<&'a R> {
    let active: Vec<(&FacetDef<R>, &str)> = facets
        .iter()
        .filter_map(|def| state.selected(def.name).map(|v| (def, v)))
        .collect();
    let needle = state.keyword_term().map(str::to_lowercase);

    dataset
        .iter()
        .filter(|record| {
            active
                .iter()
                .all(|(def, selected)| def.value_of(record).as_deref() == Some(*selected))
        })
        .filter(|record| match &needle {
            Some(n) => matches_keyword(*record, n),
            None => true,
        })
        .collect()
}

/// Стабильная сортировка отфильтрованных записей
pub fn sort_records<R: FacetedRecord>(records: &mut [&R], sort: Option<&SortSpec>) {
    if let Some(sort) = sort {
        let field = sort.field.as_str();
        records.sort_by(|a, b| match (a.has_sort_value(field), b.has_sort_value(field)) {
            (true, true) => {
                let cmp = a.compare_by_field(b, field);
                if sort.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            }
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        });
    }
}
