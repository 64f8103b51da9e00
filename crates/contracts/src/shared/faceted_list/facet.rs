use super::bucket::Bucketer;
use super::record::FacetedRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Опция фильтра: значение уникально в пределах одного фасета
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Опции всех фасетов представления, по имени фасета
pub type FacetOptions = BTreeMap<String, Vec<FacetOption>>;

/// Откуда берётся значение колонки или фасета
///
/// `Synthetic` — значение, которого нет в данных и которое вычисляется из идентификатора.
/// Фильтрация и пагинация видят только итоговую строку, поэтому замена синтетического
/// источника на реальное поле затрагивает одно определение.
pub enum ValueSource<R> {
    Field(fn(&R) -> Option<String>),
    Synthetic(Bucketer),
}

impl<R> Clone for ValueSource<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ValueSource<R> {}

impl<R> std::fmt::Debug for ValueSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Field(_) => f.write_str("Field"),
            ValueSource::Synthetic(b) => write!(f, "Synthetic({} buckets)", b.count()),
        }
    }
}

impl<R: FacetedRecord> ValueSource<R> {
    /// Значение для записи; пустые строки считаются отсутствующими
    pub fn value_of(&self, record: &R) -> Option<String> {
        let raw = match self {
            ValueSource::Field(get) => get(record),
            ValueSource::Synthetic(bucketer) => Some(bucketer.label_of(record.record_id())),
        };
        raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}

/// Описание фасета (измерения фильтрации)
pub struct FacetDef<R> {
    pub name: &'static str,
    pub label: &'static str,
    pub source: ValueSource<R>,
    /// Человекочитаемое представление значения (по умолчанию само значение)
    pub labeler: Option<fn(&str) -> String>,
}

impl<R> Clone for FacetDef<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            label: self.label,
            source: self.source,
            labeler: self.labeler,
        }
    }
}

impl<R> std::fmt::Debug for FacetDef<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetDef")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish()
    }
}

impl<R: FacetedRecord> FacetDef<R> {
    pub fn field(name: &'static str, label: &'static str, get: fn(&R) -> Option<String>) -> Self {
        Self {
            name,
            label,
            source: ValueSource::Field(get),
            labeler: None,
        }
    }

    pub fn synthetic(name: &'static str, label: &'static str, bucketer: Bucketer) -> Self {
        Self {
            name,
            label,
            source: ValueSource::Synthetic(bucketer),
            labeler: None,
        }
    }

    pub fn with_labeler(mut self, labeler: fn(&str) -> String) -> Self {
        self.labeler = Some(labeler);
        self
    }

    pub fn value_of(&self, record: &R) -> Option<String> {
        self.source.value_of(record)
    }

    pub fn option_for(&self, value: &str) -> FacetOption {
        let label = match self.labeler {
            Some(labeler) => labeler(value),
            None => value.to_string(),
        };
        FacetOption::new(value, label)
    }
}

/// Собрать опции фасетов по набору данных
///
/// Порядок опций лексикографический по значению и не зависит от порядка записей.
/// Записи без значения опций не дают.
pub fn extract_facets<R: FacetedRecord>(dataset: &[R], defs: &[FacetDef<R>]) -> FacetOptions {
    defs.iter()
        .map(|def| {
            let distinct: BTreeSet<String> =
                dataset.iter().filter_map(|r| def.value_of(r)).collect();
            let options = distinct.iter().map(|v| def.option_for(v)).collect();
            (def.name.to_string(), options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::cmp::Ordering;

    #[derive(Clone, Debug)]
    struct Item {
        id: String,
        color: Option<String>,
    }

    impl FacetedRecord for Item {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn keyword_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.id.as_str())]
        }

        fn compare_by_field(&self, _other: &Self, _field: &str) -> Ordering {
            Ordering::Equal
        }
    }

    fn item(id: &str, color: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            color: color.map(String::from),
        }
    }

    fn defs() -> Vec<FacetDef<Item>> {
        vec![
            FacetDef::field("color", "Цвет", |i: &Item| i.color.clone()),
            FacetDef::synthetic("bucket", "Корзина", Bucketer::new(2, "")),
        ]
    }

    #[test]
    fn test_options_are_sorted_and_distinct() {
        let data = vec![
            item("1", Some("red")),
            item("2", Some("blue")),
            item("3", Some("red")),
        ];
        let facets = extract_facets(&data, &defs());
        let colors: Vec<&str> = facets["color"].iter().map(|o| o.value.as_str()).collect();
        assert_eq!(colors, vec!["blue", "red"]);
    }

    #[test]
    fn test_empty_values_produce_no_option() {
        let data = vec![item("1", None), item("2", Some("  ")), item("3", Some("green"))];
        let facets = extract_facets(&data, &defs());
        assert_eq!(facets["color"], vec![FacetOption::plain("green")]);
    }

    #[test]
    fn test_independent_of_dataset_order() {
        let mut data = vec![
            item("a1", Some("x")),
            item("b2", Some("y")),
            item("c3", Some("z")),
        ];
        let forward = extract_facets(&data, &defs());
        data.reverse();
        assert_eq!(extract_facets(&data, &defs()), forward);
    }

    #[test]
    fn test_labeler_applies_to_options() {
        let defs = vec![FacetDef::field("color", "Цвет", |i: &Item| i.color.clone())
            .with_labeler(|v| v.to_uppercase())];
        let facets = extract_facets(&[item("1", Some("red"))], &defs);
        assert_eq!(facets["color"], vec![FacetOption::new("red", "RED")]);
    }

    #[test]
    fn test_empty_dataset_yields_empty_option_lists() {
        let facets = extract_facets::<Item>(&[], &defs());
        assert!(facets["color"].is_empty());
        assert!(facets["bucket"].is_empty());
    }
}
