use std::borrow::Cow;
use std::cmp::Ordering;

/// Запись, которую умеет показывать фасетный список
///
/// Записи неизменяемы с точки зрения движка: он только читает поля.
pub trait FacetedRecord: Clone {
    /// Стабильный уникальный идентификатор
    fn record_id(&self) -> &str;

    /// Поля, по которым работает поиск по ключевому слову
    fn keyword_fields(&self) -> Vec<Cow<'_, str>>;

    /// Сравнение по полю сортировки (неизвестное поле = Equal)
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;

    /// Есть ли у записи значение поля сортировки. Записи без значения
    /// идут последними при любом направлении, как NULLS LAST на сервере
    fn has_sort_value(&self, _field: &str) -> bool {
        true
    }
}

/// Сравнение необязательных значений: значения раньше пустых
pub fn compare_optional<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
