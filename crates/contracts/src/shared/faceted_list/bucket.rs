//! Синтетические "корзины" для записей, у которых нет реального поля-атрибута.
//!
//! Номер корзины зависит только от идентификатора записи: сумма UTF-16 кодов
//! символов по модулю числа корзин. Позиция в массиве, время и случайность не участвуют,
//! поэтому одна и та же запись всегда попадает в одну и ту же корзину.

/// Номер корзины для идентификатора. `bucket_count == 0` трактуется как одна корзина.
pub fn bucket_index(identifier: &str, bucket_count: usize) -> usize {
    let count = bucket_count.max(1) as u64;
    let sum: u64 = identifier.encode_utf16().map(u64::from).sum();
    (sum % count) as usize
}

/// Буквенное обозначение корзины: 0 → "A", 1 → "B", ..., 25 → "Z", 26 → "AA"
pub fn bucket_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Детерминированный распределитель записей по корзинам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketer {
    count: usize,
    label_prefix: &'static str,
}

impl Bucketer {
    pub const fn new(count: usize, label_prefix: &'static str) -> Self {
        Self {
            count: if count == 0 { 1 } else { count },
            label_prefix,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index_of(&self, identifier: &str) -> usize {
        bucket_index(identifier, self.count)
    }

    pub fn label_of_index(&self, index: usize) -> String {
        format!("{}{}", self.label_prefix, bucket_letter(index))
    }

    pub fn label_of(&self, identifier: &str) -> String {
        self.label_of_index(self.index_of(identifier))
    }

    /// Все метки по порядку индексов (для статичного списка опций)
    pub fn labels(&self) -> Vec<String> {
        (0..self.count).map(|i| self.label_of_index(i)).collect()
    }
}
