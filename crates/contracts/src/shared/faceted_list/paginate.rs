use serde::{Deserialize, Serialize};

/// Ответ удалённого `fetchPage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_pages: usize,
    pub total_elements: usize,
}

impl<T> PageResponse<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 1,
            total_elements: 0,
        }
    }
}

/// Метаданные пагинации, посчитанные сервером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePageMeta {
    pub total_pages: usize,
    pub total_elements: usize,
}

/// Страница для отображения. `total_pages >= 1` даже для пустого набора.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub total_pages: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            total_pages: 1,
            total_elements: 0,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}

/// Количество страниц: `max(ceil(len / page_size), 1)`
pub fn total_pages_for(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Нарезать отфильтрованный набор на страницы (`page` с 1)
///
/// Страница за пределами диапазона даёт пустой список строк без ошибки.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(size).min(filtered.len());
    let end = page.saturating_mul(size).min(filtered.len());

    Page {
        rows: filtered[start..end].to_vec(),
        page,
        total_pages: total_pages_for(filtered.len(), size),
        total_elements: filtered.len(),
    }
}

/// Кто считает страницы
///
/// В серверном режиме движок не режет данные сам и берёт метаданные из ответа,
/// в клиентском не смотрит на серверные метаданные вовсе.
#[derive(Debug, Clone, PartialEq)]
pub enum PaginationSource<'a, T> {
    Remote { content: &'a [T], meta: RemotePageMeta },
    Local { dataset: &'a [T], page_size: usize },
}

impl<T: Clone> PaginationSource<'_, T> {
    pub fn page(&self, page: usize) -> Page<T> {
        match self {
            PaginationSource::Remote { content, meta } => Page {
                rows: content.to_vec(),
                page: page.max(1),
                total_pages: meta.total_pages.max(1),
                total_elements: meta.total_elements,
            },
            PaginationSource::Local { dataset, page_size } => paginate(dataset, page, *page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_records_page_size_five() {
        let data: Vec<u32> = (1..=7).collect();
        let first = paginate(&data, 1, 5);
        assert_eq!(first.rows, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_elements, 7);

        let second = paginate(&data, 2, 5);
        assert_eq!(second.rows, vec![6, 7]);
        assert_eq!(second.total_pages, 2);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let data: Vec<u32> = (1..=3).collect();
        for page in 2..6 {
            let out = paginate(&data, page, 5);
            assert!(out.rows.is_empty());
            assert_eq!(out.total_pages, 1);
        }
        let huge = paginate(&data, usize::MAX, 5);
        assert!(huge.rows.is_empty());
    }

    #[test]
    fn test_empty_dataset_has_one_page() {
        let out = paginate::<u32>(&[], 1, 50);
        assert!(out.rows.is_empty());
        assert_eq!(out.total_pages, 1);
        assert_eq!(total_pages_for(0, 0), 1);
    }

    #[test]
    fn test_zero_page_size_and_page_are_clamped() {
        let data = vec!["a", "b"];
        let out = paginate(&data, 0, 0);
        assert_eq!(out.rows, vec!["a"]);
        assert_eq!(out.page, 1);
        assert_eq!(out.total_pages, 2);
    }

    #[test]
    fn test_remote_source_trusts_server_meta() {
        let content = vec![10, 11];
        let source = PaginationSource::Remote {
            content: &content,
            meta: RemotePageMeta {
                total_pages: 9,
                total_elements: 430,
            },
        };
        let page = source.page(4);
        assert_eq!(page.rows, vec![10, 11]);
        assert_eq!(page.total_pages, 9);
        assert_eq!(page.total_elements, 430);
        assert_eq!(page.page, 4);
    }

    #[test]
    fn test_remote_zero_pages_reported_as_one() {
        let source: PaginationSource<'_, u8> = PaginationSource::Remote {
            content: &[],
            meta: RemotePageMeta {
                total_pages: 0,
                total_elements: 0,
            },
        };
        assert_eq!(source.page(1).total_pages, 1);
    }
}
