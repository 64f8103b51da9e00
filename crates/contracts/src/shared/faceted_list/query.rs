use super::filter::FilterState;
use serde::{Deserialize, Serialize};

/// Параметры запроса к `fetchPage`. `page` здесь начинается с 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteQuery {
    pub page: usize,
    pub size: usize,
    pub search_keyword: Option<String>,
    pub sort_by: Option<String>,
    pub sort_desc: bool,
    pub facets: Vec<(String, String)>,
}

impl RemoteQuery {
    /// Запрос текущей страницы для серверного режима
    pub fn from_state(state: &FilterState, page_size: usize) -> Self {
        Self {
            page: state.page.max(1) - 1,
            size: page_size.max(1),
            search_keyword: state.keyword_term().map(String::from),
            sort_by: state.sort.as_ref().map(|s| s.field.clone()),
            sort_desc: state.sort.as_ref().map(|s| !s.ascending).unwrap_or(false),
            facets: state
                .facets
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Запрос "всего набора" для клиентского режима
    pub fn bulk(size: usize) -> Self {
        Self {
            page: 0,
            size,
            search_keyword: None,
            sort_by: None,
            sort_desc: false,
            facets: Vec::new(),
        }
    }

    /// Пары параметров в порядке: пагинация, поиск, сортировка, фасеты
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(keyword) = &self.search_keyword {
            pairs.push(("search_keyword".to_string(), keyword.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by".to_string(), sort_by.clone()));
            pairs.push(("sort_desc".to_string(), self.sort_desc.to_string()));
        }
        pairs.extend(self.facets.iter().cloned());
        pairs
    }
}
