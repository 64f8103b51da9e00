use crate::shared::api_utils::{api_url, with_query};
use contracts::shared::faceted_list::{FacetOptions, FetchError, PageResponse, RemoteQuery};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Параметр против кэширования GET-запросов браузером
fn cache_buster() -> (String, String) {
    ("_ts".to_string(), (js_sys::Date::now() as u64).to_string())
}

async fn get(path: &str, mut pairs: Vec<(String, String)>) -> Result<Response, FetchError> {
    pairs.push(cache_buster());
    let url = api_url(&with_query(path, &pairs));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    match FetchError::from_status(response.status()) {
        Some(err) => Err(err),
        None => Ok(response),
    }
}

/// Загрузить одну страницу ресурса (или весь набор для bulk-запроса)
pub async fn fetch_page<R: DeserializeOwned>(
    resource: &str,
    query: &RemoteQuery,
) -> Result<PageResponse<R>, FetchError> {
    let response = get(resource, query.to_pairs()).await?;
    response
        .json::<PageResponse<R>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Загрузить варианты значений фасетов, посчитанные на сервере
pub async fn fetch_facet_options(resource: &str) -> Result<FacetOptions, FetchError> {
    let response = get(resource, Vec::new()).await?;
    response
        .json::<FacetOptions>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
