//! API utilities for frontend-backend communication
//!
//! Helpers for constructing API URLs and query strings.

/// Get the base URL for API requests
///
/// Built from the current window location, using port 3000 for the backend server.
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Кодирует пары ключ/значение в строку запроса (без ведущего `?`)
pub fn query_string<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k.as_ref()),
                urlencoding::encode(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Склеивает путь и параметры запроса
pub fn with_query<K, V>(path: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return path.to_string();
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, query_string(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_encodes_keys_and_values() {
        let pairs = vec![
            ("page".to_string(), "0".to_string()),
            ("search_keyword".to_string(), "Лада Веста".to_string()),
            ("model".to_string(), "A&B=C".to_string()),
        ];
        let qs = query_string(&pairs);
        assert_eq!(
            qs,
            "page=0&search_keyword=%D0%9B%D0%B0%D0%B4%D0%B0%20%D0%92%D0%B5%D1%81%D1%82%D0%B0&model=A%26B%3DC"
        );
    }

    #[test]
    fn with_query_picks_separator() {
        let pairs = [("size", "50")];
        assert_eq!(with_query("/api/a025/vehicle", &pairs), "/api/a025/vehicle?size=50");
        assert_eq!(with_query("/x?a=1", &pairs), "/x?a=1&size=50");

        let empty: [(&str, &str); 0] = [];
        assert_eq!(with_query("/x", &empty), "/x");
    }
}
