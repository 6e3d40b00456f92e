//! URL state encoding/decoding for shareable URLs.
//!
//! Stores the dataset and the encoded graph options in the query string
//! (`?dataset=...&q=...`) so reloading restores the form and URLs can be
//! shared. The `q` value reuses the graph path grammar, so it is parsed
//! with the same decoder the segments were encoded with.

use crate::query::{decode_segment, encode_path, GraphOptions, Segment};

/// Parsed URL parameters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub dataset: Option<String>,
    pub options: GraphOptions,
}

/// Parse URL query parameters from the current browser URL.
/// Returns defaults outside the browser.
pub fn parse_from_url() -> UrlParams {
    match current_search() {
        Some(search) => parse_query(search.trim_start_matches('?')),
        None => UrlParams::default(),
    }
}

/// Push the current form state to the URL query string using `replaceState`.
/// No-op outside the browser.
pub fn push_to_url(dataset: &str, options: &GraphOptions) {
    let query = format!("?dataset={}&q={}", dataset, options_query(options));
    replace_url(&query);
}

#[cfg(target_arch = "wasm32")]
fn current_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_search() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn replace_url(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(query));
}

#[cfg(not(target_arch = "wasm32"))]
fn replace_url(_query: &str) {}

/// Encodes options as the `q` value: the path segments without a base.
fn options_query(options: &GraphOptions) -> String {
    encode_path("", options).trim_start_matches('/').to_string()
}

fn parse_query(query: &str) -> UrlParams {
    let mut params = UrlParams::default();
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        match key {
            "dataset" if !value.is_empty() => params.dataset = Some(value.to_string()),
            "q" => params.options = options_from_query(value),
            _ => {}
        }
    }

    params
}

/// Rebuilds form options from an encoded `q` value. Unrecognized segments
/// are skipped; restoring a partial form beats restoring none.
fn options_from_query(q: &str) -> GraphOptions {
    let mut options = GraphOptions::default();
    for part in q.split('/').filter(|part| !part.is_empty()) {
        match decode_segment(part) {
            Some(Segment::Algorithm(name)) => options.algorithm = Some(name),
            Some(Segment::Grid(grid)) => {
                options.top_lat = grid.top;
                options.bottom_lat = grid.bottom;
                options.left_lon = grid.left;
                options.right_lon = grid.right;
            }
            Some(Segment::Time(time)) => {
                options.start_time = time.start;
                options.end_time = time.end;
            }
            None => log::debug!("Skipping unrecognized URL segment: {}", part),
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        let options = GraphOptions {
            start_time: Some("2020-01-01".into()),
            end_time: Some("2020-01-05".into()),
            top_lat: Some("10".into()),
            bottom_lat: Some("5".into()),
            left_lon: Some("-20".into()),
            right_lon: Some("-10".into()),
            algorithm: Some("kmeans".into()),
        };

        let q = options_query(&options);
        assert_eq!(q, "ALGkmeans/10T5B-20L-10R/2020-01-01ST2020-01-05ED");
        assert_eq!(options_from_query(&q), options);
    }

    #[test]
    fn test_single_time_point_round_trip() {
        let options = GraphOptions {
            start_time: Some("t1".into()),
            end_time: Some("t1".into()),
            ..Default::default()
        };
        assert_eq!(options_from_query(&options_query(&options)), options);
    }

    #[test]
    fn test_empty_options_produce_empty_query() {
        let options = GraphOptions::default();
        assert_eq!(options_query(&options), "");
        assert_eq!(options_from_query(""), options);
    }

    #[test]
    fn test_parse_query_pairs() {
        let params = parse_query("dataset=buoy42&q=ALGsvm/t1ST");
        assert_eq!(params.dataset.as_deref(), Some("buoy42"));
        assert_eq!(params.options.algorithm.as_deref(), Some("svm"));
        assert_eq!(params.options.start_time.as_deref(), Some("t1"));
        assert!(params.options.end_time.is_none());
    }

    #[test]
    fn test_parse_query_ignores_unknown_keys() {
        let params = parse_query("theme=dark&dataset=ocean1&q=");
        assert_eq!(params.dataset.as_deref(), Some("ocean1"));
        assert!(params.options.is_empty());

        assert_eq!(parse_query(""), UrlParams::default());
    }
}
