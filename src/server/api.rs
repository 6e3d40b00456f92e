//! Endpoint URLs and response payloads for the graph server.
//!
//! All endpoint values arrive as strings: the server stringifies times and
//! coordinates in whatever dataset-specific format it later expects back in
//! graph request paths, so the client never interprets them.

use serde::Deserialize;

/// Builds endpoint URLs from a server base.
///
/// On wasm the base is empty and URLs stay relative to the page origin, which
/// is how the workbench is normally deployed (served by the graph server
/// itself). Native builds read the base from the `CLIMATE_WORKBENCH_SERVER`
/// environment variable.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Default server address for native development runs.
    #[cfg(not(target_arch = "wasm32"))]
    const DEFAULT_SERVER: &'static str = "http://localhost:6543";

    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Resolves the server base for the current platform.
    pub fn from_environment() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            // Same-origin relative URLs
            Self::new("")
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let base = std::env::var("CLIMATE_WORKBENCH_SERVER")
                .unwrap_or_else(|_| Self::DEFAULT_SERVER.to_string());
            Self::new(base)
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// Dataset name list.
    pub fn datalist(&self) -> String {
        self.join("datalist")
    }

    /// Algorithm name list.
    pub fn alglist(&self) -> String {
        self.join("alglist")
    }

    /// Valid time/grid ranges for a dataset.
    pub fn validrange(&self, dataset: &str) -> String {
        self.join(&format!("{}/validrange", dataset))
    }

    /// Time values for a dataset, newline-separated plain text.
    pub fn time(&self, dataset: &str) -> String {
        self.join(&format!("{}/time", dataset))
    }

    /// Latitude/longitude values for a dataset.
    pub fn grid(&self, dataset: &str) -> String {
        self.join(&format!("{}/grid", dataset))
    }

    /// Rendered graph image. `encoded_path` is the full encoder output,
    /// `<dataset>[/segments...]`, with the `graph` endpoint name spliced in
    /// after the dataset.
    pub fn graph(&self, dataset: &str, encoded_path: &str) -> String {
        let remainder = encoded_path
            .strip_prefix(dataset)
            .map(|r| r.trim_start_matches('/'))
            .unwrap_or(encoded_path);
        if remainder.is_empty() {
            self.join(&format!("{}/graph", dataset))
        } else {
            self.join(&format!("{}/graph/{}", dataset, remainder))
        }
    }
}

/// `datalist` / `alglist` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NameList {
    pub names: Vec<String>,
}

/// `validrange` payload. Either section may be missing: not every dataset
/// has a time dimension or a regular grid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidRange {
    pub time: Option<TimeRange>,
    pub grid: Option<GridRange>,
}

/// First and last time values of a dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Grid bounds and increments of a dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct GridRange {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub lat_inc: String,
    pub lon_inc: String,
}

/// `grid` payload: coordinate values for autocomplete. Scattered
/// (non-gridded) datasets omit the lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetGrid {
    #[serde(default)]
    pub gridded: bool,
    #[serde(default)]
    pub lat: Vec<String>,
    #[serde(default)]
    pub lon: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new("http://localhost:6543/");
        assert_eq!(endpoints.datalist(), "http://localhost:6543/datalist");
        assert_eq!(endpoints.alglist(), "http://localhost:6543/alglist");
        assert_eq!(
            endpoints.validrange("buoy42"),
            "http://localhost:6543/buoy42/validrange"
        );
        assert_eq!(endpoints.time("buoy42"), "http://localhost:6543/buoy42/time");
        assert_eq!(endpoints.grid("buoy42"), "http://localhost:6543/buoy42/grid");
    }

    #[test]
    fn test_relative_endpoint_urls() {
        let endpoints = Endpoints::new("");
        assert_eq!(endpoints.datalist(), "/datalist");
        assert_eq!(endpoints.time("buoy42"), "/buoy42/time");
    }

    #[test]
    fn test_graph_url_splices_endpoint_after_dataset() {
        let endpoints = Endpoints::new("");
        assert_eq!(
            endpoints.graph("buoy42", "buoy42/ALGkmeans/10T5B-20L-10R/t1"),
            "/buoy42/graph/ALGkmeans/10T5B-20L-10R/t1"
        );
        assert_eq!(endpoints.graph("buoy42", "buoy42"), "/buoy42/graph");
    }

    #[test]
    fn test_validrange_payload_sections_optional() {
        let json = r#"{"time": {"start": "1948-1-1", "end": "2011-6-1"}}"#;
        let range: ValidRange = serde_json::from_str(json).unwrap();
        assert!(range.grid.is_none());
        assert_eq!(range.time.unwrap().start, "1948-1-1");

        let range: ValidRange = serde_json::from_str("{}").unwrap();
        assert!(range.time.is_none() && range.grid.is_none());
    }

    #[test]
    fn test_dataset_grid_payload() {
        let json = r#"{"gridded": true, "lat": ["90.0", "87.5"], "lon": ["0.0", "2.5"]}"#;
        let grid: DatasetGrid = serde_json::from_str(json).unwrap();
        assert!(grid.gridded);
        assert_eq!(grid.lat.len(), 2);

        // Scattered dataset: {"gridded": false, "latlon": [...]}
        let json = r#"{"gridded": false, "latlon": [["1.0", "2.0"]]}"#;
        let grid: DatasetGrid = serde_json::from_str(json).unwrap();
        assert!(!grid.gridded);
        assert!(grid.lat.is_empty());
    }
}
