//! Fetch pipeline for the graph server endpoints.
//!
//! Fetches are async (or run on a worker thread natively) but egui's
//! update() is synchronous, so each request family gets a channel that
//! passes results back to the UI thread: name lists, per-dataset menus,
//! and rendered graph images.
//!
//! The error policy is deliberately flat: one failure, one message, no
//! retry. The update loop turns `Error` results into a single user-facing
//! alert.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

use super::api::{DatasetGrid, Endpoints, NameList, ValidRange};

/// Errors from a single fetch attempt.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The request could not be sent or the transfer failed.
    Request(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "server returned status {}", code),
            FetchError::Decode(msg) => write!(f, "bad response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Which name list a request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Datasets,
    Algorithms,
}

impl ListKind {
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            ListKind::Datasets => "datalist",
            ListKind::Algorithms => "alglist",
        }
    }
}

/// Result of a name list fetch.
#[derive(Debug, Clone)]
pub enum ListResult {
    Loaded { kind: ListKind, names: Vec<String> },
    Error { kind: ListKind, message: String },
}

fn list_result(kind: ListKind, outcome: Result<NameList, FetchError>) -> ListResult {
    match outcome {
        Ok(list) => ListResult::Loaded {
            kind,
            names: list.names,
        },
        Err(e) => ListResult::Error {
            kind,
            message: e.to_string(),
        },
    }
}

/// Channel for dataset and algorithm name list fetches.
pub struct ListChannel {
    sender: Sender<ListResult>,
    receiver: Receiver<ListResult>,
}

impl Default for ListChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns a fetch for one of the name lists.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context, endpoints: &Endpoints, kind: ListKind) {
        let url = match kind {
            ListKind::Datasets => endpoints.datalist(),
            ListKind::Algorithms => endpoints.alglist(),
        };
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = list_result(kind, http::get_json::<NameList>(&url).await);
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Spawns a fetch for one of the name lists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context, endpoints: &Endpoints, kind: ListKind) {
        let url = match kind {
            ListKind::Datasets => endpoints.datalist(),
            ListKind::Algorithms => endpoints.alglist(),
        };
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = list_result(kind, http::get_json::<NameList>(&url));
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed list fetch.
    pub fn try_recv(&self) -> Option<ListResult> {
        self.receiver.try_recv().ok()
    }
}

/// Everything the form needs to know about one dataset: its valid ranges
/// and the time/coordinate values that feed autocomplete.
#[derive(Debug, Clone)]
pub struct DatasetMenu {
    pub dataset: String,
    pub valid_range: ValidRange,
    pub times: Vec<String>,
    pub lats: Vec<String>,
    pub lons: Vec<String>,
}

impl DatasetMenu {
    /// Whether the dataset has a time dimension to expose in the form.
    pub fn has_time(&self) -> bool {
        !self.times.is_empty() || self.valid_range.time.is_some()
    }

    /// Whether the dataset has a regular grid to expose in the form.
    pub fn has_grid(&self) -> bool {
        (!self.lats.is_empty() && !self.lons.is_empty()) || self.valid_range.grid.is_some()
    }
}

/// Result of a dataset menu fetch.
#[derive(Debug, Clone)]
pub enum MenuResult {
    Loaded(Box<DatasetMenu>),
    Error { dataset: String, message: String },
}

/// Channel for per-dataset menu fetches (validrange + time + grid).
pub struct MenuChannel {
    sender: Sender<MenuResult>,
    receiver: Receiver<MenuResult>,
}

impl Default for MenuChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns the three menu fetches for a dataset as one task. A single
    /// failure fails the whole menu; the dataset's fields stay hidden.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context, endpoints: &Endpoints, dataset: String) {
        let endpoints = endpoints.clone();
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = match fetch_menu(&endpoints, &dataset).await {
                Ok(menu) => MenuResult::Loaded(Box::new(menu)),
                Err(e) => MenuResult::Error {
                    dataset,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Spawns the three menu fetches for a dataset as one task.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context, endpoints: &Endpoints, dataset: String) {
        let endpoints = endpoints.clone();
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = match fetch_menu(&endpoints, &dataset) {
                Ok(menu) => MenuResult::Loaded(Box::new(menu)),
                Err(e) => MenuResult::Error {
                    dataset,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed menu fetch.
    pub fn try_recv(&self) -> Option<MenuResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_menu(endpoints: &Endpoints, dataset: &str) -> Result<DatasetMenu, FetchError> {
    let valid_range: ValidRange = http::get_json(&endpoints.validrange(dataset)).await?;
    let times_text = http::get_text(&endpoints.time(dataset)).await?;
    let grid: DatasetGrid = http::get_json(&endpoints.grid(dataset)).await?;

    Ok(DatasetMenu {
        dataset: dataset.to_string(),
        valid_range,
        times: split_lines(&times_text),
        lats: grid.lat,
        lons: grid.lon,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_menu(endpoints: &Endpoints, dataset: &str) -> Result<DatasetMenu, FetchError> {
    let valid_range: ValidRange = http::get_json(&endpoints.validrange(dataset))?;
    let times_text = http::get_text(&endpoints.time(dataset))?;
    let grid: DatasetGrid = http::get_json(&endpoints.grid(dataset))?;

    Ok(DatasetMenu {
        dataset: dataset.to_string(),
        valid_range,
        times: split_lines(&times_text),
        lats: grid.lat,
        lons: grid.lon,
    })
}

/// The time endpoint returns newline-separated plain text.
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Result of a graph image fetch.
///
/// `request_id` identifies which submission a result belongs to; the update
/// loop drops results from superseded submissions (last request wins).
pub enum GraphResult {
    Loaded {
        request_id: u64,
        image: egui::ColorImage,
    },
    Error {
        request_id: u64,
        message: String,
    },
}

/// Channel for rendered graph image fetches.
pub struct GraphChannel {
    sender: Sender<GraphResult>,
    receiver: Receiver<GraphResult>,
}

impl Default for GraphChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns a graph image fetch. The image is decoded off the update loop
    /// so only a ready-to-upload `ColorImage` crosses the channel.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context, request_id: u64, url: String) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let started = web_time::Instant::now();
            let result = match http::get_bytes(&url).await {
                Ok(bytes) => graph_result(request_id, &url, &bytes, started),
                Err(e) => GraphResult::Error {
                    request_id,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Spawns a graph image fetch.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context, request_id: u64, url: String) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let started = web_time::Instant::now();
            let result = match http::get_bytes(&url) {
                Ok(bytes) => graph_result(request_id, &url, &bytes, started),
                Err(e) => GraphResult::Error {
                    request_id,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed graph fetch.
    pub fn try_recv(&self) -> Option<GraphResult> {
        self.receiver.try_recv().ok()
    }
}

fn graph_result(
    request_id: u64,
    url: &str,
    bytes: &[u8],
    started: web_time::Instant,
) -> GraphResult {
    match decode_graph_image(bytes) {
        Ok(image) => {
            log::info!(
                "Graph {} fetched: {} bytes in {:.0} ms",
                url,
                bytes.len(),
                started.elapsed().as_secs_f64() * 1000.0
            );
            GraphResult::Loaded { request_id, image }
        }
        Err(e) => GraphResult::Error {
            request_id,
            message: e.to_string(),
        },
    }
}

/// Decodes fetched image bytes (PNG from the server) into an egui image.
fn decode_graph_image(bytes: &[u8]) -> Result<egui::ColorImage, FetchError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(target_arch = "wasm32")]
mod http {
    //! GET helpers over gloo-net.

    use super::FetchError;
    use serde::de::DeserializeOwned;

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
        send(url)
            .await?
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn get_text(url: &str) -> Result<String, FetchError> {
        send(url)
            .await?
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))
    }

    pub async fn get_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
        send(url)
            .await?
            .binary()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))
    }

    async fn send(url: &str) -> Result<gloo_net::http::Response, FetchError> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod http {
    //! Blocking GET helpers over reqwest, run on worker threads.

    use super::FetchError;
    use serde::de::DeserializeOwned;

    pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
        send(url)?
            .json::<T>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub fn get_text(url: &str) -> Result<String, FetchError> {
        send(url)?
            .text()
            .map_err(|e| FetchError::Request(e.to_string()))
    }

    pub fn get_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
        let bytes = send(url)?
            .bytes()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn send(url: &str) -> Result<reqwest::blocking::Response, FetchError> {
        let response =
            reqwest::blocking::get(url).map_err(|e| FetchError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::api::{GridRange, TimeRange};

    #[test]
    fn test_split_lines_drops_blanks() {
        let text = "1948-1-1\n1948-2-1\n\n  \n1948-3-1\n";
        assert_eq!(split_lines(text), vec!["1948-1-1", "1948-2-1", "1948-3-1"]);
    }

    #[test]
    fn test_menu_feature_detection() {
        let mut menu = DatasetMenu {
            dataset: "buoy42".to_string(),
            valid_range: ValidRange::default(),
            times: Vec::new(),
            lats: Vec::new(),
            lons: Vec::new(),
        };
        assert!(!menu.has_time());
        assert!(!menu.has_grid());

        menu.times = vec!["t1".to_string()];
        assert!(menu.has_time());

        menu.lats = vec!["10".to_string()];
        assert!(!menu.has_grid()); // needs both coordinate lists
        menu.lons = vec!["-20".to_string()];
        assert!(menu.has_grid());
    }

    #[test]
    fn test_menu_feature_detection_from_valid_range_alone() {
        let menu = DatasetMenu {
            dataset: "buoy42".to_string(),
            valid_range: ValidRange {
                time: Some(TimeRange {
                    start: "t1".to_string(),
                    end: "t9".to_string(),
                }),
                grid: Some(GridRange {
                    top: "90".to_string(),
                    bottom: "-90".to_string(),
                    left: "0".to_string(),
                    right: "357.5".to_string(),
                    lat_inc: "2.5".to_string(),
                    lon_inc: "2.5".to_string(),
                }),
            },
            times: Vec::new(),
            lats: Vec::new(),
            lons: Vec::new(),
        };
        assert!(menu.has_time());
        assert!(menu.has_grid());
    }

    #[test]
    fn test_decode_graph_image_rejects_garbage() {
        assert!(decode_graph_image(b"definitely not a png").is_err());
    }

    #[test]
    fn test_decode_graph_image_accepts_png() {
        // Smallest useful check: encode a 2x1 PNG and decode it back.
        let mut png = Vec::new();
        let rgba = image::RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]).unwrap();
        image::DynamicImage::ImageRgba8(rgba)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_graph_image(&png).unwrap();
        assert_eq!(decoded.size, [2, 1]);
    }
}
