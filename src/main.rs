#![warn(clippy::all)]

//! Climate Workbench - a web-based climate dataset graphing tool.
//!
//! The workbench is a thin front end for a graph-rendering server: it builds
//! the server's compact request paths (time range, lat/lon bounding box,
//! algorithm) from form input, requests rendered graph images, and fills the
//! form's dropdowns and autocompletes from the server's list endpoints.

mod query;
mod server;
mod state;
mod ui;

use eframe::egui;
use query::encode_path;
use server::{Endpoints, GraphChannel, GraphResult, ListChannel, ListKind, ListResult,
    MenuChannel, MenuResult};
use state::{AppState, GraphPhase};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Climate Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(WorkbenchApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(WorkbenchApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct WorkbenchApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Graph server endpoint URLs
    endpoints: Endpoints,

    /// Channel for async dataset/algorithm list fetches
    list_channel: ListChannel,

    /// Channel for async per-dataset menu fetches
    menu_channel: MenuChannel,

    /// Channel for async graph image fetches
    graph_channel: GraphChannel,
}

impl WorkbenchApp {
    /// Creates a new WorkbenchApp instance and kicks off the list fetches.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::new();
        let endpoints = Endpoints::from_environment();

        // Restore form state from a shared URL
        let url_params = state::url_state::parse_from_url();
        if let Some(dataset) = url_params.dataset {
            state.menu.select_dataset(dataset);
            state.menu_fetch_requested = true;
        }
        let restored = url_params.options;
        state.menu.fields.start_time = restored.start_time.unwrap_or_default();
        state.menu.fields.end_time = restored.end_time.unwrap_or_default();
        state.menu.fields.top_lat = restored.top_lat.unwrap_or_default();
        state.menu.fields.bottom_lat = restored.bottom_lat.unwrap_or_default();
        state.menu.fields.left_lon = restored.left_lon.unwrap_or_default();
        state.menu.fields.right_lon = restored.right_lon.unwrap_or_default();
        state.menu.selected_algorithm = restored.algorithm.unwrap_or_default();

        let list_channel = ListChannel::new();
        list_channel.fetch(cc.egui_ctx.clone(), &endpoints, ListKind::Datasets);
        list_channel.fetch(cc.egui_ctx.clone(), &endpoints, ListKind::Algorithms);

        Self {
            state,
            endpoints,
            list_channel,
            menu_channel: MenuChannel::new(),
            graph_channel: GraphChannel::new(),
        }
    }

    /// Starts the menu fetch for the currently selected dataset.
    fn request_menu(&mut self, ctx: &egui::Context) {
        let Some(dataset) = self.state.menu.selected_dataset.clone() else {
            return;
        };
        log::info!("Fetching menu for {}", dataset);
        self.menu_channel.fetch(ctx.clone(), &self.endpoints, dataset);
    }

    /// Encodes the current form into a request path and starts the graph
    /// fetch. The form state is also pushed to the URL so it can be shared.
    fn request_graph(&mut self, ctx: &egui::Context) {
        let Some(dataset) = self.state.menu.selected_dataset.clone() else {
            return;
        };
        let options = self.state.menu.graph_options();
        if options.is_empty() {
            log::debug!("No options set; requesting default graph for {}", dataset);
        }

        let encoded = encode_path(&dataset, &options);
        let url = self.endpoints.graph(&dataset, &encoded);
        log::info!("Graph request: {}", url);

        let request_id = self.state.graph.begin_request();
        self.graph_channel.fetch(ctx.clone(), request_id, url);
        self.state.status_message = format!("Rendering {}", encoded);

        state::url_state::push_to_url(&dataset, &options);
    }

    /// Handles a completed name list fetch.
    fn handle_list_result(&mut self, result: ListResult) {
        match result {
            ListResult::Loaded { kind, names } => {
                log::info!("{} obtained: {} names", kind.endpoint_name(), names.len());
                match kind {
                    ListKind::Datasets => {
                        self.state.menu.datasets = names;
                        // Default to the first dataset unless a shared URL
                        // already picked one
                        if self.state.menu.selected_dataset.is_none() {
                            if let Some(first) = self.state.menu.datasets.first().cloned() {
                                self.state.menu.select_dataset(first);
                                self.state.menu_fetch_requested = true;
                            }
                        }
                    }
                    ListKind::Algorithms => {
                        self.state.menu.algorithms = names;
                    }
                }
            }
            ListResult::Error { kind, message } => {
                log::error!("{} fetch failed: {}", kind.endpoint_name(), message);
                alert(&format!("can't obtain {}", kind.endpoint_name()));
            }
        }
    }

    /// Handles a completed menu fetch.
    fn handle_menu_result(&mut self, result: MenuResult) {
        match result {
            MenuResult::Loaded(menu) => {
                let dataset = menu.dataset.clone();
                if self.state.menu.apply_menu(*menu) {
                    self.state.status_message = format!("Loaded menu for {}", dataset);
                }
            }
            MenuResult::Error { dataset, message } => {
                log::error!("Menu fetch for {} failed: {}", dataset, message);
                if self.state.menu.selected_dataset.as_deref() == Some(dataset.as_str()) {
                    self.state.menu.menu_loading = false;
                    alert("can't obtain dataset menu");
                }
            }
        }
    }

    /// Handles a completed graph fetch. Results from superseded submissions
    /// are dropped (last request wins).
    fn handle_graph_result(&mut self, ctx: &egui::Context, result: GraphResult) {
        match result {
            GraphResult::Loaded { request_id, image } => {
                if !self.state.graph.is_current(request_id) {
                    log::debug!("Dropping stale graph result {}", request_id);
                    return;
                }
                let texture = ctx.load_texture(
                    "graph",
                    image,
                    egui::TextureOptions {
                        magnification: egui::TextureFilter::Linear,
                        minification: egui::TextureFilter::Linear,
                        ..Default::default()
                    },
                );
                self.state.graph.texture = Some(texture);
                self.state.graph.phase = GraphPhase::Shown;
                self.state.status_message = "Graph rendered".to_string();
            }
            GraphResult::Error {
                request_id,
                message,
            } => {
                if !self.state.graph.is_current(request_id) {
                    log::debug!("Dropping stale graph error {}", request_id);
                    return;
                }
                log::error!("Graph request failed: {}", message);
                self.state.graph.phase = GraphPhase::Error(message);
                self.state.status_message = "Graph request failed".to_string();
                alert("couldn't generate graph, check menu selections");
            }
        }
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Requests raised by the form last frame
        if self.state.menu_fetch_requested {
            self.state.menu_fetch_requested = false;
            self.request_menu(ctx);
        }
        if self.state.graph_requested {
            self.state.graph_requested = false;
            self.request_graph(ctx);
        }

        // Completed fetches
        if let Some(result) = self.list_channel.try_recv() {
            self.handle_list_result(result);
        }
        if let Some(result) = self.menu_channel.try_recv() {
            self.handle_menu_result(result);
        }
        if let Some(result) = self.graph_channel.try_recv() {
            self.handle_graph_result(ctx, result);
        }

        ui::render_top_bar(ctx, &mut self.state);
        ui::render_left_panel(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state);
    }
}

/// Surfaces a failed fetch to the user: one alert, no retry.
fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{}", message);
}
