//! Graph display state.

use eframe::egui::TextureHandle;

/// Lifecycle of the graph pane. Each submission moves through
/// `Loading` and ends `Shown` or `Error`; there is no retry.
#[derive(Default)]
pub enum GraphPhase {
    /// No graph requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request's image is displayed.
    Shown,
    /// The last request failed.
    Error(String),
}

/// State for the central graph pane.
#[derive(Default)]
pub struct GraphViewState {
    pub phase: GraphPhase,

    /// Texture of the last successfully rendered graph. Kept through a
    /// reload so the old graph stays up behind the spinner.
    pub texture: Option<TextureHandle>,

    /// Generation counter for graph requests. Results tagged with an older
    /// id are dropped, so a rapid resubmission wins over a stale response.
    request_id: u64,
}

impl GraphViewState {
    /// Starts a new request generation and enters the loading phase.
    /// Returns the id to tag the request with.
    pub fn begin_request(&mut self) -> u64 {
        self.request_id += 1;
        self.phase = GraphPhase::Loading;
        self.request_id
    }

    /// Whether a result belongs to the latest submission.
    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.request_id
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, GraphPhase::Loading)
    }
}
