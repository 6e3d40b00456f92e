//! Graph server client.
//!
//! The workbench is a thin front end for a graph-rendering server: it reads
//! name lists and per-dataset menus from JSON endpoints and requests rendered
//! graph images. Fetches run as async tasks (wasm) or worker threads (native)
//! and report back through non-blocking channels polled from the update loop.

mod api;
mod fetch;

pub use api::{DatasetGrid, Endpoints, GridRange, NameList, TimeRange, ValidRange};
pub use fetch::{
    DatasetMenu, FetchError, GraphChannel, GraphResult, ListChannel, ListKind, ListResult,
    MenuChannel, MenuResult,
};
