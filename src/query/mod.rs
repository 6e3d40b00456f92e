//! Graph request path grammar.
//!
//! The graph server takes its keyword arguments as compact `/`-delimited
//! path segments rather than a query string:
//!
//! ```text
//! <dataset>/graph/[ALG<algorithm>/][<grid>/][<time>]
//! ```
//!
//! `encode` builds these paths from form input and `decode` parses them
//! back, which is how shareable URLs restore the form on page load.

mod decode;
mod encode;
mod options;

pub use decode::{decode_segment, DecodedGrid, DecodedTime, Segment};
pub use encode::encode_path;
pub use options::GraphOptions;
