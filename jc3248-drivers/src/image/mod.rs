//! Streaming image loader
//!
//! Fetches an image over the network, stages it, and paints it block by
//! block into a landscape region without ever holding a decoded bitmap.

mod guard;
mod pipeline;

pub use pipeline::{ImageError, ImagePipeline, ImageReport};
