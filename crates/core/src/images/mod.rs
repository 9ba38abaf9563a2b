//! Key-value cache for image blobs.
//!
//! Player photos and the club logo are cached in-process so views don't
//! re-download them on every render. Values are opaque bytes keyed by an
//! identifier string; the cache knows nothing about image formats.

mod image_cache;

pub use image_cache::*;
