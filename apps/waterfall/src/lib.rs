//! Waterfall (masonry) layout engine.
//!
//! Items grouped into sections are placed into equal-width columns, each item
//! going into the currently shortest column and scaled to the column width. A
//! coarse union-rect index then answers "what is visible in this rectangle".
//!
//! The crate performs no rendering and no I/O beyond optional scene loading.
//! Everything is synchronous and single-threaded; the host serializes calls.

pub mod errors;
pub mod layout;

pub use errors::LayoutError;
pub use layout::*;
