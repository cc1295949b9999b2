// Waterfall layout: greedy shortest-column placement plus a coarse visibility index.
// A pass is a pure function of (item source, options, viewport width) -> geometry.

pub mod attributes;
pub mod engine;
pub mod geometry;
pub mod options;
pub mod source;
pub mod spatial_index;
pub mod waterfall;

// Re-export the public API consumed by hosts and the demo binary.
pub use attributes::{
    ElementKind, IndexPath, LayoutAttributes, ELEMENT_KIND_SECTION_FOOTER,
    ELEMENT_KIND_SECTION_HEADER,
};
pub use engine::{compute_layout, LayoutResult};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use options::{LayoutConfig, SectionMetrics, SectionOverrides};
pub use source::{ItemSource, Scene, SceneSection};
pub use spatial_index::{SpatialIndex, UNION_SIZE};
pub use waterfall::WaterfallLayout;
